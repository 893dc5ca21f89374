use jsonic::{parse, to_string, JsonMap, Value};
use proptest::prelude::*;

/// Arbitrary finite values, bounded in depth and width. Non-finite decimals
/// are excluded because the grammar cannot express them.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        any::<f64>()
            .prop_filter("finite", |d| d.is_finite())
            .prop_map(Value::Decimal),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-zA-Z0-9_ ]{0,12}", inner), 0..8).prop_map(|entries| {
                let mut map = JsonMap::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn write_then_parse_is_identity(value in arb_value()) {
        let text = to_string(&value);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn writing_is_idempotent(value in arb_value()) {
        let once = to_string(&value);
        let twice = to_string(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strings_survive_escaping(text in ".*") {
        let value = Value::String(text.clone());
        let reparsed = parse(&to_string(&value)).unwrap();
        prop_assert_eq!(reparsed, Value::String(text));
    }
}

#[test]
fn noise_does_not_change_the_document() {
    let compact = "[1,2,{\"a\":true,\"b\":[null]}]";
    let noisy = "
        # document header
        [ 1 , /* second */ 2,
          { 'a' : TRUE, // flag
            'b': [ NULL ] }
        ] // end
    ";
    assert_eq!(parse(noisy).unwrap(), parse(compact).unwrap());
}

#[test]
fn writer_output_matches_fixture() {
    let value = parse("{'b': 2, 'a': [1.0, 'x']}").unwrap();
    // Insertion order is preserved, quotes normalize to double,
    // whole decimals keep their fraction marker.
    assert_eq!(to_string(&value), r#"{"b":2,"a":[1.0,"x"]}"#);
}

#[test]
fn deep_structures_round_trip() {
    let mut value = Value::Integer(7);
    for _ in 0..60 {
        value = Value::Array(vec![value]);
    }
    let text = to_string(&value);
    assert_eq!(parse(&text).unwrap(), value);
}
