use jsonic::{jsonic, parse, to_string, Error, Parser, Value, MAX_DEPTH};

#[test]
fn array_of_integers() {
    let value = parse("[1,2,3]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3)
        ])
    );
}

#[test]
fn quote_styles_are_interchangeable() {
    let single = parse("{'a':'b'}").unwrap();
    let double = parse("{\"a\":\"b\"}").unwrap();
    assert_eq!(single, double);
    assert_eq!(single, jsonic!({"a": "b"}));
    // The writer always emits double quotes.
    assert_eq!(to_string(&single), r#"{"a":"b"}"#);
}

#[test]
fn empty_containers_parse() {
    assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse("{}").unwrap(), jsonic!({}));
}

#[test]
fn scalars_parse() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
    assert_eq!(parse("44332211").unwrap(), Value::Integer(44332211));
    assert_eq!(parse("1.23456789").unwrap(), Value::Decimal(1.23456789));
    assert_eq!(
        parse("\"String_value!\\n\"").unwrap(),
        Value::String("String_value!\n".to_string())
    );
}

#[test]
fn literals_are_case_insensitive() {
    assert_eq!(parse("TRUE").unwrap(), Value::Bool(true));
    assert_eq!(parse("False").unwrap(), Value::Bool(false));
    assert_eq!(parse("NULL").unwrap(), Value::Null);
    assert_eq!(parse("nUlL").unwrap(), Value::Null);
}

#[test]
fn integer_exponent_forms() {
    assert_eq!(parse("3e2").unwrap(), Value::Integer(300));
    assert_eq!(parse("-2E3").unwrap(), Value::Integer(-2000));
    assert_eq!(parse("1e-2").unwrap(), Value::Decimal(0.01));
    assert_eq!(parse("2.5e1").unwrap(), Value::Decimal(25.0));
}

#[test]
fn comments_in_all_three_styles() {
    let text = "[1 /* block */, # hash\n 2, // line\n 3]";
    assert_eq!(parse(text).unwrap(), parse("[1,2,3]").unwrap());

    let text = "# leading\n{'a': /* inline */ 1} // trailing";
    assert_eq!(parse(text).unwrap(), jsonic!({"a": 1}));
}

#[test]
fn unterminated_block_comment() {
    let err = parse("[1, /* never closed").unwrap_err();
    assert!(matches!(err, Error::Comment { .. }));
    assert_eq!(err.position(), Some((1, 4)));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let value = parse("{'k': 1, 'k': 2}").unwrap();
    assert_eq!(value, jsonic!({"k": 2}));
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn missing_value_reports_closer_position() {
    let err = parse("{\"key\":}").unwrap_err();
    assert!(matches!(err, Error::Structural { .. }));
    assert_eq!(err.position(), Some((1, 7)));
}

#[test]
fn unterminated_string_is_a_string_error() {
    let err = parse("'unterminated").unwrap_err();
    assert!(matches!(err, Error::StringLiteral { .. }));
}

#[test]
fn trailing_content_is_structural() {
    let err = parse("0 0").unwrap_err();
    assert!(matches!(err, Error::Structural { .. }));
    assert_eq!(err.position(), Some((1, 2)));

    assert!(matches!(parse("[] []"), Err(Error::Structural { .. })));
}

#[test]
fn empty_input_is_structural() {
    assert!(matches!(parse(""), Err(Error::Structural { .. })));
    assert!(matches!(parse("  // nothing\n"), Err(Error::Structural { .. })));
}

#[test]
fn dangling_commas_are_structural() {
    assert!(matches!(parse("[1,]"), Err(Error::Structural { .. })));
    assert!(matches!(parse("{'a':1,}"), Err(Error::Structural { .. })));
    assert!(matches!(parse("[,1]"), Err(Error::Structural { .. })));
}

#[test]
fn missing_separators_are_structural() {
    assert!(matches!(parse("[1 2]"), Err(Error::Structural { .. })));
    assert!(matches!(parse("{'a' 1}"), Err(Error::Structural { .. })));
    assert!(matches!(parse("{'a':1 'b':2}"), Err(Error::Structural { .. })));
}

#[test]
fn non_string_object_keys_are_rejected() {
    let err = parse("{1: 2}").unwrap_err();
    match err {
        Error::Structural { msg, .. } => assert!(msg.contains("key")),
        other => panic!("expected structural error, got {other:?}"),
    }
    assert!(matches!(parse("{[1]: 2}"), Err(Error::Structural { .. })));
}

#[test]
fn unclosed_containers_name_the_expected_closer() {
    let err = parse("[1, 2").unwrap_err();
    match err {
        Error::Structural { msg, .. } => assert!(msg.contains("']'")),
        other => panic!("expected structural error, got {other:?}"),
    }

    let err = parse("{'a': {'b': 1}").unwrap_err();
    match err {
        Error::Structural { msg, .. } => assert!(msg.contains("'}'")),
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn stray_closers_are_structural() {
    assert!(matches!(parse("]"), Err(Error::Structural { .. })));
    assert!(matches!(parse("}"), Err(Error::Structural { .. })));
    assert!(matches!(parse(":"), Err(Error::Structural { .. })));
}

#[test]
fn malformed_literals() {
    assert!(matches!(parse("tru"), Err(Error::Literal { .. })));
    assert!(matches!(parse("01"), Err(Error::Literal { .. })));
    assert!(matches!(parse("1.2.3"), Err(Error::Literal { .. })));
    assert!(matches!(parse("1e"), Err(Error::Literal { .. })));
    assert!(matches!(parse("nulll"), Err(Error::Literal { .. })));
}

#[test]
fn literal_error_position_spans_lines() {
    let err = parse("{\n'a': tru\n}").unwrap_err();
    assert!(matches!(err, Error::Literal { .. }));
    assert_eq!(err.position(), Some((2, 5)));
}

#[test]
fn string_escapes_decode() {
    assert_eq!(
        parse(r#""\r\n\t\b\f\"\'\\\/""#).unwrap(),
        Value::String("\r\n\t\u{0008}\u{000C}\"'\\/".to_string())
    );
}

#[test]
fn invalid_escape_is_a_string_error() {
    let err = parse(r#""\x""#).unwrap_err();
    assert!(matches!(err, Error::StringLiteral { .. }));
}

#[test]
fn raw_newline_in_string_is_a_string_error() {
    let err = parse("\"line one\nline two\"").unwrap_err();
    assert!(matches!(err, Error::StringLiteral { .. }));
}

#[test]
fn unicode_escapes_decode() {
    assert_eq!(
        parse("\"\\u0041\"").unwrap(),
        Value::String("A".to_string())
    );
    assert_eq!(
        parse("\"\\u00e9t\\u00E9\"").unwrap(),
        Value::String("été".to_string())
    );
    // Surrogate pair combines into one character.
    assert_eq!(
        parse("\"\\uD83D\\uDE00\"").unwrap(),
        Value::String("\u{1F600}".to_string())
    );
}

#[test]
fn bad_unicode_escapes() {
    assert!(matches!(parse(r#""\u12""#), Err(Error::Unicode { .. })));
    assert!(matches!(parse(r#""\uZZZZ""#), Err(Error::Unicode { .. })));
    // Lone high surrogate.
    assert!(matches!(parse(r#""\uD83D""#), Err(Error::Unicode { .. })));
    // Lone low surrogate.
    assert!(matches!(parse(r#""\uDE00""#), Err(Error::Unicode { .. })));
    // High surrogate followed by a non-surrogate unit.
    assert!(matches!(
        parse(r#""\uD83DA""#),
        Err(Error::Unicode { .. })
    ));
}

#[test]
fn nesting_below_the_cap_parses() {
    let depth = MAX_DEPTH - 1;
    let text = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&text).is_ok());
}

#[test]
fn nesting_beyond_the_cap_fails_gracefully() {
    let depth = MAX_DEPTH + 8;
    let text = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let err = parse(&text).unwrap_err();
    match err {
        Error::Structural { msg, .. } => assert!(msg.contains("depth")),
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn streaming_reads_until_none() {
    let mut parser = Parser::new("['a'] {'b': 1} # done\n null");
    assert_eq!(
        parser.next_value().unwrap(),
        Some(Value::Array(vec![Value::String("a".to_string())]))
    );
    assert_eq!(parser.next_value().unwrap(), Some(jsonic!({"b": 1})));
    assert_eq!(parser.next_value().unwrap(), Some(Value::Null));
    assert_eq!(parser.next_value().unwrap(), None);
    assert_eq!(parser.next_value().unwrap(), None);
}

#[test]
fn nested_document() {
    let text = r#"
    {
        'items': [
            {'Name': 'Coffee', 'Amount': 2},
            {'Name': 'Tea', 'Amount': 5}
        ],
        'revision': 3 # bumped on save
    }
    "#;
    let value = parse(text).unwrap();
    let items = value.as_object().unwrap().get("items").unwrap();
    assert_eq!(items.as_array().unwrap().len(), 2);
    let first = &items.as_array().unwrap()[0];
    assert_eq!(
        first.as_object().unwrap().get("Amount"),
        Some(&Value::Integer(2))
    );
}
