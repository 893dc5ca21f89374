//! Compact serialization of [`Value`]s back to text.
//!
//! The writer is the exact inverse of the parser: for every constructible
//! finite [`Value`] `v`, `parse(&to_string(&v)).unwrap() == v`. Output is
//! compact, with no inserted whitespace, double-quoted strings, and no
//! trailing commas.
//!
//! ```rust
//! use jsonic::{jsonic, to_string};
//!
//! let value = jsonic!({"a": [1, 2], "b": null});
//! assert_eq!(to_string(&value), r#"{"a":[1,2],"b":null}"#);
//! ```

use crate::Value;

/// Serializes a [`Value`] to its compact text form.
///
/// Strings escape `\t \r \n \f \b " \\`; other characters pass through
/// verbatim. Decimals that would print as a bare integer gain a `.0` suffix
/// so re-parsing preserves the Decimal tag; non-finite decimals render as
/// `null` because the grammar cannot express them.
#[must_use]
pub fn to_string(value: &Value) -> String {
    let mut writer = Writer::new();
    writer.value(value);
    writer.into_inner()
}

struct Writer {
    output: String,
}

impl Writer {
    fn new() -> Self {
        Writer {
            output: String::with_capacity(256),
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => self.output.push_str(&i.to_string()),
            Value::Decimal(d) => self.decimal(*d),
            Value::String(s) => self.string(s),
            Value::Array(arr) => self.array(arr),
            Value::Object(obj) => self.object(obj),
        }
    }

    fn decimal(&mut self, value: f64) {
        if !value.is_finite() {
            self.output.push_str("null");
            return;
        }
        let text = value.to_string();
        self.output.push_str(&text);
        if !text.contains('.') {
            self.output.push_str(".0");
        }
    }

    fn string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn array(&mut self, elements: &[Value]) {
        self.output.push('[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.value(element);
        }
        self.output.push(']');
    }

    fn object(&mut self, map: &crate::JsonMap) {
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.string(key);
            self.output.push(':');
            self.value(value);
        }
        self.output.push('}');
    }
}
