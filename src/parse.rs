//! Recursive-descent parsing of raw text into [`Value`]s.
//!
//! ## Overview
//!
//! The parser makes one pass over the input with a single cursor that tracks
//! byte offset, line (1-based), and column (0-based, reset on `\n`). Every
//! failure reports the position at which it was detected.
//!
//! The accepted grammar is a superset of JSON:
//!
//! - `#`, `//`, and `/* ... */` comments
//! - single- or double-quoted strings
//! - case-insensitive `true`, `false`, `null`
//! - `\uXXXX` string escapes, with surrogate-pair combination
//!
//! ## Usage
//!
//! Most callers want the single-document entry point:
//!
//! ```rust
//! use jsonic::{parse, Value};
//!
//! let value = parse("[1, 2, 3] // counts").unwrap();
//! assert_eq!(value.as_array().unwrap().len(), 3);
//! ```
//!
//! [`Parser`] also supports pulling several top-level values out of one
//! input, returning `Ok(None)` at a clean end of input:
//!
//! ```rust
//! use jsonic::{Parser, Value};
//!
//! let mut parser = Parser::new("1 2 3");
//! assert_eq!(parser.next_value().unwrap(), Some(Value::Integer(1)));
//! assert_eq!(parser.next_value().unwrap(), Some(Value::Integer(2)));
//! assert_eq!(parser.next_value().unwrap(), Some(Value::Integer(3)));
//! assert_eq!(parser.next_value().unwrap(), None);
//! ```

use crate::{Error, JsonMap, Result, Value};

/// Maximum container nesting the parser accepts before failing.
///
/// Recursion depth equals input nesting depth, so the cap keeps hostile
/// input from exhausting the call stack.
pub const MAX_DEPTH: usize = 128;

/// A pending closing delimiter, pushed when `[` or `{` is consumed.
struct Expectation {
    closer: char,
    line: usize,
    column: usize,
}

/// The parser.
///
/// Owns its cursor and delimiter stack; nothing is shared between parse
/// calls. Created via [`Parser::new`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    pending: Vec<Expectation>,
}

/// Parses exactly one document from `text`.
///
/// Whitespace and comments may surround the value, but any further content
/// after it is a structural error, as is an input holding no value at all.
///
/// # Examples
///
/// ```rust
/// use jsonic::{parse, Error};
///
/// assert!(parse("{'a': 'b'}").is_ok());
/// assert!(matches!(parse("0 0"), Err(Error::Structural { .. })));
/// ```
///
/// # Errors
///
/// Any syntax-level [`Error`] variant, carrying the line and column at which
/// the failure was detected.
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser::new(text);
    parser.skip_void()?;
    if parser.at_end() {
        return Err(Error::structural(
            parser.line,
            parser.column,
            "unexpected end of input, expected a value",
        ));
    }
    let value = parser.parse_value()?;
    parser.skip_void()?;
    if !parser.at_end() {
        return Err(Error::structural(
            parser.line,
            parser.column,
            "trailing content after document",
        ));
    }
    Ok(value)
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with a fresh cursor.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 0,
            pending: Vec::new(),
        }
    }

    /// Parses the next top-level value, or returns `Ok(None)` at a clean end
    /// of input.
    ///
    /// # Errors
    ///
    /// Same as [`parse`], except that trailing content is the next document
    /// rather than an error.
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        self.skip_void()?;
        if self.at_end() {
            return Ok(None);
        }
        self.parse_value().map(Some)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips whitespace and comments. Runs before every token read,
    /// including between container elements.
    fn skip_void(&mut self) -> Result<()> {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.next_char();
                }
                Some('#') => self.skip_line(),
                Some('/') => {
                    let mut lookahead = self.input[self.position..].chars();
                    lookahead.next();
                    match lookahead.next() {
                        Some('/') => self.skip_line(),
                        Some('*') => self.skip_block()?,
                        // A bare '/' belongs to the next token; let the
                        // dispatcher report it.
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Consumes through the next CR or LF, or to end of input.
    fn skip_line(&mut self) {
        while let Some(ch) = self.next_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
        }
    }

    /// Consumes a `/* ... */` comment, failing if no closing marker exists.
    fn skip_block(&mut self) -> Result<()> {
        let (line, column) = (self.line, self.column);
        self.next_char();
        self.next_char();
        let mut previous = '\0';
        while let Some(ch) = self.next_char() {
            if previous == '*' && ch == '/' {
                return Ok(());
            }
            previous = ch;
        }
        Err(Error::comment(line, column))
    }

    /// Dispatches on the first non-skipped character.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_void()?;
        match self.peek_char() {
            None => Err(self.unclosed()),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some(ch @ (']' | '}' | ',' | ':')) => Err(Error::structural(
                self.line,
                self.column,
                format!("expected a value, found '{ch}'"),
            )),
            Some(_) => self.parse_literal(),
        }
    }

    fn push_expectation(&mut self, closer: char) -> Result<()> {
        if self.pending.len() >= MAX_DEPTH {
            return Err(Error::structural(
                self.line,
                self.column,
                format!("maximum nesting depth of {MAX_DEPTH} exceeded"),
            ));
        }
        self.pending.push(Expectation {
            closer,
            line: self.line,
            column: self.column,
        });
        Ok(())
    }

    /// End-of-input error naming the innermost pending closer, if any.
    fn unclosed(&self) -> Error {
        match self.pending.last() {
            Some(exp) => Error::structural(
                self.line,
                self.column,
                format!(
                    "unexpected end of input, expected '{}' to close delimiter opened at line {}, column {}",
                    exp.closer, exp.line, exp.column
                ),
            ),
            None => Error::structural(self.line, self.column, "unexpected end of input"),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.push_expectation(']')?;
        self.next_char();
        self.skip_void()?;

        let mut elements = Vec::new();
        if self.peek_char() == Some(']') {
            self.next_char();
            self.pending.pop();
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);
            self.skip_void()?;
            match self.peek_char() {
                Some(',') => {
                    // A ',' not followed by a value surfaces through the
                    // dispatcher on the next iteration.
                    self.next_char();
                }
                Some(']') => {
                    self.next_char();
                    self.pending.pop();
                    return Ok(Value::Array(elements));
                }
                Some(ch) => {
                    return Err(Error::structural(
                        self.line,
                        self.column,
                        format!("expected ',' or ']', found '{ch}'"),
                    ));
                }
                None => return Err(self.unclosed()),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.push_expectation('}')?;
        self.next_char();
        self.skip_void()?;

        let mut map = JsonMap::new();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.pending.pop();
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_void()?;
            let (key_line, key_column) = (self.line, self.column);
            let key = match self.parse_value()? {
                Value::String(key) => key,
                other => {
                    return Err(Error::structural(
                        key_line,
                        key_column,
                        format!("object key must be a string, found {}", other.kind()),
                    ));
                }
            };

            self.skip_void()?;
            match self.peek_char() {
                Some(':') => {
                    self.next_char();
                }
                Some(ch) => {
                    return Err(Error::structural(
                        self.line,
                        self.column,
                        format!("expected ':' after object key, found '{ch}'"),
                    ));
                }
                None => return Err(self.unclosed()),
            }

            let value = self.parse_value()?;
            // Duplicate keys overwrite: last write wins.
            map.insert(key, value);

            self.skip_void()?;
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    self.pending.pop();
                    return Ok(Value::Object(map));
                }
                Some(ch) => {
                    return Err(Error::structural(
                        self.line,
                        self.column,
                        format!("expected ',' or '}}', found '{ch}'"),
                    ));
                }
                None => return Err(self.unclosed()),
            }
        }
    }

    /// Accumulates a quoted string, decoding escapes as it goes.
    fn parse_string(&mut self, quote: char) -> Result<String> {
        self.next_char();
        let mut output = String::new();

        loop {
            let (line, column) = (self.line, self.column);
            match self.next_char() {
                None => return Err(Error::string(line, column, "unterminated string")),
                Some(ch) if ch == quote => return Ok(output),
                Some('\n' | '\r') => {
                    return Err(Error::string(line, column, "newline inside string literal"));
                }
                Some('\\') => match self.next_char() {
                    None => {
                        return Err(Error::string(self.line, self.column, "unterminated string"));
                    }
                    Some('r') => output.push('\r'),
                    Some('n') => output.push('\n'),
                    Some('t') => output.push('\t'),
                    Some('b') => output.push('\u{0008}'),
                    Some('f') => output.push('\u{000C}'),
                    Some(literal @ ('"' | '\'' | '\\' | '/')) => output.push(literal),
                    Some('u') => output.push(self.parse_unicode_escape()?),
                    Some(other) => {
                        return Err(Error::string(
                            line,
                            column,
                            format!("invalid escape character '{other}'"),
                        ));
                    }
                },
                Some(ch) => output.push(ch),
            }
        }
    }

    /// Reads exactly four hex digits as one UTF-16 code unit.
    fn read_hex4(&mut self) -> Result<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let (line, column) = (self.line, self.column);
            match self.next_char() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    unit = unit << 4 | ch.to_digit(16).unwrap_or(0) as u16;
                }
                _ => {
                    return Err(Error::unicode(
                        line,
                        column,
                        "expected 4 hex digits after '\\u'",
                    ));
                }
            }
        }
        Ok(unit)
    }

    /// Decodes a `\u` escape, combining surrogate pairs into one character.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let (line, column) = (self.line, self.column);
        let unit = self.read_hex4()?;

        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(Error::unicode(
                line,
                column,
                format!("unexpected low surrogate \\u{unit:04X}"),
            ));
        }

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                return Err(Error::unicode(
                    line,
                    column,
                    format!("unpaired high surrogate \\u{unit:04X}"),
                ));
            }
            let low = self.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Error::unicode(
                    line,
                    column,
                    format!("invalid low surrogate \\u{low:04X}"),
                ));
            }
            let scalar =
                0x10000 + ((u32::from(unit) - 0xD800) << 10 | (u32::from(low) - 0xDC00));
            return char::from_u32(scalar).ok_or_else(|| {
                Error::unicode(line, column, "surrogate pair outside unicode range")
            });
        }

        char::from_u32(u32::from(unit))
            .ok_or_else(|| Error::unicode(line, column, "invalid unicode code point"))
    }

    /// Scans a bare literal up to the next delimiter and classifies it.
    fn parse_literal(&mut self) -> Result<Value> {
        let (line, column) = (self.line, self.column);
        let start = self.position;

        while let Some(ch) = self.peek_char() {
            if matches!(ch, ',' | ']' | '}' | ':' | ' ' | '\t' | '\r' | '\n') {
                break;
            }
            self.next_char();
        }

        let raw = &self.input[start..self.position];
        classify_literal(raw).ok_or_else(|| {
            Error::literal(line, column, format!("not a valid literal: '{raw}'"))
        })
    }
}

/// Matches a bare token against the literal grammars.
fn classify_literal(raw: &str) -> Option<Value> {
    if raw.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if raw.eq_ignore_ascii_case("null") {
        return Some(Value::Null);
    }
    classify_number(raw)
}

/// Validates `raw` against `[+-]?(0|[1-9]\d*)(\.\d*)?([eE][+-]?\d+)?` and
/// produces an `Integer` when no fraction is present, otherwise a `Decimal`.
///
/// Integer exponent forms are evaluated with checked arithmetic; a value
/// that does not fit `i64` exactly degrades to `Decimal`.
fn classify_number(raw: &str) -> Option<Value> {
    let bytes = raw.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return None,
    }
    let int_end = pos;

    let mut has_fraction = false;
    if bytes.get(pos) == Some(&b'.') {
        has_fraction = true;
        pos += 1;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    let mut exponent: Option<i32> = None;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        let exp_start = pos;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let digit_start = pos;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
        if pos == digit_start {
            return None;
        }
        exponent = Some(raw[exp_start..pos].parse().ok()?);
    }

    if pos != bytes.len() {
        return None;
    }

    if has_fraction {
        return raw.parse::<f64>().ok().map(Value::Decimal);
    }

    let as_decimal = || raw.parse::<f64>().ok().map(Value::Decimal);

    if exponent.is_none() {
        // Covers the full i64 range, including i64::MIN.
        return match raw.parse::<i64>() {
            Ok(value) => Some(Value::Integer(value)),
            Err(_) => as_decimal(),
        };
    }

    let mut magnitude: i64 = match raw[int_start..int_end].parse() {
        Ok(m) => m,
        Err(_) => return as_decimal(),
    };
    if raw.starts_with('-') {
        magnitude = -magnitude;
    }

    match exponent {
        None | Some(0) => Some(Value::Integer(magnitude)),
        Some(exp) if exp > 0 => {
            let scale = match 10i64.checked_pow(exp as u32) {
                Some(scale) => scale,
                None => return as_decimal(),
            };
            match magnitude.checked_mul(scale) {
                Some(value) => Some(Value::Integer(value)),
                None => as_decimal(),
            }
        }
        // Negative exponents rarely divide evenly; keep the exact decimal.
        Some(_) => as_decimal(),
    }
}
