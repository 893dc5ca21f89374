//! Error types for parsing, writing, and object mapping.
//!
//! Every failure the library can produce is one variant of [`Error`]. Syntax
//! errors carry the position at which they were detected: a 1-based line and
//! a 0-based column, counted as the parser advances and reset on each `\n`.
//!
//! ## Error Categories
//!
//! - **Structural**: missing/extra/mismatched `{` `}` `[` `]` `,` `:`
//! - **Literal**: malformed number/boolean/null token
//! - **StringLiteral**: unterminated string, illegal escape, raw newline
//! - **Unicode**: malformed `\u` escape or unpaired surrogate
//! - **Comment**: unterminated block comment
//! - **VariantMismatch**: accessor called on the wrong [`Value`] variant
//! - **Mapping**: a record field could not be saved or loaded
//!
//! All of these are terminal: the library never retries or partially repairs
//! malformed input. Callers render the message and position to the user.
//!
//! ## Examples
//!
//! ```rust
//! use jsonic::{parse, Error};
//!
//! let err = parse("'unterminated").unwrap_err();
//! assert!(matches!(err, Error::StringLiteral { .. }));
//! ```
//!
//! [`Value`]: crate::Value

use crate::value::Kind;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Missing, extra, or mismatched structural token.
    #[error("syntax error at line {line}, column {column}: {msg}")]
    Structural {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A literal token that matches none of the integer, decimal, boolean,
    /// or null grammars.
    #[error("malformed literal at line {line}, column {column}: {msg}")]
    Literal {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Unterminated string, illegal escape, or a raw newline inside a string.
    #[error("string error at line {line}, column {column}: {msg}")]
    StringLiteral {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Malformed `\u` escape sequence.
    #[error("unicode error at line {line}, column {column}: {msg}")]
    Unicode {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A `/*` comment with no closing `*/` before end of input.
    #[error("unterminated comment starting at line {line}, column {column}")]
    Comment { line: usize, column: usize },

    /// An accessor asked a [`Value`](crate::Value) for the wrong variant.
    #[error("wrong value kind: expected {expected}, found {found}")]
    VariantMismatch { expected: Kind, found: Kind },

    /// The object mapper could not resolve a type or field.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a structural error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonic::Error;
    ///
    /// let err = Error::structural(3, 7, "expected ',' or ']'");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn structural(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Structural {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a malformed-literal error.
    pub fn literal(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Literal {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a string-token error.
    pub fn string(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::StringLiteral {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a `\u` escape error.
    pub fn unicode(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Unicode {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates an unterminated-comment error pointing at the opening `/*`.
    pub fn comment(line: usize, column: usize) -> Self {
        Error::Comment { line, column }
    }

    /// Creates a wrong-variant error naming the requested and actual kinds.
    pub fn variant_mismatch(expected: Kind, found: Kind) -> Self {
        Error::VariantMismatch { expected, found }
    }

    /// Creates a mapping error.
    pub fn mapping(msg: impl Into<String>) -> Self {
        Error::Mapping(msg.into())
    }

    /// Returns the `(line, column)` where the error was detected, if the
    /// variant carries one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonic::{Error, Kind};
    ///
    /// assert_eq!(Error::structural(2, 5, "x").position(), Some((2, 5)));
    /// assert_eq!(
    ///     Error::variant_mismatch(Kind::String, Kind::Integer).position(),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Structural { line, column, .. }
            | Error::Literal { line, column, .. }
            | Error::StringLiteral { line, column, .. }
            | Error::Unicode { line, column, .. }
            | Error::Comment { line, column } => Some((*line, *column)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
