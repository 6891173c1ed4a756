//! Scalar parsing for numeric attributes.

use super::{ParseResult, SyntaxError};

/// The numeric kind an attribute is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int,
    Double,
}

impl NumberKind {
    /// The type name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
        }
    }
}

/// A parsed scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Double(value) => value,
        }
    }
}

/// Parses `text` as the given kind; surrounding whitespace is not allowed.
pub fn parse_number(text: &str, kind: NumberKind) -> ParseResult<Number> {
    let whole = 0..text.len();
    match kind {
        NumberKind::Int => text
            .parse::<i64>()
            .map(Number::Int)
            .map_err(|err| SyntaxError::new(whole, format!("{err}."))),
        // Only digit literals are accepted; `inf` and `nan` spellings are not,
        // but a literal too large for f64 saturates to infinity.
        NumberKind::Double if is_spelled_out(text) => {
            Err(SyntaxError::new(whole, "invalid float literal."))
        }
        NumberKind::Double => text
            .parse::<f64>()
            .map(Number::Double)
            .map_err(|err| SyntaxError::new(whole, format!("{err}."))),
    }
}

fn is_spelled_out(text: &str) -> bool {
    text.trim_start_matches(['+', '-'])
        .starts_with(|ch: char| ch.is_ascii_alphabetic())
}
