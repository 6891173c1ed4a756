//! Parsers for the sub-languages embedded in attribute values.
//!
//! Every parser here works on the raw value text and reports value-local
//! spans. None of them emit diagnostics themselves: they return either a tree
//! or the first [`SyntaxError`] and leave phrasing to the semantic layer.

pub mod arrow;
pub mod color;
pub mod html;
pub mod number;
pub mod record;
pub mod style;

use crate::ast::Span;

/// A grammar mismatch inside an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct SyntaxError {
    /// Value-local span of the offending input.
    pub span: Span,
    /// Grammar-derived description of the mismatch.
    pub detail: String,
}

impl SyntaxError {
    pub fn new(span: Span, detail: impl Into<String>) -> Self {
        Self {
            span,
            detail: detail.into(),
        }
    }
}

/// Result type shared by the sub-language parsers.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Describes the character at `pos`, or `<EOF>` past the end.
pub(crate) fn describe_at(text: &str, pos: usize) -> String {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or_else(|| "<EOF>".to_string(), |ch| ch.to_string())
}

/// Span of the character at `pos` (empty at end of input).
pub(crate) fn char_span(text: &str, pos: usize) -> Span {
    let len = text
        .get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    pos..pos + len
}
