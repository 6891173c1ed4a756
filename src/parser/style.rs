//! Style list grammar.
//!
//! ```text
//! style     := item ([,\s]+ item)*
//! item      := name ('(' arg (',' arg)* ')')?
//! ```

use super::{ParseResult, SyntaxError, char_span, describe_at};
use crate::ast::{Span, Spanned};

/// One `name` or `name(args)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleItem {
    /// The item name with its value-local span.
    pub name: Spanned<String>,
    /// Raw argument texts, trimmed.
    pub args: Vec<String>,
}

impl StyleItem {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn name_span(&self) -> Span {
        self.name.span.clone()
    }
}

/// Parses a style value into its items.
pub fn parse_style(text: &str) -> ParseResult<Vec<StyleItem>> {
    let mut items = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    loop {
        while pos < bytes.len() && is_separator(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let start = pos;
        while pos < bytes.len() && !is_separator(bytes[pos]) && bytes[pos] != b'(' && bytes[pos] != b')' {
            pos += 1;
        }
        if pos == start {
            return Err(unexpected(text, pos));
        }
        let name = Spanned::new(text[start..pos].to_string(), start..pos);

        let mut args = Vec::new();
        if bytes.get(pos) == Some(&b'(') {
            let open = pos;
            let close = text[open..]
                .find(')')
                .map(|rel| open + rel)
                .ok_or_else(|| {
                    SyntaxError::new(
                        char_span(text, text.len()),
                        "Mismatched input '<EOF>' expecting ')'.",
                    )
                })?;
            let inner = &text[open + 1..close];
            if let Some(rel) = inner.find('(') {
                return Err(unexpected(text, open + 1 + rel));
            }
            args = inner
                .split(',')
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
                .collect();
            pos = close + 1;
        }

        if pos < bytes.len() && !is_separator(bytes[pos]) {
            return Err(unexpected(text, pos));
        }
        items.push(StyleItem { name, args });
    }

    Ok(items)
}

fn is_separator(byte: u8) -> bool {
    byte == b',' || byte.is_ascii_whitespace()
}

fn unexpected(text: &str, pos: usize) -> SyntaxError {
    SyntaxError::new(
        char_span(text, pos),
        format!("Extraneous input '{}' expecting a style item.", describe_at(text, pos)),
    )
}
