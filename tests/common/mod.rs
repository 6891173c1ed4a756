//! Common test utilities
//!
//! There is no DOT parser in this crate, so tests build the element tree by
//! hand and take every span from the DOT text it stands for. [`Fixture`]
//! walks the text left to right and hands out attributes and edge operators
//! with the offsets they have there.
//!
//! # Assertion Helpers
//! - [`assert_single`] - Assert exactly one diagnostic with the given shape
//! - [`assert_clean`] - Assert that validation found nothing
//! - [`format_diag_diagnostics`] - Format diagnostics for assertion messages

#![allow(dead_code)]

use dot_validator::ast::{Attribute, DefaultBlock, DefaultTarget, EdgeOp, ValueDelimiter};
use dot_validator::diag::{Diag, DiagSeverity};

/// A DOT source text with a cursor.
pub struct Fixture {
    text: String,
    cursor: usize,
}

impl Fixture {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset of the first `needle` at or after `from`.
    pub fn offset_of_from(&self, needle: &str, from: usize) -> usize {
        self.text[from..]
            .find(needle)
            .map(|rel| from + rel)
            .unwrap_or_else(|| panic!("'{needle}' not found in {:?}", self.text))
    }

    /// Offset of the first `needle` in the text.
    pub fn offset_of(&self, needle: &str) -> usize {
        self.offset_of_from(needle, 0)
    }

    /// The next `name=value` after the cursor.
    pub fn attr(&mut self, name: &str) -> Attribute {
        let bytes = self.text.as_bytes();
        let mut search = self.cursor;
        let value_start = loop {
            let at = self.offset_of_from(name, search);
            let word_start = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
            let mut pos = at + name.len();
            while bytes.get(pos) == Some(&b' ') {
                pos += 1;
            }
            if word_start && bytes.get(pos) == Some(&b'=') {
                pos += 1;
                while bytes.get(pos) == Some(&b' ') {
                    pos += 1;
                }
                break pos;
            }
            search = at + name.len();
        };

        let (delimiter, end) = match bytes[value_start] {
            b'"' => {
                let mut pos = value_start + 1;
                while bytes[pos] != b'"' {
                    pos += if bytes[pos] == b'\\' { 2 } else { 1 };
                }
                (ValueDelimiter::Quoted, pos + 1)
            }
            b'<' => {
                let mut depth = 0usize;
                let mut pos = value_start;
                loop {
                    match bytes[pos] {
                        b'<' => depth += 1,
                        b'>' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    pos += 1;
                }
                (ValueDelimiter::Html, pos + 1)
            }
            _ => {
                let len = self.text[value_start..]
                    .find([' ', ',', ';', ']', '}', '\n'])
                    .unwrap_or(self.text.len() - value_start);
                (ValueDelimiter::Bare, value_start + len)
            }
        };

        self.cursor = end;
        let value = match delimiter {
            ValueDelimiter::Bare => &self.text[value_start..end],
            ValueDelimiter::Quoted | ValueDelimiter::Html => &self.text[value_start + 1..end - 1],
        };
        Attribute::new(name, value, delimiter, value_start..end)
    }

    /// The next `->` or `--` after the cursor.
    pub fn op(&mut self) -> EdgeOp {
        let directed = self.text[self.cursor..].find("->");
        let undirected = self.text[self.cursor..].find("--");
        let op = match (directed, undirected) {
            (Some(d), Some(u)) if u < d => EdgeOp::undirected(self.cursor + u),
            (Some(d), _) => EdgeOp::directed(self.cursor + d),
            (None, Some(u)) => EdgeOp::undirected(self.cursor + u),
            (None, None) => panic!("no edge operator after {} in {:?}", self.cursor, self.text),
        };
        self.cursor = op.span.end;
        op
    }

    /// A default block holding the next attributes with the given names.
    pub fn defaults(&mut self, target: DefaultTarget, names: &[&str]) -> DefaultBlock {
        let attributes: Vec<_> = names.iter().map(|name| self.attr(name)).collect();
        DefaultBlock::new(target, attributes)
    }
}

/// Format Diag diagnostics for display in assertion messages.
pub fn format_diag_diagnostics(diags: &[Diag]) -> String {
    diags
        .iter()
        .map(|diag| format!("{diag:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that validation produced no diagnostics.
pub fn assert_clean(diags: &[Diag]) {
    assert!(
        diags.is_empty(),
        "expected no diagnostics, got:\n{}",
        format_diag_diagnostics(diags)
    );
}

/// Assert that `diag` has the given severity, span and message.
pub fn assert_diag(diag: &Diag, severity: DiagSeverity, offset: usize, length: usize, message: &str) {
    assert_eq!(diag.severity, severity, "severity of {diag:?}");
    assert_eq!(diag.message, message);
    assert_eq!((diag.offset(), diag.length()), (offset, length), "span of {diag:?}");
}

/// Assert that there is exactly one diagnostic and it matches.
pub fn assert_single(diags: &[Diag], severity: DiagSeverity, offset: usize, length: usize, message: &str) {
    assert_eq!(
        diags.len(),
        1,
        "expected exactly one diagnostic, got:\n{}",
        format_diag_diagnostics(diags)
    );
    assert_diag(&diags[0], severity, offset, length, message);
}

/// Runs the default validator.
pub fn validate(document: &dot_validator::ast::Document) -> Vec<Diag> {
    dot_validator::validate(document)
}
