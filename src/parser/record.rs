//! Record-based label grammar.
//!
//! ```text
//! rlabel := field ('|' field)*
//! field  := '{' rlabel '}' | ('<' text? '>')? text?
//! ```

use super::{ParseResult, SyntaxError};
use crate::ast::Span;
use crate::lexer::record::{RecordToken, SpannedToken, tokenize};

/// A `|`-separated sequence of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLabel {
    pub fields: Vec<Field>,
}

/// One record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A `{ ... }` group flipping the layout direction.
    Group { label: RecordLabel, span: Span },
    Leaf(LeafField),
}

/// A field holding text and an optional port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafField {
    pub port: Option<Port>,
    /// Field text, trimmed, escapes preserved.
    pub text: String,
    /// The whole field, trimmed.
    pub span: Span,
}

/// A `<name>` port marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Trimmed port name; empty for `<>`.
    pub name: String,
    /// Span of the trimmed name, or of the marker when the name is empty.
    pub span: Span,
}

impl RecordLabel {
    /// Visits every leaf field in source order.
    pub fn leaves(&self) -> Vec<&LeafField> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(label: &'a RecordLabel, out: &mut Vec<&'a LeafField>) {
    for field in &label.fields {
        match field {
            Field::Group { label, .. } => collect_leaves(label, out),
            Field::Leaf(leaf) => out.push(leaf),
        }
    }
}

/// Parses a record label value.
pub fn parse_record_label(text: &str) -> ParseResult<RecordLabel> {
    let tokens = tokenize(text).map_err(|span| {
        let found = text.get(span.clone()).unwrap_or_default().to_string();
        SyntaxError::new(span, format!("token recognition error at: '{found}'"))
    })?;
    let mut parser = RecordParser {
        text,
        tokens,
        pos: 0,
    };
    let label = parser.parse_label(false)?;
    match parser.peek() {
        None => Ok(label),
        Some(token) => Err(parser.extraneous(&token, "<EOF>")),
    }
}

struct RecordParser<'a> {
    text: &'a str,
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl RecordParser<'_> {
    fn peek(&self) -> Option<SpannedToken> {
        self.tokens.get(self.pos).cloned()
    }

    fn bump(&mut self) -> Option<SpannedToken> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_kind(&self) -> Option<RecordToken> {
        self.tokens.get(self.pos).map(|token| token.token)
    }

    fn slice(&self, span: &Span) -> &str {
        &self.text[span.clone()]
    }

    fn is_blank_text(&self, token: &SpannedToken) -> bool {
        token.token.is_text() && self.slice(&token.span).trim().is_empty()
    }

    fn skip_blank_text(&mut self) {
        if self.peek().is_some_and(|token| self.is_blank_text(&token)) {
            self.pos += 1;
        }
    }

    fn extraneous(&self, token: &SpannedToken, expecting: &str) -> SyntaxError {
        SyntaxError::new(
            token.span.clone(),
            format!(
                "extraneous input '{}' expecting {expecting}",
                self.slice(&token.span)
            ),
        )
    }

    fn missing(&self, what: &str) -> SyntaxError {
        let end = self.text.len();
        SyntaxError::new(end..end, format!("missing '{what}' at '<EOF>'"))
    }

    fn parse_label(&mut self, nested: bool) -> ParseResult<RecordLabel> {
        let mut fields = vec![self.parse_field()?];
        loop {
            match self.peek() {
                Some(token) if token.token == RecordToken::Bar => {
                    self.pos += 1;
                    fields.push(self.parse_field()?);
                }
                Some(token) if token.token == RecordToken::RBrace => {
                    if nested {
                        break;
                    }
                    return Err(self.extraneous(&token, "<EOF>"));
                }
                Some(token) => return Err(self.extraneous(&token, "'|'")),
                None => break,
            }
        }
        Ok(RecordLabel { fields })
    }

    fn parse_field(&mut self) -> ParseResult<Field> {
        let checkpoint = self.pos;
        self.skip_blank_text();
        if self.peek_kind() == Some(RecordToken::LBrace) {
            let open = self.bump().map_or(0, |token| token.span.start);
            let label = self.parse_label(true)?;
            let close = match self.bump() {
                Some(token) if token.token == RecordToken::RBrace => token.span.end,
                _ => return Err(self.missing("}")),
            };
            self.skip_blank_text();
            return Ok(Field::Group {
                label,
                span: open..close,
            });
        }
        self.pos = checkpoint;
        self.parse_leaf()
    }

    fn parse_leaf(&mut self) -> ParseResult<Field> {
        let mut start = None;
        let mut end = None;
        let mut cover = |span: &Span| {
            start.get_or_insert(span.start);
            end = Some(span.end);
        };

        self.skip_blank_text();
        let mut port = None;
        if self.peek_kind() == Some(RecordToken::LAngle) {
            let open = self.bump().map_or(0..0, |token| token.span);
            let name = match self.peek() {
                Some(token) if token.token.is_text() => {
                    self.pos += 1;
                    Some(token.span)
                }
                _ => None,
            };
            let close = match self.bump() {
                Some(token) if token.token == RecordToken::RAngle => token.span,
                Some(token) => return Err(self.extraneous(&token, "'>'")),
                None => return Err(self.missing(">")),
            };
            cover(&open);
            cover(&close);
            port = Some(self.port(name, open.start..close.end));
        }

        let mut text = String::new();
        if let Some(token) = self.peek().filter(|token| token.token.is_text()) {
            self.pos += 1;
            let trimmed = trim_span(self.text, &token.span);
            if !trimmed.is_empty() {
                text = self.slice(&trimmed).to_string();
                cover(&trimmed);
            }
        }

        let span = match (start, end) {
            (Some(start), Some(end)) => start..end,
            _ => {
                let at = self.tokens.get(self.pos).map_or(self.text.len(), |t| t.span.start);
                at..at
            }
        };
        Ok(Field::Leaf(LeafField { port, text, span }))
    }

    fn port(&self, name: Option<Span>, marker: Span) -> Port {
        match name.map(|span| trim_span(self.text, &span)) {
            Some(span) if !span.is_empty() => Port {
                name: self.slice(&span).to_string(),
                span,
            },
            _ => Port {
                name: String::new(),
                span: marker,
            },
        }
    }
}

/// Narrows `span` to exclude leading and trailing whitespace.
fn trim_span(text: &str, span: &Span) -> Span {
    let slice = &text[span.clone()];
    let start = span.start + (slice.len() - slice.trim_start().len());
    let end = span.end - (slice.len() - slice.trim_end().len());
    if start >= end { start..start } else { start..end }
}
