//! HTML-like label grammar.
//!
//! ```text
//! label   := content
//! content := (text | element)*
//! element := '<' name attr* ('/>' | '>' content '</' name '>')
//! attr    := name '=' value
//! ```
//!
//! Close tags are matched structurally, not by name: `<FONT></foo>` parses
//! and the mismatch is left to the validator, which can report it at the
//! close-tag name.

use super::{ParseResult, SyntaxError};
use crate::ast::{Span, Spanned};
use crate::lexer::html::{HtmlLexer, HtmlToken, HtmlTokenKind};

/// A parsed HTML-like label; its top level is the implicit root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlLabel {
    pub children: Vec<HtmlContent>,
}

/// A child of a tag or of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlContent {
    Tag(HtmlTag),
    Text(HtmlText),
}

/// A run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlText {
    /// The text with surrounding whitespace removed.
    pub text: String,
    /// Span of the trimmed text.
    pub span: Span,
}

impl HtmlText {
    /// Whitespace-only runs carry no content.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    /// Tag name as written in the open tag.
    pub name: Spanned<String>,
    pub attributes: Vec<HtmlAttribute>,
    pub children: Vec<HtmlContent>,
    /// Written as `<x/>`.
    pub self_closing: bool,
    /// Name of the matching close tag, `None` when self-closing.
    pub close_name: Option<Spanned<String>>,
}

impl HtmlTag {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute {
    pub name: Spanned<String>,
    /// The value without its quotes.
    pub value: String,
    /// Span of the value, quotes included.
    pub value_span: Span,
}

/// Parses the text between the outer `<` and `>` of an HTML label.
pub fn parse_html_label(text: &str) -> ParseResult<HtmlLabel> {
    let lexed = HtmlLexer::new(text).tokenize();
    if let Some(error) = lexed.errors.into_iter().next() {
        return Err(error);
    }

    let mut parser = HtmlParser {
        text,
        tokens: lexed.tokens,
        pos: 0,
    };
    let children = parser.parse_content()?;
    let token = parser.peek();
    if token.kind != HtmlTokenKind::Eof {
        return Err(parser.error(&token, "Extraneous input", "<EOF>"));
    }
    Ok(HtmlLabel { children })
}

struct HtmlParser<'a> {
    text: &'a str,
    tokens: Vec<HtmlToken>,
    pos: usize,
}

impl HtmlParser<'_> {
    fn peek(&self) -> HtmlToken {
        self.tokens.get(self.pos).cloned().unwrap_or_else(|| {
            let end = self.text.len();
            HtmlToken {
                kind: HtmlTokenKind::Eof,
                span: end..end,
            }
        })
    }

    fn bump(&mut self) -> HtmlToken {
        let token = self.peek();
        if token.kind != HtmlTokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: HtmlTokenKind, expecting: &str) -> ParseResult<HtmlToken> {
        let token = self.peek();
        if token.kind == kind {
            self.pos += 1;
            Ok(token)
        } else {
            Err(self.error(&token, "Mismatched input", expecting))
        }
    }

    fn error(&self, token: &HtmlToken, what: &str, expecting: &str) -> SyntaxError {
        let found = match token.kind {
            HtmlTokenKind::Eof => "<EOF>",
            _ => &self.text[token.span.clone()],
        };
        SyntaxError::new(
            token.span.clone(),
            format!("{what} '{found}' expecting {expecting}."),
        )
    }

    fn spanned(&self, token: &HtmlToken) -> Spanned<String> {
        Spanned::new(self.text[token.span.clone()].to_string(), token.span.clone())
    }

    fn parse_content(&mut self) -> ParseResult<Vec<HtmlContent>> {
        let mut children = Vec::new();
        loop {
            let token = self.peek();
            match token.kind {
                HtmlTokenKind::Text => {
                    self.pos += 1;
                    children.push(HtmlContent::Text(self.text_run(&token.span)));
                }
                HtmlTokenKind::TagOpen => children.push(HtmlContent::Tag(self.parse_tag()?)),
                HtmlTokenKind::CloseTagOpen | HtmlTokenKind::Eof => break,
                _ => return Err(self.error(&token, "Extraneous input", "'<'")),
            }
        }
        Ok(children)
    }

    fn parse_tag(&mut self) -> ParseResult<HtmlTag> {
        self.bump();
        let name_token = self.expect(HtmlTokenKind::Name, "a tag name")?;
        let name = self.spanned(&name_token);

        let mut attributes = Vec::new();
        let self_closing = loop {
            let token = self.bump();
            match token.kind {
                HtmlTokenKind::TagClose => break false,
                HtmlTokenKind::SelfClose => break true,
                HtmlTokenKind::Name => {
                    self.expect(HtmlTokenKind::Equals, "'='")?;
                    let value = self.expect(HtmlTokenKind::Value, "a quoted value")?;
                    attributes.push(HtmlAttribute {
                        name: self.spanned(&token),
                        value: unquote(&self.text[value.span.clone()]).to_string(),
                        value_span: value.span,
                    });
                }
                _ => return Err(self.error(&token, "Mismatched input", "'>'")),
            }
        };

        if self_closing {
            return Ok(HtmlTag {
                name,
                attributes,
                children: Vec::new(),
                self_closing,
                close_name: None,
            });
        }

        let children = self.parse_content()?;
        self.expect(HtmlTokenKind::CloseTagOpen, "'</'")?;
        let close = self.expect(HtmlTokenKind::Name, "a tag name")?;
        self.expect(HtmlTokenKind::TagClose, "'>'")?;

        Ok(HtmlTag {
            name,
            attributes,
            children,
            self_closing,
            close_name: Some(self.spanned(&close)),
        })
    }

    fn text_run(&self, span: &Span) -> HtmlText {
        let raw = &self.text[span.clone()];
        let leading = raw.len() - raw.trim_start().len();
        let trimmed = raw.trim();
        let start = span.start + leading;
        HtmlText {
            text: trimmed.to_string(),
            span: start..start + trimmed.len(),
        }
    }
}

fn unquote(raw: &str) -> &str {
    let inner = raw.get(1..).unwrap_or_default();
    match (raw.chars().next(), inner.chars().last()) {
        (Some(open), Some(close)) if open == close && !inner.is_empty() => {
            &inner[..inner.len() - close.len_utf8()]
        }
        _ => inner,
    }
}
