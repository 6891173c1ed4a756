//! Scanner for HTML-like labels.
//!
//! The scanner has two modes. Outside a tag everything up to the next `<` is
//! text; inside a tag it produces names, `=`, quoted values and the closing
//! `>` or `/>`. Comments are dropped. Scanning never stops early: problems are
//! collected and the scanner resynchronises at the next tag boundary.

use crate::ast::Span;
use crate::parser::SyntaxError;

/// Kinds of HTML-label tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlTokenKind {
    /// Character data between tags.
    Text,
    /// `<`
    TagOpen,
    /// `</`
    CloseTagOpen,
    /// A tag or attribute name.
    Name,
    /// `=`
    Equals,
    /// A quoted attribute value, quotes included.
    Value,
    /// `>`
    TagClose,
    /// `/>`
    SelfClose,
    /// A character that cannot appear inside a tag.
    Unknown,
    Eof,
}

/// A token with its value-local span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlToken {
    pub kind: HtmlTokenKind,
    pub span: Span,
}

/// Tokens plus any scanning problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlLexResult {
    /// The tokens produced, ending with [`HtmlTokenKind::Eof`].
    pub tokens: Vec<HtmlToken>,
    pub errors: Vec<SyntaxError>,
}

pub struct HtmlLexer<'a> {
    source: &'a str,
    pos: usize,
    in_tag: bool,
    tokens: Vec<HtmlToken>,
    errors: Vec<SyntaxError>,
}

impl<'a> HtmlLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            in_tag: false,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole label.
    pub fn tokenize(mut self) -> HtmlLexResult {
        while !self.is_at_end() {
            if self.in_tag {
                self.scan_tag_token();
            } else {
                self.scan_content();
            }
        }

        let end = self.source.len();
        self.add_token(HtmlTokenKind::Eof, end);
        HtmlLexResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_content(&mut self) {
        let start = self.pos;
        if self.rest().starts_with("<!--") {
            self.skip_comment();
            return;
        }
        if self.rest().starts_with("</") {
            self.pos += 2;
            self.in_tag = true;
            self.add_token(HtmlTokenKind::CloseTagOpen, start);
            return;
        }
        if self.rest().starts_with('<') {
            self.pos += 1;
            self.in_tag = true;
            self.add_token(HtmlTokenKind::TagOpen, start);
            return;
        }

        self.pos = self.rest().find('<').map_or(self.source.len(), |rel| start + rel);
        self.add_token(HtmlTokenKind::Text, start);
    }

    fn skip_comment(&mut self) {
        let start = self.pos;
        match self.rest()[4..].find("-->") {
            Some(rel) => self.pos = start + 4 + rel + 3,
            None => {
                self.pos = self.source.len();
                self.error(start..start + 4, "Unterminated comment.");
            }
        }
    }

    fn scan_tag_token(&mut self) {
        self.skip_whitespace();
        if self.is_at_end() {
            return;
        }

        let start = self.pos;
        let ch = self.advance();
        match ch {
            '>' => {
                self.in_tag = false;
                self.add_token(HtmlTokenKind::TagClose, start);
            }
            '/' if self.peek() == Some('>') => {
                self.advance();
                self.in_tag = false;
                self.add_token(HtmlTokenKind::SelfClose, start);
            }
            '=' => self.add_token(HtmlTokenKind::Equals, start),
            '"' | '\'' => self.scan_value(ch, start),
            ch if is_name_char(ch) => {
                while self.peek().is_some_and(is_name_char) {
                    self.advance();
                }
                self.add_token(HtmlTokenKind::Name, start);
            }
            _ => self.add_token(HtmlTokenKind::Unknown, start),
        }
    }

    fn scan_value(&mut self, quote: char, start: usize) {
        match self.rest().find(quote) {
            Some(rel) => {
                self.pos += rel + quote.len_utf8();
                self.add_token(HtmlTokenKind::Value, start);
            }
            None => {
                self.pos = self.source.len();
                self.error(start..start + 1, "Unterminated attribute value.");
                self.add_token(HtmlTokenKind::Value, start);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> char {
        let ch = self.peek().unwrap_or('\0');
        self.pos += ch.len_utf8();
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn add_token(&mut self, kind: HtmlTokenKind, start: usize) {
        self.tokens.push(HtmlToken {
            kind,
            span: start..self.pos,
        });
    }

    fn error(&mut self, span: Span, detail: &str) {
        self.errors.push(SyntaxError::new(span, detail));
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | ':' | '.')
}
