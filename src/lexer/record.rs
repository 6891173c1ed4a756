//! Tokens of the record-label sub-language.

use logos::Logos;

use crate::ast::Span;

/// A record-label token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordToken {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("|")]
    Bar,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    /// Field text; a backslash escapes the next character.
    #[regex(r"([^{}|<>\\]|\\[\s\S])+")]
    Text,
    /// A lone backslash at the end of the value, kept as text.
    #[token("\\")]
    TrailingBackslash,
}

impl RecordToken {
    /// Returns true for tokens that carry field text.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::TrailingBackslash)
    }
}

/// A token together with its value-local span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: RecordToken,
    pub span: Span,
}

/// Tokenizes a record label.
///
/// On a character no rule accepts, returns its span.
pub fn tokenize(text: &str) -> Result<Vec<SpannedToken>, Span> {
    let mut tokens: Vec<SpannedToken> = Vec::new();
    for (token, span) in RecordToken::lexer(text).spanned() {
        let token = token.map_err(|()| span.clone())?;
        // Adjacent text pieces read as one run.
        match tokens.last_mut() {
            Some(last) if last.token.is_text() && token.is_text() && last.span.end == span.start => {
                last.token = RecordToken::Text;
                last.span.end = span.end;
            }
            _ => tokens.push(SpannedToken { token, span }),
        }
    }
    Ok(tokens)
}
