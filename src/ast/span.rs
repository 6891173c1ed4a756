//! Source spans and spanned values.
//!
//! All spans are byte ranges into the full document text the outer parser was
//! run on. Sub-language parsers work on the raw attribute value and produce
//! value-local spans, which are shifted into document coordinates with
//! [`shift`] before they are reported.

use std::ops::Range;

/// A byte range in the document text.
pub type Span = Range<usize>;

/// Moves a value-local span into document coordinates.
pub fn shift(local: &Span, base: usize) -> Span {
    (local.start + base)..(local.end + base)
}

/// A value paired with the span it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    /// The wrapped value.
    pub node: T,
    /// Where the value appears.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Creates a new spanned value.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Maps the inner value while preserving the span.
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            node: f(self.node),
            span: self.span,
        }
    }

    /// Returns a reference to the span.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Spanned<String> {
    /// Returns the spanned text.
    pub fn as_str(&self) -> &str {
        &self.node
    }
}

impl<T> AsRef<T> for Spanned<T> {
    fn as_ref(&self) -> &T {
        &self.node
    }
}
