//! Input model: spans and the element tree produced by the outer DOT parser.

pub mod document;
pub mod span;

pub use document::{
    AttrList, Attribute, DefaultBlock, DefaultTarget, Document, EdgeOp, Element, ElementKind,
    Stmt, ValueDelimiter,
};
pub use span::{Span, Spanned, shift};
