//! Semantic validation for Graphviz DOT attribute values.
//!
//! The outer DOT grammar is parsed elsewhere; this crate takes the resulting
//! element tree and checks what the grammar cannot: arrow shapes, colors and
//! color schemes, style lists, HTML-like and record-based labels, numeric
//! ranges, enumerations, and edge operators. Findings come back as [`Diag`]s
//! with absolute spans into the document, ready to be rendered with miette.
//!
//! # Example
//!
//! ```
//! use dot_validator::ast::{Attribute, Document, Element, Stmt};
//!
//! // digraph { 1[color=blue colorscheme=brbg10] }
//! let node = Element::node("1")
//!     .with_attribute(Attribute::bare("color", "blue", 18))
//!     .with_attribute(Attribute::bare("colorscheme", "brbg10", 35));
//! let document = Document::digraph(Element::graph().with_stmt(Stmt::Element(node)));
//!
//! let diagnostics = dot_validator::validate(&document);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     "The color value 'blue' is not semantically correct: The 'blue' color is not valid within the 'brbg10' color scheme."
//! );
//! ```

pub mod ast;
pub mod diag;
pub mod lexer;
pub mod parser;
pub mod semantic;

// Re-export syntax span primitives.
pub use ast::{Span, Spanned};

pub use diag::{Diag, DiagLabel, DiagSeverity, LabelRole, SourceFile};
pub use parser::SyntaxError;
pub use semantic::{DotValidator, ValidationConfig, ValidationFailed, ValidationOutcome};

/// Validates `document` with the default configuration.
///
/// Returns every diagnostic found, in document order.
pub fn validate(document: &ast::Document) -> Vec<Diag> {
    DotValidator::new().validate(document).diagnostics
}
