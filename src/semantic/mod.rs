//! Semantic validation of DOT attribute values.
//!
//! The validator walks a [`Document`](crate::ast::Document) in source order
//! and checks every attribute it knows about. Each value is first parsed with
//! the grammar of its type (see [`crate::parser`]); syntax failures and
//! semantic findings are both reported as [`Diag`](crate::diag::Diag)s.
//!
//! # Passes
//!
//! Every attribute is routed through [`attributes::attribute_type`] to one of
//! the passes under `validator/`:
//!
//! 1. **Arrow types** - syntax, modifier table, trailing `none`, deprecations
//! 2. **Colors** - syntax, scheme resolution, palette membership
//! 3. **Styles** - item sets per element kind, `striped` against the shape
//! 4. **HTML-like labels** - tags, parents, attributes, siblings
//! 5. **Record labels** - port name uniqueness
//! 6. **Scalars and enumerations** - lower bounds and closed domains
//! 7. **Edge operators** - `->` / `--` against the graph kind
//!
//! # Example
//!
//! ```
//! use dot_validator::ast::{Attribute, Document, Element, EdgeOp, Stmt};
//! use dot_validator::semantic::DotValidator;
//!
//! let edge = Element::edge([EdgeOp::directed(9)])
//!     .with_attribute(Attribute::bare("arrowhead", "fooBar", 17));
//! let document = Document::graph(Element::graph().with_stmt(Stmt::Element(edge)));
//!
//! let outcome = DotValidator::new().validate(&document);
//! assert_eq!(outcome.errors().count(), 2);
//! ```

pub mod attributes;
pub mod color_schemes;
pub mod diag;
pub mod validator;

pub use attributes::{AttrType, attribute_type};
pub use color_schemes::ColorScheme;
pub use diag::{DiagKind, DotDiagBuilder};
pub use validator::{DotValidator, ValidationConfig, ValidationFailed, ValidationOutcome};
