//! Token streams for the bracketed sub-languages of attribute values.
//!
//! Record labels are lexed with a [`logos`]-derived token set. HTML-like
//! labels need two lexical modes (markup and character data), so they use a
//! hand-written scanner that keeps going after errors and collects them.

pub mod html;
pub mod record;

pub use html::{HtmlLexResult, HtmlLexer, HtmlToken, HtmlTokenKind};
pub use record::{RecordToken, SpannedToken};
