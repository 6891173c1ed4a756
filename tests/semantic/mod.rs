//! Semantic validation tests
//!
//! One module per validator pass, plus whole-document behaviour of the
//! validator itself.

mod html_label_validation;
mod range_validation;
mod record_label_validation;
mod style_validation;
mod validator;
