//! Arrow type validation for `arrowhead` and `arrowtail`.
//!
//! Syntax is checked by [`parse_arrow_type`]; the semantic checks here are
//! the modifier table, the trailing `none` rule, and deprecated shape names.

use std::collections::HashSet;

use crate::ast::{Attribute, Span};
use crate::diag::{Diag, DiagSeverity};
use crate::parser::arrow::{ShapeClause, ShapeKind, parse_arrow_type};
use crate::semantic::diag::{DiagKind, DotDiagBuilder};

const TYPE_NAME: &str = "arrowType";

/// Checks one arrow type value.
pub(super) fn check_arrow_type(
    validator: &super::DotValidator,
    attribute: &Attribute,
    diagnostics: &mut Vec<Diag>,
) {
    let value = attribute.value.as_str();
    let arrow = match parse_arrow_type(value) {
        Ok(arrow) => arrow,
        Err(err) => {
            diagnostics.push(
                DotDiagBuilder::syntax(TYPE_NAME, value, &err.detail, attribute.value_span())
                    .for_attribute(&attribute.name)
                    .build(),
            );
            return;
        }
    };

    let mut reported = HashSet::new();
    for clause in &arrow.clauses {
        match clause.shape {
            ShapeKind::Deprecated(shape) => {
                if validator.config().report_deprecations && reported.insert(shape) {
                    let detail = format!("The shape '{}' is deprecated.", shape.name());
                    diagnostics.push(
                        DotDiagBuilder::deprecated(
                            TYPE_NAME,
                            value,
                            &detail,
                            attribute.absolute(&clause.shape_span),
                        )
                        .for_attribute(&attribute.name)
                        .build(),
                    );
                }
            }
            ShapeKind::Primitive(shape) => {
                if let Some(side) = clause.side.filter(|_| !shape.accepts_side()) {
                    let detail = format!(
                        "The side modifier '{}' may not be combined with primitive shape '{}'.",
                        side.modifier(),
                        shape.name()
                    );
                    push_modifier_warning(attribute, &detail, diagnostics);
                }
                if clause.open && !shape.accepts_open() {
                    let detail = format!(
                        "The open modifier 'o' may not be combined with primitive shape '{}'.",
                        shape.name()
                    );
                    push_modifier_warning(attribute, &detail, diagnostics);
                }
            }
        }
    }

    if arrow.clauses.len() > 1 {
        if let Some(last) = arrow.last().filter(|clause| clause.shape.name() == "none") {
            diagnostics.push(
                DotDiagBuilder::semantic(
                    DiagKind::ArrowNoneLast,
                    TYPE_NAME,
                    value,
                    "The shape 'none' may not be the last shape.",
                    attribute.absolute(&clause_span(last)),
                )
                .with_severity(DiagSeverity::Warning)
                .for_attribute(&attribute.name)
                .build(),
            );
        }
    }
}

fn push_modifier_warning(attribute: &Attribute, detail: &str, diagnostics: &mut Vec<Diag>) {
    diagnostics.push(
        DotDiagBuilder::semantic(
            DiagKind::ArrowModifierInvalid,
            TYPE_NAME,
            &attribute.value,
            detail,
            attribute.value_span(),
        )
        .with_severity(DiagSeverity::Warning)
        .for_attribute(&attribute.name)
        .build(),
    );
}

/// Value-local span of a clause, modifiers included.
fn clause_span(clause: &ShapeClause) -> Span {
    let modifiers = usize::from(clause.open) + usize::from(clause.side.is_some());
    clause.shape_span.start - modifiers..clause.shape_span.end
}
