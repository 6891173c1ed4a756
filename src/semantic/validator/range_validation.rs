//! Scalar, enumeration and shape-name validation.

use crate::ast::Attribute;
use crate::diag::Diag;
use crate::parser::number::parse_number;
use crate::semantic::attributes::{Bound, EnumDomain, is_known_shape};
use crate::semantic::diag::{DiagKind, DotDiagBuilder, quoted_list};

/// Checks that a numeric value parses and respects its lower bound.
pub(super) fn check_number(attribute: &Attribute, bound: Bound, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    let type_name = bound.kind().name();

    match parse_number(value, bound.kind()) {
        Err(err) => diagnostics.push(
            DotDiagBuilder::syntax(type_name, value, &err.detail, attribute.value_span())
                .for_attribute(&attribute.name)
                .build(),
        ),
        Ok(number) if number.as_f64() < bound.as_f64() => {
            let detail = format!("Value may not be smaller than {}.", bound.display());
            diagnostics.push(
                DotDiagBuilder::semantic(
                    DiagKind::AttributeValueInvalid,
                    type_name,
                    value,
                    &detail,
                    attribute.value_span(),
                )
                .for_attribute(&attribute.name)
                .build(),
            );
        }
        Ok(_) => {}
    }
}

pub(super) fn check_enum(attribute: &Attribute, domain: EnumDomain, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    if !domain.values.contains(&value) {
        let detail = format!(
            "Value has to be one of {}.",
            quoted_list(domain.values.iter().copied())
        );
        diagnostics.push(
            DotDiagBuilder::syntax(domain.type_name, value, &detail, attribute.value_span())
                .for_attribute(&attribute.name)
                .build(),
        );
    }
}

pub(super) fn check_shape(attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    if !is_known_shape(value) {
        let detail = format!("Extraneous input '{value}' expecting EOF.");
        diagnostics.push(
            DotDiagBuilder::syntax("shape", value, &detail, attribute.value_span())
                .for_attribute(&attribute.name)
                .build(),
        );
    }
}
