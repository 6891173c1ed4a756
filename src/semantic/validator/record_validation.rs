//! Record label validation: port names must be unique and set.

use std::collections::HashMap;

use crate::ast::Attribute;
use crate::diag::{Diag, DiagSeverity};
use crate::parser::record::parse_record_label;
use crate::semantic::diag::{DiagKind, DotDiagBuilder};

pub(super) fn check_record_label(attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    let label = match parse_record_label(value) {
        Ok(label) => label,
        Err(err) => {
            diagnostics.push(
                DotDiagBuilder::syntax(
                    "record-based label",
                    value,
                    &err.detail,
                    attribute.absolute(&err.span),
                )
                .for_attribute(&attribute.name)
                .build(),
            );
            return;
        }
    };

    let leaves = label.leaves();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for port in leaves.iter().filter_map(|leaf| leaf.port.as_ref()) {
        if !port.name.is_empty() {
            *counts.entry(port.name.as_str()).or_default() += 1;
        }
    }

    for leaf in leaves {
        let Some(port) = &leaf.port else {
            continue;
        };
        if port.name.is_empty() {
            diagnostics.push(
                DotDiagBuilder::record_label(
                    DiagKind::PortNameNotSet,
                    value,
                    "Port unnamed: port cannot be referenced",
                    attribute.absolute(&leaf.span),
                )
                .with_severity(DiagSeverity::Warning)
                .for_attribute(&attribute.name)
                .build(),
            );
        } else if counts.get(port.name.as_str()).is_some_and(|count| *count > 1) {
            diagnostics.push(
                DotDiagBuilder::record_label(
                    DiagKind::PortNameDuplicate,
                    value,
                    &format!("Port name not unique: {}", port.name),
                    attribute.absolute(&port.span),
                )
                .for_attribute(&attribute.name)
                .build(),
            );
        }
    }
}
