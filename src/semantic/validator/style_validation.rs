//! Style list validation.

use crate::ast::{Attribute, ElementKind};
use crate::diag::Diag;
use crate::parser::style::parse_style;
use crate::semantic::attributes::supports_stripes;
use crate::semantic::diag::{DiagKind, DotDiagBuilder, quoted_list};

use super::AttrSite;

const TYPE_NAME: &str = "style";

const NODE_STYLES: &[&str] = &[
    "bold", "dashed", "diagonals", "dotted", "filled", "invis", "radial", "rounded", "solid",
    "striped", "wedged",
];

const EDGE_STYLES: &[&str] = &["bold", "dashed", "dotted", "invis", "solid", "tapered"];

const CLUSTER_STYLES: &[&str] = &[
    "bold", "dashed", "dotted", "filled", "invis", "radial", "rounded", "solid", "striped",
];

const SETLINEWIDTH: &str = "setlinewidth";

fn styles_for(kind: ElementKind) -> &'static [&'static str] {
    match kind {
        ElementKind::Node => NODE_STYLES,
        ElementKind::Edge => EDGE_STYLES,
        ElementKind::Graph | ElementKind::Subgraph | ElementKind::Cluster => CLUSTER_STYLES,
    }
}

pub(super) fn check_style(
    validator: &super::DotValidator,
    site: &AttrSite<'_, '_>,
    attribute: &Attribute,
    diagnostics: &mut Vec<Diag>,
) {
    let value = attribute.value.as_str();
    let items = match parse_style(value) {
        Ok(items) => items,
        Err(err) => {
            diagnostics.push(
                DotDiagBuilder::syntax(TYPE_NAME, value, &err.detail, attribute.value_span())
                    .for_attribute(&attribute.name)
                    .build(),
            );
            return;
        }
    };

    let allowed = styles_for(site.kind);
    for item in &items {
        let name = item.name();
        let span = attribute.absolute(&item.name_span());

        if name == SETLINEWIDTH {
            if validator.config().report_deprecations {
                diagnostics.push(
                    DotDiagBuilder::deprecated(
                        TYPE_NAME,
                        value,
                        "The usage of setlinewidth is deprecated, use the penwidth attribute instead.",
                        span,
                    )
                    .for_attribute(&attribute.name)
                    .build(),
                );
            }
            continue;
        }

        if !allowed.contains(&name) {
            let detail = format!("Value should be one of {}.", quoted_list(allowed.iter().copied()));
            diagnostics.push(
                DotDiagBuilder::semantic(DiagKind::StyleInvalid, TYPE_NAME, value, &detail, span)
                    .for_attribute(&attribute.name)
                    .build(),
            );
            continue;
        }

        if name == "striped" && site.kind == ElementKind::Node && !supports_stripes(site.shape()) {
            diagnostics.push(
                DotDiagBuilder::striped_shape_mismatch(span)
                    .for_attribute(&attribute.name)
                    .build(),
            );
        }
    }
}
