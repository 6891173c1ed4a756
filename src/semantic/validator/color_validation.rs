//! Color, color list and color scheme validation.

use crate::ast::Attribute;
use crate::diag::Diag;
use crate::parser::color::{Color, parse_color, parse_color_list};
use crate::semantic::color_schemes::ColorScheme;
use crate::semantic::diag::{DiagKind, DotDiagBuilder};

use super::AttrSite;

/// Checks a single color (`list == false`) or a color list.
///
/// Named colors are looked up in the scheme resolved for `site`, unless they
/// carry their own `/scheme/` prefix.
pub(super) fn check_color(
    site: &AttrSite<'_, '_>,
    attribute: &Attribute,
    list: bool,
    diagnostics: &mut Vec<Diag>,
) {
    let type_name = if list { "colorList" } else { "color" };
    let value = attribute.value.as_str();

    let parsed = if list {
        parse_color_list(value)
    } else {
        parse_color(value).map(|item| vec![item])
    };
    let items = match parsed {
        Ok(items) => items,
        Err(err) => {
            diagnostics.push(
                DotDiagBuilder::syntax(type_name, value, &err.detail, attribute.value_span())
                    .for_attribute(&attribute.name)
                    .build(),
            );
            return;
        }
    };

    let site_scheme = site.color_scheme();
    for item in &items {
        let Color::Named {
            scheme,
            name,
            name_span,
        } = &item.color
        else {
            continue;
        };

        let scheme_name = match scheme.as_deref() {
            Some(qualified) if !qualified.is_empty() => qualified,
            _ => site_scheme,
        };
        // An unknown scheme is reported on the colorscheme attribute itself.
        let Some(palette) = ColorScheme::lookup(scheme_name) else {
            continue;
        };

        if !palette.contains(name) {
            let detail =
                format!("The '{name}' color is not valid within the '{scheme_name}' color scheme.");
            diagnostics.push(
                DotDiagBuilder::semantic(
                    DiagKind::ColorNotInScheme,
                    type_name,
                    value,
                    &detail,
                    attribute.absolute(name_span),
                )
                .for_attribute(&attribute.name)
                .build(),
            );
        }
    }
}

/// Checks that a `colorscheme` value names a known palette.
pub(super) fn check_color_scheme(attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    if ColorScheme::lookup(value).is_none() {
        let detail = format!("'{value}' is not a known color scheme.");
        diagnostics.push(
            DotDiagBuilder::semantic(
                DiagKind::ColorSchemeUnknown,
                "colorscheme",
                value,
                &detail,
                attribute.value_span(),
            )
            .for_attribute(&attribute.name)
            .build(),
        );
    }
}
