//! HTML-like label validation.
//!
//! The parser accepts any well-formed tag soup. This pass applies the
//! Graphviz rules on top of it: the tag set, which tags may self-close or
//! hold text, where each tag may appear, the attributes each tag takes and
//! their value domains, and the rule that a `<TABLE>` must be the only
//! content on its level.

use crate::ast::{Attribute, Span};
use crate::diag::Diag;
use crate::parser::html::{HtmlAttribute, HtmlContent, HtmlTag, parse_html_label};
use crate::semantic::diag::{DiagKind, DotDiagBuilder, quoted_list};

const TYPE_NAME: &str = "htmlLabel";

/// The pseudo-parent of top-level content.
const ROOT: &str = "ROOT";

const TABLE_ATTRIBUTES: &[&str] = &[
    "ALIGN", "BGCOLOR", "BORDER", "CELLBORDER", "CELLPADDING", "CELLSPACING", "COLOR", "COLUMNS",
    "FIXEDSIZE", "GRADIENTANGLE", "HEIGHT", "HREF", "ID", "PORT", "ROWS", "SIDES", "STYLE",
    "TARGET", "TITLE", "TOOLTIP", "VALIGN", "WIDTH",
];

const TD_ATTRIBUTES: &[&str] = &[
    "ALIGN", "BALIGN", "BGCOLOR", "BORDER", "CELLPADDING", "CELLSPACING", "COLOR", "COLSPAN",
    "FIXEDSIZE", "GRADIENTANGLE", "HEIGHT", "HREF", "ID", "PORT", "ROWSPAN", "SIDES", "STYLE",
    "TARGET", "TITLE", "TOOLTIP", "VALIGN", "WIDTH",
];

/// What a supported tag allows.
struct TagRule {
    name: &'static str,
    self_closing: bool,
    text: bool,
    /// Allowed parents; empty means anywhere.
    parents: &'static [&'static str],
    attributes: &'static [&'static str],
}

const TAGS: &[TagRule] = &[
    TagRule {
        name: "TABLE",
        self_closing: false,
        text: false,
        parents: &[ROOT, "TD", "FONT", "B", "I", "U", "O"],
        attributes: TABLE_ATTRIBUTES,
    },
    TagRule {
        name: "TR",
        self_closing: false,
        text: false,
        parents: &["TABLE"],
        attributes: &[],
    },
    TagRule {
        name: "TD",
        self_closing: false,
        text: true,
        parents: &["TR"],
        attributes: TD_ATTRIBUTES,
    },
    TagRule {
        name: "FONT",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &["COLOR", "FACE", "POINT-SIZE"],
    },
    TagRule {
        name: "B",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "I",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "U",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "O",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "S",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "SUB",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "SUP",
        self_closing: false,
        text: true,
        parents: &[],
        attributes: &[],
    },
    TagRule {
        name: "BR",
        self_closing: true,
        text: false,
        parents: &[],
        attributes: &["ALIGN"],
    },
    TagRule {
        name: "HR",
        self_closing: true,
        text: false,
        parents: &["TABLE"],
        attributes: &[],
    },
    TagRule {
        name: "VR",
        self_closing: true,
        text: false,
        parents: &["TR"],
        attributes: &[],
    },
    TagRule {
        name: "IMG",
        self_closing: true,
        text: false,
        parents: &["TD"],
        attributes: &["SCALE", "SRC"],
    },
];

fn tag_rule(name: &str) -> Option<&'static TagRule> {
    TAGS.iter().find(|rule| rule.name.eq_ignore_ascii_case(name))
}

/// Value domain of an attribute.
enum Domain {
    OneOf(&'static [&'static str]),
    /// A comma-separated list of words from the set.
    ListOf(&'static [&'static str]),
    /// Any combination of the given letters.
    Letters(&'static [&'static str]),
    IntRange(i64, i64),
    NonNegative,
    Any,
}

fn domain(tag: &str, attribute: &str) -> Domain {
    const HALIGN: &[&str] = &["CENTER", "LEFT", "RIGHT"];
    match attribute {
        "ALIGN" if tag == "TD" => Domain::OneOf(&["CENTER", "LEFT", "RIGHT", "TEXT"]),
        "ALIGN" | "BALIGN" => Domain::OneOf(HALIGN),
        "VALIGN" => Domain::OneOf(&["MIDDLE", "BOTTOM", "TOP"]),
        "FIXEDSIZE" => Domain::OneOf(&["FALSE", "TRUE"]),
        "SCALE" => Domain::OneOf(&["FALSE", "TRUE", "WIDTH", "HEIGHT", "BOTH"]),
        "STYLE" => Domain::ListOf(&[
            "ROUNDED", "RADIAL", "SOLID", "INVISIBLE", "INVIS", "DOTTED", "DASHED",
        ]),
        "SIDES" => Domain::Letters(&["L", "T", "R", "B"]),
        "BORDER" | "CELLPADDING" => Domain::IntRange(0, 255),
        "CELLSPACING" => Domain::IntRange(-128, 127),
        "COLSPAN" | "ROWSPAN" => Domain::IntRange(1, 65535),
        "WIDTH" | "HEIGHT" => Domain::IntRange(0, 65535),
        "POINT-SIZE" => Domain::NonNegative,
        _ => Domain::Any,
    }
}

impl Domain {
    /// Returns the failure detail, or `None` if `value` is in the domain.
    fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::OneOf(set) => (!contains_word(set, value.trim()))
                .then(|| format!("Value has to be one of {}.", quoted_list(set.iter().copied()))),
            Self::ListOf(set) => (!value.split(',').all(|item| contains_word(set, item.trim())))
                .then(|| format!("Value has to be one of {}.", quoted_list(set.iter().copied()))),
            Self::Letters(set) => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|ch| contains_word(set, &*ch.encode_utf8(&mut [0; 4])));
                (!valid).then(|| {
                    format!(
                        "Value has to contain only the characters {}.",
                        quoted_list(set.iter().copied())
                    )
                })
            }
            Self::IntRange(min, max) => {
                let in_range = value
                    .trim()
                    .parse::<i64>()
                    .is_ok_and(|number| (*min..=*max).contains(&number));
                (!in_range).then(|| format!("Value has to be between {min} and {max}."))
            }
            Self::NonNegative => {
                let valid = value
                    .trim()
                    .parse::<f64>()
                    .is_ok_and(|number| number.is_finite() && number >= 0.0);
                (!valid).then(|| "Value may not be smaller than 0.0.".to_string())
            }
            Self::Any => None,
        }
    }
}

fn contains_word(set: &[&str], item: &str) -> bool {
    set.iter().any(|known| known.eq_ignore_ascii_case(item))
}

pub(super) fn check_html_label(attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
    let value = attribute.value.as_str();
    let label = match parse_html_label(value) {
        Ok(label) => label,
        Err(err) => {
            diagnostics.push(
                DotDiagBuilder::syntax(TYPE_NAME, value, &err.detail, attribute.span.clone())
                    .for_attribute(&attribute.name)
                    .build(),
            );
            return;
        }
    };

    let mut checker = HtmlChecker {
        attribute,
        diagnostics,
    };
    checker.check_level(&label.children, ROOT);
}

struct HtmlChecker<'a> {
    attribute: &'a Attribute,
    diagnostics: &'a mut Vec<Diag>,
}

impl HtmlChecker<'_> {
    fn report(&mut self, kind: DiagKind, detail: &str, local: &Span) {
        let span = self.attribute.absolute(local);
        self.diagnostics.push(
            DotDiagBuilder::semantic(kind, TYPE_NAME, &self.attribute.value, detail, span)
                .for_attribute(&self.attribute.name)
                .build(),
        );
    }

    /// Checks the children of one tag (or of the root).
    fn check_level(&mut self, children: &[HtmlContent], parent: &str) {
        self.check_siblings(children);
        for child in children {
            if let HtmlContent::Tag(tag) = child {
                self.check_tag(tag, parent);
            }
        }
    }

    fn check_siblings(&mut self, children: &[HtmlContent]) {
        let content: Vec<&HtmlContent> = children
            .iter()
            .filter(|child| match child {
                HtmlContent::Tag(_) => true,
                HtmlContent::Text(text) => !text.is_blank(),
            })
            .collect();
        let has_table = content.iter().any(|child| {
            matches!(child, HtmlContent::Tag(tag) if tag.name().eq_ignore_ascii_case("TABLE"))
        });
        if !has_table || content.len() < 2 {
            return;
        }

        for child in content {
            let span = match child {
                HtmlContent::Tag(tag) => &tag.name.span,
                HtmlContent::Text(text) => &text.span,
            };
            self.report(DiagKind::HtmlInvalidSiblings, "Invalid siblings.", span);
        }
    }

    fn check_tag(&mut self, tag: &HtmlTag, parent: &str) {
        let name = tag.name();
        let Some(rule) = tag_rule(name) else {
            let detail = format!("Tag '<{name}>' is not supported.");
            self.report(DiagKind::HtmlTagInvalid, &detail, &tag.name.span);
            self.check_level(&tag.children, name);
            return;
        };

        if tag.self_closing && !rule.self_closing {
            let detail = format!("Tag '<{name}/>' cannot be self closing.");
            self.report(DiagKind::HtmlTagInvalid, &detail, &tag.name.span);
        }

        if let Some(close) = tag
            .close_name
            .as_ref()
            .filter(|close| !close.node.eq_ignore_ascii_case(name))
        {
            let detail = format!(
                "Tag '<{name}>' is not closed (expected '</{name}>' but got '</{}>').",
                close.node
            );
            self.report(DiagKind::HtmlTagInvalid, &detail, &close.span);
        }

        if !rule.parents.is_empty()
            && !rule
                .parents
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(parent))
        {
            let allowed = rule
                .parents
                .iter()
                .map(|allowed| format!("'<{allowed}>'"))
                .collect::<Vec<_>>()
                .join(", ");
            let detail =
                format!("Tag '<{name}>' is not allowed inside '<{parent}>', but only inside {allowed}.");
            self.report(DiagKind::HtmlTagInvalid, &detail, &tag.name.span);
        }

        for attribute in &tag.attributes {
            self.check_attribute(rule, name, attribute);
        }

        let has_text = tag
            .children
            .iter()
            .any(|child| matches!(child, HtmlContent::Text(text) if !text.is_blank()));
        if !rule.text && has_text {
            let detail = format!("Tag '<{name}>' cannot contain a string literal.");
            self.report(DiagKind::HtmlTagInvalid, &detail, &tag.name.span);
        }

        self.check_level(&tag.children, name);
    }

    fn check_attribute(&mut self, rule: &TagRule, tag_name: &str, attribute: &HtmlAttribute) {
        let name = attribute.name.as_str();
        let Some(known) = rule
            .attributes
            .iter()
            .find(|known| known.eq_ignore_ascii_case(name))
        else {
            let detail = format!("Attribute '{name}' is not allowed inside '<{tag_name}>'.");
            self.report(DiagKind::HtmlAttributeInvalid, &detail, &attribute.name.span);
            return;
        };

        if let Some(reason) = domain(rule.name, known).check(&attribute.value) {
            let detail = format!(
                "The value '{}' is not a correct {name}: {reason}",
                attribute.value
            );
            self.report(DiagKind::HtmlAttributeInvalid, &detail, &attribute.value_span);
        }
    }
}
