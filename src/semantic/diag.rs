//! Diagnostic kinds and the message shapes every validator reports with.
//!
//! Message text is observable: callers and tests compare it literally, so all
//! phrasing lives here rather than in the individual validators.

use crate::ast::Span;
use crate::diag::{Diag, DiagLabel, DiagSeverity};
use smol_str::SmolStr;

/// Categories of findings, each with a stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagKind {
    /// The value does not parse as its sub-grammar.
    Syntax,
    /// A scalar or enumerated value is out of its domain.
    AttributeValueInvalid,
    /// A deprecated shape or style item.
    DeprecatedValue,
    /// An arrow modifier that the primitive shape does not accept.
    ArrowModifierInvalid,
    /// `none` closing a multi-shape arrow.
    ArrowNoneLast,
    /// A color name missing from the resolved scheme.
    ColorNotInScheme,
    /// A `colorscheme` that names no known palette.
    ColorSchemeUnknown,
    /// A style item not valid for the element kind.
    StyleInvalid,
    /// `striped` on a node whose shape is not rectangular.
    StyleShapeMismatch,
    /// An HTML tag finding (unknown, misplaced, misclosed, text content).
    HtmlTagInvalid,
    /// An HTML attribute name or value finding.
    HtmlAttributeInvalid,
    /// A table mixed with other content on one level.
    HtmlInvalidSiblings,
    /// A record port name used more than once.
    PortNameDuplicate,
    /// A record field with an empty `<>` port.
    PortNameNotSet,
    /// An edge operator contradicting the graph's directedness.
    EdgeOpInvalid,
}

impl DiagKind {
    /// Returns the stable key callers filter on.
    pub fn name(self) -> &'static str {
        match self {
            Self::Syntax => "SYNTAX_DIAGNOSTIC",
            Self::AttributeValueInvalid => "ATTRIBUTE_VALUE_INVALID",
            Self::DeprecatedValue => "DEPRECATED_VALUE",
            Self::ArrowModifierInvalid => "ARROW_MODIFIER_INVALID",
            Self::ArrowNoneLast => "ARROW_NONE_LAST",
            Self::ColorNotInScheme => "COLOR_NOT_IN_SCHEME",
            Self::ColorSchemeUnknown => "COLOR_SCHEME_UNKNOWN",
            Self::StyleInvalid => "STYLE_INVALID",
            Self::StyleShapeMismatch => "STYLE_SHAPE_MISMATCH",
            Self::HtmlTagInvalid => "HTML_TAG_INVALID",
            Self::HtmlAttributeInvalid => "HTML_ATTRIBUTE_INVALID",
            Self::HtmlInvalidSiblings => "HTML_INVALID_SIBLINGS",
            Self::PortNameDuplicate => "PORT_NAME_DUPLICATE",
            Self::PortNameNotSet => "PORT_NAME_NOT_SET",
            Self::EdgeOpInvalid => "EDGE_OP_INVALID",
        }
    }
}

/// Builder for kind-tagged diagnostics.
pub struct DotDiagBuilder {
    kind: DiagKind,
    message: String,
    labels: Vec<DiagLabel>,
    severity: DiagSeverity,
    attribute: Option<SmolStr>,
}

impl DotDiagBuilder {
    /// Creates an error-severity builder.
    pub fn new(kind: DiagKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            labels: Vec::new(),
            severity: DiagSeverity::Error,
            attribute: None,
        }
    }

    pub fn with_primary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(DiagLabel::primary(span, message));
        self
    }

    pub fn with_severity(mut self, severity: DiagSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn for_attribute(mut self, name: &str) -> Self {
        self.attribute = Some(SmolStr::new(name));
        self
    }

    pub fn build(self) -> Diag {
        let mut diag = Diag::new(self.severity, self.message).with_code(self.kind.name());
        diag.labels = self.labels;
        diag.attribute = self.attribute;
        diag
    }
}

/// Helper constructors for the recurring message shapes.
impl DotDiagBuilder {
    /// `The value 'v' is not a syntactically correct <type>: <detail>`
    pub fn syntax(type_name: &str, value: &str, detail: &str, span: Span) -> Self {
        Self::new(
            DiagKind::Syntax,
            format!("The value '{value}' is not a syntactically correct {type_name}: {detail}"),
        )
        .with_primary_label(span, format!("not a valid {type_name}"))
    }

    /// `The <type> value 'v' is not semantically correct: <detail>`
    pub fn semantic(kind: DiagKind, type_name: &str, value: &str, detail: &str, span: Span) -> Self {
        Self::new(
            kind,
            format!("The {type_name} value '{value}' is not semantically correct: {detail}"),
        )
        .with_primary_label(span, "here")
    }

    /// Semantic findings on a record-based label.
    pub fn record_label(kind: DiagKind, value: &str, detail: &str, span: Span) -> Self {
        Self::new(
            kind,
            format!("The record-based label '{value}' is not semantically correct: {detail}"),
        )
        .with_primary_label(span, "here")
    }

    /// A deprecation warning.
    pub fn deprecated(type_name: &str, value: &str, detail: &str, span: Span) -> Self {
        Self::semantic(DiagKind::DeprecatedValue, type_name, value, detail, span)
            .with_severity(DiagSeverity::Warning)
    }

    /// `striped` used on a node whose shape cannot render stripes.
    pub fn striped_shape_mismatch(span: Span) -> Self {
        Self::new(
            DiagKind::StyleShapeMismatch,
            "The style 'striped' is only supported with clusters and rectangularly-shaped nodes, such as 'box', 'rect', 'rectangle', 'square'.",
        )
        .with_primary_label(span, "striped needs a rectangular shape")
    }

    /// An edge operator that contradicts the graph's directedness.
    pub fn edge_op_invalid(op: &str, span: Span) -> Self {
        let graph = if op == "->" { "directed" } else { "undirected" };
        Self::new(
            DiagKind::EdgeOpInvalid,
            format!("EdgeOp '{op}' may only be used in {graph} graphs."),
        )
        .with_primary_label(span, format!("'{op}' requires a {graph} graph"))
    }
}

/// Formats `'a', 'b', 'c'`.
pub fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
