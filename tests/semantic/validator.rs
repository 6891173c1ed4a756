// Whole-document behaviour of the validator.

use dot_validator::ast::{DefaultTarget, Document, Element, Stmt};
use dot_validator::diag::{DiagSeverity, SourceFile, convert_diagnostics_to_reports};
use dot_validator::semantic::{DotValidator, ValidationConfig};

use crate::common::{Fixture, assert_clean, validate};

/// A document touching every pass, with one finding per pass.
fn mixed_document() -> (Fixture, Document) {
    let mut fx = Fixture::new(
        "digraph { node[shape=record] a[label=\"<p>|<p>\"] a--b[arrowhead=oinv style=tapered color=grsy] c[label=<<tr></tr>>] d[sides=\"-3\"] }",
    );
    let block = fx.defaults(DefaultTarget::Node, &["shape"]);
    let a = Element::node("a").with_attribute(fx.attr("label"));
    let edge = Element::edge([fx.op()])
        .with_attribute(fx.attr("arrowhead"))
        .with_attribute(fx.attr("style"))
        .with_attribute(fx.attr("color"));
    let c = Element::node("c").with_attribute(fx.attr("label"));
    let d = Element::node("d").with_attribute(fx.attr("sides"));
    let doc = Document::digraph(
        Element::graph()
            .with_stmt(Stmt::Defaults(block))
            .with_stmt(Stmt::Element(a))
            .with_stmt(Stmt::Element(edge))
            .with_stmt(Stmt::Element(c))
            .with_stmt(Stmt::Element(d)),
    );
    (fx, doc)
}

#[test]
fn findings_come_back_in_document_order() {
    let (_, doc) = mixed_document();
    let diags = validate(&doc);
    let codes: Vec<_> = diags.iter().filter_map(|diag| diag.code.as_deref()).collect();
    assert_eq!(
        codes,
        [
            "PORT_NAME_DUPLICATE",
            "PORT_NAME_DUPLICATE",
            "EDGE_OP_INVALID",
            "COLOR_NOT_IN_SCHEME",
            "HTML_TAG_INVALID",
            "ATTRIBUTE_VALUE_INVALID",
        ]
    );
    let offsets: Vec<_> = diags.iter().map(|diag| diag.offset()).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
}

#[test]
fn validation_is_idempotent() {
    let (_, doc) = mixed_document();
    let validator = DotValidator::new();
    assert_eq!(validator.validate(&doc), validator.validate(&doc));
}

#[test]
fn config_switches_off_optional_checks() {
    let (_, doc) = mixed_document();
    let config = ValidationConfig {
        report_deprecations: false,
        check_edge_direction: false,
        validate_html_labels: false,
        validate_record_labels: false,
    };
    let outcome = DotValidator::with_config(config).validate(&doc);
    assert_eq!(outcome.diagnostics.len(), 2);
    assert!(outcome.diagnostics.iter().all(|diag| diag.severity == DiagSeverity::Error));
}

#[test]
fn outcome_splits_errors_and_warnings() {
    let mut fx = Fixture::new("digraph { a->b[arrowhead=open dir=foo] }");
    let edge = Element::edge([fx.op()])
        .with_attribute(fx.attr("arrowhead"))
        .with_attribute(fx.attr("dir"));
    let doc = Document::digraph(Element::graph().with_stmt(Stmt::Element(edge)));

    let outcome = DotValidator::new().validate(&doc);
    assert!(outcome.has_errors());
    assert_eq!(outcome.errors().count(), 1);
    assert_eq!(outcome.warnings().count(), 1);

    let failed = outcome.into_result().unwrap_err();
    assert_eq!(failed.errors, 1);
    assert_eq!(failed.diagnostics.len(), 2);
}

#[test]
fn diagnostics_render_through_miette() {
    let (fx, doc) = mixed_document();
    let source = SourceFile::with_name(fx.text(), "mixed.dot");
    let reports = convert_diagnostics_to_reports(&validate(&doc), &source);
    assert_eq!(reports.len(), 6);
    assert_eq!(
        reports[2].to_string(),
        "EdgeOp '--' may only be used in undirected graphs."
    );
}

#[test]
fn empty_graph_is_clean() {
    assert_clean(&validate(&Document::graph(Element::graph())));
}
