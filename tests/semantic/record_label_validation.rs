// Record label validation on record-shaped nodes.

use dot_validator::ast::{DefaultTarget, Document, Element, Stmt};
use dot_validator::diag::DiagSeverity;
use dot_validator::semantic::DiagKind;

use crate::common::{Fixture, assert_clean, assert_diag, assert_single, validate};

/// `digraph{ node [shape=record]; myNode [label="..."]; }`
fn record_doc(label: &str) -> Document {
    let mut fx = Fixture::new(&format!(
        "digraph{{ node [shape=record]; myNode [label=\"{label}\"]; }}"
    ));
    let block = fx.defaults(DefaultTarget::Node, &["shape"]);
    let node = Element::node("myNode").with_attribute(fx.attr("label"));
    Document::digraph(
        Element::graph()
            .with_stmt(Stmt::Defaults(block))
            .with_stmt(Stmt::Element(node)),
    )
}

#[test]
fn duplicate_port_names() {
    let diags = validate(&record_doc("<here> foo | <here> more foo"));
    let message = "The record-based label '<here> foo | <here> more foo' is not semantically correct: Port name not unique: here";
    assert_eq!(diags.len(), 2);
    assert_diag(&diags[0], DiagSeverity::Error, 46, 4, message);
    assert_diag(&diags[1], DiagSeverity::Error, 59, 4, message);
    assert_eq!(diags[0].code.as_deref(), Some(DiagKind::PortNameDuplicate.name()));
}

#[test]
fn port_without_a_name() {
    assert_single(
        &validate(&record_doc("<> foo | <here> more foo")),
        DiagSeverity::Warning,
        45,
        6,
        "The record-based label '<> foo | <here> more foo' is not semantically correct: Port unnamed: port cannot be referenced",
    );
}

#[test]
fn record_syntax_error() {
    assert_single(
        &validate(&record_doc("<}> foo | <here> more foo")),
        DiagSeverity::Error,
        46,
        1,
        "The value '<}> foo | <here> more foo' is not a syntactically correct record-based label: extraneous input '}' expecting '>'",
    );
}

#[test]
fn nested_fields_with_distinct_ports() {
    assert_clean(&validate(&record_doc("<f0> left|{<f1> mid\\ dle|<f2> right}")));
}

#[test]
fn labels_of_other_shapes_are_plain_text() {
    let mut fx = Fixture::new("digraph{ myNode [label=\"<here> foo | <here> more foo\"]; }");
    let node = Element::node("myNode").with_attribute(fx.attr("label"));
    let doc = Document::digraph(Element::graph().with_stmt(Stmt::Element(node)));
    assert_clean(&validate(&doc));
}

#[test]
fn shape_on_the_node_itself() {
    let mut fx = Fixture::new("digraph{ myNode [label=\"<a>|<a>\" shape=Mrecord]; }");
    let node = Element::node("myNode")
        .with_attribute(fx.attr("label"))
        .with_attribute(fx.attr("shape"));
    let doc = Document::digraph(Element::graph().with_stmt(Stmt::Element(node)));
    assert_eq!(validate(&doc).len(), 2);
}
