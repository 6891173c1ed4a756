// Numeric bounds, enumerations and shape names.

use dot_validator::ast::{Document, Element, Stmt};
use dot_validator::diag::DiagSeverity;

use crate::common::{Fixture, assert_clean, assert_diag, assert_single, validate};

fn node_doc(fx: &mut Fixture, name: &str) -> Document {
    let node = Element::node("1").with_attribute(fx.attr(name));
    Document::graph(Element::graph().with_stmt(Stmt::Element(node)))
}

fn edge_doc(fx: &mut Fixture, name: &str) -> Document {
    let edge = Element::edge([fx.op()]).with_attribute(fx.attr(name));
    Document::digraph(Element::graph().with_stmt(Stmt::Element(edge)))
}

#[test]
fn negative_arrowsize() {
    let mut fx = Fixture::new("digraph {1->2[arrowsize=\"-2.0\"]}");
    let doc = edge_doc(&mut fx, "arrowsize");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("-2.0"),
        4,
        "The double value '-2.0' is not semantically correct: Value may not be smaller than 0.0.",
    );
}

#[test]
fn distortion_below_minus_one_hundred() {
    let mut fx = Fixture::new("graph {1[distortion=\"-100.0001\"]}");
    let doc = node_doc(&mut fx, "distortion");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("-100.0001"),
        9,
        "The double value '-100.0001' is not semantically correct: Value may not be smaller than -100.0.",
    );

    let mut fx = Fixture::new("graph {1[distortion=\"-100\"]}");
    assert_clean(&validate(&node_doc(&mut fx, "distortion")));
}

#[test]
fn wrong_node_sides() {
    let mut fx = Fixture::new("graph { 1[sides=foo] 2[sides=\"-1\"]}");
    let first = Element::node("1").with_attribute(fx.attr("sides"));
    let second = Element::node("2").with_attribute(fx.attr("sides"));
    let doc = Document::graph(
        Element::graph()
            .with_stmt(Stmt::Element(first))
            .with_stmt(Stmt::Element(second)),
    );
    let diags = validate(&doc);
    assert_eq!(diags.len(), 2);
    assert_diag(
        &diags[0],
        DiagSeverity::Error,
        fx.offset_of("foo"),
        3,
        "The value 'foo' is not a syntactically correct int: invalid digit found in string.",
    );
    assert_diag(
        &diags[1],
        DiagSeverity::Error,
        fx.offset_of("-1"),
        2,
        "The int value '-1' is not semantically correct: Value may not be smaller than 0.",
    );
}

#[test]
fn unparsable_double() {
    let mut fx = Fixture::new("graph {1[fontsize=big]}");
    let doc = node_doc(&mut fx, "fontsize");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("big"),
        3,
        "The value 'big' is not a syntactically correct double: invalid float literal.",
    );
}

#[test]
fn invalid_dir_type() {
    let mut fx = Fixture::new("digraph testGraph { 1->2[dir=foo] }");
    let doc = edge_doc(&mut fx, "dir");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        29,
        3,
        "The value 'foo' is not a syntactically correct dirType: Value has to be one of 'forward', 'back', 'both', 'none'.",
    );
}

#[test]
fn invalid_rank_type_in_a_subgraph() {
    let mut fx = Fixture::new("graph{subgraph{rank=foo}}");
    let subgraph = Element::subgraph(None).with_stmt(Stmt::Assign(fx.attr("rank")));
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Element(subgraph)));
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("foo"),
        3,
        "The value 'foo' is not a syntactically correct rankType: Value has to be one of 'same', 'min', 'source', 'max', 'sink'.",
    );
}

#[test]
fn invalid_rankdir_on_the_graph() {
    let mut fx = Fixture::new("digraph{rankdir=XY}");
    let doc = Document::digraph(Element::graph().with_stmt(Stmt::Assign(fx.attr("rankdir"))));
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("XY"),
        2,
        "The value 'XY' is not a syntactically correct rankdir: Value has to be one of 'TB', 'LR', 'BT', 'RL'.",
    );
}

#[test]
fn unknown_shape() {
    let mut fx = Fixture::new("graph {1[shape=foo]}");
    let doc = node_doc(&mut fx, "shape");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("foo"),
        3,
        "The value 'foo' is not a syntactically correct shape: Extraneous input 'foo' expecting EOF.",
    );
}

#[test]
fn values_within_bounds_pass() {
    let mut fx = Fixture::new("digraph {1->2[arrowsize=0 minlen=2 dir=back weight=1.5]}");
    let edge = Element::edge([fx.op()])
        .with_attribute(fx.attr("arrowsize"))
        .with_attribute(fx.attr("minlen"))
        .with_attribute(fx.attr("dir"))
        .with_attribute(fx.attr("weight"));
    let doc = Document::digraph(Element::graph().with_stmt(Stmt::Element(edge)));
    assert_clean(&validate(&doc));
}

#[test]
fn oversized_doubles_are_checked_against_the_bound() {
    let mut fx = Fixture::new("digraph {1->2[arrowsize=1e400]}");
    assert_clean(&validate(&edge_doc(&mut fx, "arrowsize")));

    let mut fx = Fixture::new("digraph {1->2[arrowsize=\"-1e400\"]}");
    let doc = edge_doc(&mut fx, "arrowsize");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("-1e400"),
        6,
        "The double value '-1e400' is not semantically correct: Value may not be smaller than 0.0.",
    );
}
