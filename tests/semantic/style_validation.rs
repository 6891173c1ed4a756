// Style validation, including the striped/shape rule.

use dot_validator::ast::{DefaultTarget, Document, Element, Stmt};
use dot_validator::diag::DiagSeverity;

use crate::common::{Fixture, assert_clean, assert_single, validate};

const STRIPED: &str = "The style 'striped' is only supported with clusters and rectangularly-shaped nodes, such as 'box', 'rect', 'rectangle', 'square'.";

fn node_doc(fx: &mut Fixture, names: &[&str]) -> Document {
    let mut node = Element::node("1");
    for name in names {
        node = node.with_attribute(fx.attr(name));
    }
    Document::graph(Element::graph().with_stmt(Stmt::Element(node)))
}

#[test]
fn invalid_node_style() {
    let mut fx = Fixture::new("graph {1[style=\"dashed, setlinewidth(4)\"]}");
    let doc = node_doc(&mut fx, &["style"]);
    assert_single(
        &validate(&doc),
        DiagSeverity::Warning,
        fx.offset_of("setlinewidth"),
        12,
        "The style value 'dashed, setlinewidth(4)' is not semantically correct: The usage of setlinewidth is deprecated, use the penwidth attribute instead.",
    );

    let mut fx = Fixture::new("graph {1[style=\"dashed, foo\"]}");
    let doc = node_doc(&mut fx, &["style"]);
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("foo"),
        3,
        "The style value 'dashed, foo' is not semantically correct: Value should be one of 'bold', 'dashed', 'diagonals', 'dotted', 'filled', 'invis', 'radial', 'rounded', 'solid', 'striped', 'wedged'.",
    );
}

#[test]
fn invalid_edge_style() {
    let mut fx = Fixture::new("graph {1--2[style=\"dashed, setlinewidth(4)\"]}");
    let edge = Element::edge([fx.op()]).with_attribute(fx.attr("style"));
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Element(edge)));
    assert_single(
        &validate(&doc),
        DiagSeverity::Warning,
        fx.offset_of("setlinewidth"),
        12,
        "The style value 'dashed, setlinewidth(4)' is not semantically correct: The usage of setlinewidth is deprecated, use the penwidth attribute instead.",
    );

    let mut fx = Fixture::new("graph {1--2[style=\"dashed, foo\"]}");
    let edge = Element::edge([fx.op()]).with_attribute(fx.attr("style"));
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Element(edge)));
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("foo"),
        3,
        "The style value 'dashed, foo' is not semantically correct: Value should be one of 'bold', 'dashed', 'dotted', 'invis', 'solid', 'tapered'.",
    );
}

#[test]
fn setlinewidth_before_another_item() {
    let mut fx = Fixture::new("graph {1[style=\"setlinewidth(5), dotted\"]}");
    let doc = node_doc(&mut fx, &["style"]);
    let diags = validate(&doc);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].is_warning());
}

#[test]
fn striped_on_an_ellipse_either_order() {
    for text in [
        "graph {1[shape=ellipse style=striped]}",
        "graph {1[style=striped shape=ellipse]}",
    ] {
        let mut fx = Fixture::new(text);
        let first = if text.find("shape") < text.find("style") {
            ["shape", "style"]
        } else {
            ["style", "shape"]
        };
        let doc = node_doc(&mut fx, &first);
        assert_single(&validate(&doc), DiagSeverity::Error, fx.offset_of("striped"), 7, STRIPED);
    }
}

#[test]
fn striped_with_the_default_shape() {
    let mut fx = Fixture::new("graph {1[style=striped]}");
    let doc = node_doc(&mut fx, &["style"]);
    assert_single(&validate(&doc), DiagSeverity::Error, fx.offset_of("striped"), 7, STRIPED);
}

#[test]
fn striped_in_node_defaults() {
    let mut fx = Fixture::new("graph {node[style=striped shape=ellipse]}");
    let block = fx.defaults(DefaultTarget::Node, &["style", "shape"]);
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Defaults(block)));
    assert_single(&validate(&doc), DiagSeverity::Error, fx.offset_of("striped"), 7, STRIPED);
}

#[test]
fn striped_with_a_box_from_defaults() {
    let mut fx = Fixture::new("graph {node[shape=box] 1[style=striped]}");
    let block = fx.defaults(DefaultTarget::Node, &["shape"]);
    let node = Element::node("1").with_attribute(fx.attr("style"));
    let doc = Document::graph(
        Element::graph()
            .with_stmt(Stmt::Defaults(block))
            .with_stmt(Stmt::Element(node)),
    );
    assert_clean(&validate(&doc));
}

#[test]
fn striped_clusters_are_fine() {
    let mut fx = Fixture::new("graph {subgraph cluster_0 {style=striped}}");
    let cluster = Element::subgraph(Some("cluster_0")).with_stmt(Stmt::Assign(fx.attr("style")));
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Element(cluster)));
    assert_clean(&validate(&doc));
}

#[test]
fn unbalanced_parenthesis_is_a_syntax_error() {
    let mut fx = Fixture::new("graph {1[style=\"setlinewidth(4\"]}");
    let doc = node_doc(&mut fx, &["style"]);
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("setlinewidth"),
        14,
        "The value 'setlinewidth(4' is not a syntactically correct style: Mismatched input '<EOF>' expecting ')'.",
    );
}
