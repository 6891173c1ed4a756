// HTML-like label validation: one finding per malformed label.

use dot_validator::ast::{Document, Element, Stmt};
use dot_validator::diag::{Diag, DiagSeverity};
use dot_validator::semantic::DotValidator;

use crate::common::{Fixture, assert_diag, assert_single, format_diag_diagnostics, validate};

/// `graph {1[label = <...>]}` with `label` between the outer brackets.
fn label_doc(label: &str) -> (Fixture, Document) {
    let mut fx = Fixture::new(&format!("graph {{1[label = <{label}>]}}"));
    let node = Element::node("1").with_attribute(fx.attr("label"));
    let doc = Document::graph(Element::graph().with_stmt(Stmt::Element(node)));
    (fx, doc)
}

fn assert_html_error(label: &str, error_prone: &str, detail: &str) {
    let (fx, doc) = label_doc(label);
    let message = format!("The htmlLabel value '{label}' is not semantically correct: {detail}");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of(error_prone),
        error_prone.len(),
        &message,
    );
}

#[test]
fn unclosed_tag_is_a_syntax_error() {
    let (fx, doc) = label_doc("<BR/><FONT>");
    assert_single(
        &validate(&doc),
        DiagSeverity::Error,
        fx.offset_of("<<BR/><FONT>>"),
        13,
        "The value '<BR/><FONT>' is not a syntactically correct htmlLabel: Mismatched input '<EOF>' expecting '</'.",
    );
}

#[test]
fn self_closing_font() {
    assert_html_error("<BR/><FONT/>", "FONT", "Tag '<FONT/>' cannot be self closing.");
}

#[test]
fn wrong_close_tag() {
    assert_html_error(
        "  <FONT></foo>  ",
        "foo",
        "Tag '<FONT>' is not closed (expected '</FONT>' but got '</foo>').",
    );
}

#[test]
fn string_literal_inside_br() {
    assert_html_error("  <BR>string</BR>  ", "BR", "Tag '<BR>' cannot contain a string literal.");
}

#[test]
fn unsupported_tag() {
    assert_html_error("  <test>string</test>  ", "test", "Tag '<test>' is not supported.");
}

#[test]
fn row_outside_a_table() {
    assert_html_error(
        "  <tr></tr>  ",
        "tr",
        "Tag '<tr>' is not allowed inside '<ROOT>', but only inside '<TABLE>'.",
    );
}

#[test]
fn unknown_table_attribute() {
    assert_html_error(
        "  <table foo=\"bar\"></table>  ",
        "foo",
        "Attribute 'foo' is not allowed inside '<table>'.",
    );
}

#[test]
fn invalid_align_value() {
    assert_html_error(
        "  <table align=\"foo\"></table>  ",
        "\"foo\"",
        "The value 'foo' is not a correct align: Value has to be one of 'CENTER', 'LEFT', 'RIGHT'.",
    );
}

#[test]
fn html_checks_can_be_disabled() {
    let (_, doc) = label_doc("<tr></tr>");
    let validator = DotValidator::new().with_html_labels(false);
    assert!(validator.validate(&doc).diagnostics.is_empty());
}

/// Each case lists the label, then pairs of error-prone text and the index
/// inside the label to search it from.
const INVALID_SIBLINGS: &[&[&str]] = &[
    &["<table></table><b></b>", "table", "0", "b", "15"],
    &["<table></table><b>text</b>", "table", "0", "b", "15"],
    &["<table></table><br></br>", "table", "0", "br", "0"],
    &["<table></table><font></font>", "table", "0", "font", "0"],
    &["<table></table><font>text</font>", "table", "0", "font", "0"],
    &["<table></table><i></i>", "table", "0", "i", "0"],
    &["<table></table><o>text</o>", "table", "0", "o", "0"],
    &["<table></table><s></s>", "table", "0", "s", "0"],
    &["<table></table><sub>text</sub>", "table", "0", "sub", "0"],
    &["<table></table><sup></sup>", "table", "0", "sup", "0"],
    &["<table></table><table></table>", "table", "0", "table", "15"],
    &["<table></table><u>text</u>", "table", "0", "u", "0"],
    &["<table></table>text", "table", "0", "text", "0"],
    &["<b>text</b><table></table>", "b", "0", "table", "0"],
    &["<br></br><table></table>", "br", "0", "table", "0"],
    &["<font></font><table></table>", "font", "0", "table", "0"],
    &["<u>text</u><table></table>", "u", "0", "table", "0"],
    &["text<table></table>", "text", "0", "table", "0"],
    &["<table></table>text<table></table>", "table", "0", "text", "0", "table", "20"],
    &["<table><tr><td><table></table><b></b></td></tr></table>", "table", "15", "b", "30"],
    &["<table><tr><td><table></table><br></br></td></tr></table>", "table", "15", "br", "15"],
    &["<table><tr><td><table></table><table></table></td></tr></table>", "table", "15", "table", "30"],
    &["<table><tr><td><table></table>text</td></tr></table>", "table", "15", "text", "15"],
    &["<table><tr><td><sub></sub><table></table></td></tr></table>", "sub", "15", "table", "15"],
    &["<table><tr><td>text<table></table></td></tr></table>", "text", "15", "table", "15"],
    &[
        "<table><tr><td><table></table>text<table></table></td></tr></table>",
        "table", "15", "text", "15", "table", "34",
    ],
];

#[test]
fn tables_with_siblings() {
    for case in INVALID_SIBLINGS {
        let label = case[0];
        let (fx, doc) = label_doc(label);
        let diags: Vec<Diag> = validate(&doc);
        let expected = (case.len() - 1) / 2;
        assert_eq!(
            diags.len(),
            expected,
            "{label}:\n{}",
            format_diag_diagnostics(&diags)
        );

        let message = format!("The htmlLabel value '{label}' is not semantically correct: Invalid siblings.");
        for (diag, pair) in diags.iter().zip(case[1..].chunks(2)) {
            let from = pair[1].parse::<usize>().unwrap_or_default() + 18;
            let offset = fx.offset_of_from(pair[0], from);
            assert_diag(diag, DiagSeverity::Error, offset, pair[0].len(), &message);
        }
    }
}
