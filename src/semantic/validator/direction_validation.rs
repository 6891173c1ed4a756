//! Edge operators must agree with the graph's directedness.

use crate::ast::Element;
use crate::diag::Diag;
use crate::semantic::diag::DotDiagBuilder;

/// Reports every operator of `edge` that contradicts `directed`.
pub(super) fn check_edge_ops(edge: &Element, directed: bool, diagnostics: &mut Vec<Diag>) {
    for op in edge.edge_ops.iter().filter(|op| op.directed != directed) {
        diagnostics.push(DotDiagBuilder::edge_op_invalid(op.symbol(), op.span.clone()).build());
    }
}
