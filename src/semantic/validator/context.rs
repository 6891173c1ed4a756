//! Context threaded through the walk: scoped defaults and the attribute site.
//!
//! Values that depend on other attributes (the color scheme of a color, the
//! shape of a node carrying `style=striped` or a record label) are resolved
//! here, always in the same order:
//!
//! 1. the attribute list the value appears in, wherever the other attribute
//!    sits in it;
//! 2. the `node[...]` / `edge[...]` / `graph[...]` defaults seen earlier in
//!    this graph or an enclosing one;
//! 3. the built-in default.

use log::trace;

use crate::ast::{Attribute, DefaultBlock, DefaultTarget, ElementKind};
use crate::semantic::attributes::DEFAULT_SHAPE;
use crate::semantic::color_schemes::DEFAULT_SCHEME;

/// Defaults in effect at one point of the walk.
///
/// Entering a subgraph clones the scope, so defaults set inside it do not
/// leak back out.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scope<'d> {
    graph: Vec<&'d Attribute>,
    node: Vec<&'d Attribute>,
    edge: Vec<&'d Attribute>,
}

impl<'d> Scope<'d> {
    /// Records a default block.
    pub(crate) fn apply(&mut self, block: &'d DefaultBlock) {
        let target = match block.target {
            DefaultTarget::Graph => &mut self.graph,
            DefaultTarget::Node => &mut self.node,
            DefaultTarget::Edge => &mut self.edge,
        };
        target.extend(block.attributes.iter());
    }

    /// Records a graph-level `name=value`; nested subgraphs inherit it.
    pub(crate) fn assign(&mut self, attribute: &'d Attribute) {
        self.graph.push(attribute);
    }

    fn defaults_for(&self, kind: ElementKind) -> &[&'d Attribute] {
        match kind {
            ElementKind::Node => &self.node,
            ElementKind::Edge => &self.edge,
            ElementKind::Graph | ElementKind::Subgraph | ElementKind::Cluster => &self.graph,
        }
    }

    fn default_value(&self, kind: ElementKind, name: &str) -> Option<&'d Attribute> {
        self.defaults_for(kind)
            .iter()
            .rev()
            .find(|attr| attr.name == name)
            .copied()
    }
}

/// Where a group of attributes sits: the kind they apply to, the list they
/// were written in, and the defaults in effect around it.
pub(crate) struct AttrSite<'s, 'd> {
    pub(crate) kind: ElementKind,
    local: Vec<&'d Attribute>,
    scope: &'s Scope<'d>,
}

impl<'s, 'd> AttrSite<'s, 'd> {
    pub(crate) fn new(
        kind: ElementKind,
        local: impl IntoIterator<Item = &'d Attribute>,
        scope: &'s Scope<'d>,
    ) -> Self {
        Self {
            kind,
            local: local.into_iter().collect(),
            scope,
        }
    }

    /// The attributes of this site in declaration order.
    pub(crate) fn attributes(&self) -> impl Iterator<Item = &'d Attribute> + '_ {
        self.local.iter().copied()
    }

    fn local_value(&self, name: &str) -> Option<&'d Attribute> {
        self.local.iter().rev().find(|attr| attr.name == name).copied()
    }

    fn resolve(&self, name: &str) -> Option<&'d Attribute> {
        self.local_value(name)
            .or_else(|| self.scope.default_value(self.kind, name))
    }

    /// The color scheme colors of this site are checked against.
    pub(crate) fn color_scheme(&self) -> &'d str {
        let scheme = self
            .resolve("colorscheme")
            .map_or(DEFAULT_SCHEME, |attr| attr.value.as_str());
        trace!(kind = self.kind.name(), scheme = scheme; "resolved color scheme");
        scheme
    }

    /// The shape a node of this site is drawn with.
    pub(crate) fn shape(&self) -> &'d str {
        let shape = self
            .local_value("shape")
            .or_else(|| self.scope.default_value(ElementKind::Node, "shape"))
            .map_or(DEFAULT_SHAPE, |attr| attr.value.as_str());
        trace!(kind = self.kind.name(), shape = shape; "resolved node shape");
        shape
    }
}
