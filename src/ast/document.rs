//! The element tree handed over by the outer DOT parser.
//!
//! The outer grammar (statements, IDs, quoting) is parsed elsewhere. What this
//! crate receives is already structured: a root graph whose body is an ordered
//! list of statements, and on every attribute the raw value text together with
//! its absolute span in the document.

use smol_str::SmolStr;

use super::Span;

/// The kind of a graph element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The top-level `graph` / `digraph`.
    Graph,
    /// A `subgraph` whose name does not start with `cluster`.
    Subgraph,
    /// A `subgraph cluster...`.
    Cluster,
    /// A node statement.
    Node,
    /// An edge statement (possibly a chain `a -> b -> c`).
    Edge,
}

impl ElementKind {
    /// Returns a lowercase name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Subgraph => "subgraph",
            Self::Cluster => "cluster",
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }

    /// Returns true for kinds that own a statement body.
    pub fn is_graph_like(self) -> bool {
        matches!(self, Self::Graph | Self::Subgraph | Self::Cluster)
    }
}

/// The target of a `node[...]`, `edge[...]` or `graph[...]` default block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultTarget {
    /// `graph[...]`
    Graph,
    /// `node[...]`
    Node,
    /// `edge[...]`
    Edge,
}

impl DefaultTarget {
    /// The element kind whose defaults this block sets.
    ///
    /// `graph[...]` inside a cluster applies to that cluster, so callers that
    /// know the enclosing kind should prefer it over [`ElementKind::Graph`].
    pub fn element_kind(self) -> ElementKind {
        match self {
            Self::Graph => ElementKind::Graph,
            Self::Node => ElementKind::Node,
            Self::Edge => ElementKind::Edge,
        }
    }
}

/// How an attribute value was delimited in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDelimiter {
    /// A bare ID or numeral: `shape=box`.
    Bare,
    /// A double-quoted string: `label="a | b"`.
    Quoted,
    /// An HTML string: `label=<<b>x</b>>`.
    Html,
}

/// A single `name=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, case-sensitive.
    pub name: SmolStr,
    /// Raw value text between the delimiters, escapes preserved.
    pub value: String,
    /// How the value was delimited.
    pub delimiter: ValueDelimiter,
    /// Span of the value including its delimiters.
    pub span: Span,
}

impl Attribute {
    /// Creates an attribute from its parts.
    pub fn new(
        name: impl Into<SmolStr>,
        value: impl Into<String>,
        delimiter: ValueDelimiter,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            delimiter,
            span,
        }
    }

    /// A bare value starting at `offset`.
    pub fn bare(name: impl Into<SmolStr>, value: impl Into<String>, offset: usize) -> Self {
        let value = value.into();
        let span = offset..offset + value.len();
        Self::new(name, value, ValueDelimiter::Bare, span)
    }

    /// A quoted value whose opening quote is at `offset`.
    pub fn quoted(name: impl Into<SmolStr>, value: impl Into<String>, offset: usize) -> Self {
        let value = value.into();
        let span = offset..offset + value.len() + 2;
        Self::new(name, value, ValueDelimiter::Quoted, span)
    }

    /// An HTML value whose opening `<` is at `offset`.
    pub fn html(name: impl Into<SmolStr>, value: impl Into<String>, offset: usize) -> Self {
        let value = value.into();
        let span = offset..offset + value.len() + 2;
        Self::new(name, value, ValueDelimiter::Html, span)
    }

    /// Absolute offset of the first character of [`Attribute::value`].
    pub fn value_offset(&self) -> usize {
        match self.delimiter {
            ValueDelimiter::Bare => self.span.start,
            ValueDelimiter::Quoted | ValueDelimiter::Html => self.span.start + 1,
        }
    }

    /// Span of the value text, delimiters excluded.
    pub fn value_span(&self) -> Span {
        let start = self.value_offset();
        start..start + self.value.len()
    }

    /// Moves a span relative to the value text into document coordinates.
    pub fn absolute(&self, local: &Span) -> Span {
        super::shift(local, self.value_offset())
    }

    /// Returns true if the value is an HTML string.
    pub fn is_html(&self) -> bool {
        self.delimiter == ValueDelimiter::Html
    }
}

/// An ordered attribute list; later entries win on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList {
    entries: Vec<Attribute>,
}

impl AttrList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.
    pub fn push(&mut self, attribute: Attribute) {
        self.entries.push(attribute);
    }

    /// Returns the effective (last) attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.entries.iter().rev().find(|attr| attr.name == name)
    }

    /// Returns the effective value of the given attribute.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|attr| attr.value.as_str())
    }

    /// Iterates in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Attribute> for AttrList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One edge operator occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOp {
    /// `->` when true, `--` otherwise.
    pub directed: bool,
    /// Span of the two-character operator.
    pub span: Span,
}

impl EdgeOp {
    /// A `->` at `offset`.
    pub fn directed(offset: usize) -> Self {
        Self {
            directed: true,
            span: offset..offset + 2,
        }
    }

    /// A `--` at `offset`.
    pub fn undirected(offset: usize) -> Self {
        Self {
            directed: false,
            span: offset..offset + 2,
        }
    }

    /// The operator as written.
    pub fn symbol(&self) -> &'static str {
        if self.directed { "->" } else { "--" }
    }
}

/// A `node[...]`, `edge[...]` or `graph[...]` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBlock {
    pub target: DefaultTarget,
    pub attributes: AttrList,
    pub span: Span,
}

impl DefaultBlock {
    pub fn new(target: DefaultTarget, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Self {
            target,
            attributes: attributes.into_iter().collect(),
            span: 0..0,
        }
    }
}

/// A statement inside a graph body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A node, edge, or subgraph.
    Element(Element),
    /// A kind-level default block.
    Defaults(DefaultBlock),
    /// A graph-level `name=value`.
    Assign(Attribute),
}

/// A graph, subgraph, cluster, node, or edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Node ID or subgraph name, if any.
    pub name: Option<SmolStr>,
    /// The element's own `[...]` attribute list.
    pub attributes: AttrList,
    /// Statement body of graph-like elements.
    pub body: Vec<Stmt>,
    /// Operator occurrences of an edge chain.
    pub edge_ops: Vec<EdgeOp>,
    /// A graph owned by a node.
    pub nested: Option<Box<Document>>,
    pub span: Span,
}

impl Element {
    fn with_kind(kind: ElementKind, name: Option<SmolStr>) -> Self {
        Self {
            kind,
            name,
            attributes: AttrList::new(),
            body: Vec::new(),
            edge_ops: Vec::new(),
            nested: None,
            span: 0..0,
        }
    }

    /// A top-level graph element.
    pub fn graph() -> Self {
        Self::with_kind(ElementKind::Graph, None)
    }

    /// A subgraph; names starting with `cluster` make it a cluster.
    pub fn subgraph(name: Option<&str>) -> Self {
        let kind = match name {
            Some(name) if name.starts_with("cluster") => ElementKind::Cluster,
            _ => ElementKind::Subgraph,
        };
        Self::with_kind(kind, name.map(SmolStr::new))
    }

    pub fn node(name: &str) -> Self {
        Self::with_kind(ElementKind::Node, Some(SmolStr::new(name)))
    }

    /// An edge chain with the given operator occurrences.
    pub fn edge(ops: impl IntoIterator<Item = EdgeOp>) -> Self {
        let mut edge = Self::with_kind(ElementKind::Edge, None);
        edge.edge_ops = ops.into_iter().collect();
        edge
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn with_nested(mut self, document: Document) -> Self {
        self.nested = Some(Box::new(document));
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Graph-level `name=value` statements of a graph-like element.
    pub fn assignments(&self) -> impl Iterator<Item = &Attribute> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::Assign(attr) => Some(attr),
            _ => None,
        })
    }
}

/// A parsed DOT document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `digraph` when true.
    pub directed: bool,
    /// `strict` keyword present.
    pub strict: bool,
    /// The root graph element.
    pub root: Element,
}

impl Document {
    pub fn new(directed: bool, root: Element) -> Self {
        Self {
            directed,
            strict: false,
            root,
        }
    }

    /// A `digraph` document.
    pub fn digraph(root: Element) -> Self {
        Self::new(true, root)
    }

    /// An undirected `graph` document.
    pub fn graph(root: Element) -> Self {
        Self::new(false, root)
    }
}
