//! The document walk that routes every attribute to its checks.

mod arrow_validation;
mod color_validation;
mod context;
mod direction_validation;
mod html_validation;
mod range_validation;
mod record_validation;
mod style_validation;

use log::{debug, trace};
use miette::Diagnostic;

use crate::ast::{Attribute, DefaultTarget, Document, Element, ElementKind, Stmt};
use crate::diag::{Diag, DiagSeverity};
use crate::semantic::attributes::{AttrType, attribute_type, is_record_shape};

pub(crate) use context::{AttrSite, Scope};

/// Configuration for attribute validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Report deprecated arrow shapes and style items.
    pub report_deprecations: bool,

    /// Check edge operators against the graph's directedness.
    pub check_edge_direction: bool,

    /// Parse and check HTML-like labels.
    pub validate_html_labels: bool,

    /// Parse and check labels of record-shaped nodes.
    pub validate_record_labels: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            report_deprecations: true,
            check_edge_direction: true,
            validate_html_labels: true,
            validate_record_labels: true,
        }
    }
}

/// Validates the attribute values of a document.
///
/// The validator holds configuration only. Every call to
/// [`DotValidator::validate`] starts from a fresh context, so one validator
/// can be shared across threads and documents.
#[derive(Debug, Clone, Default)]
pub struct DotValidator {
    config: ValidationConfig,
}

impl DotValidator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Enables or disables deprecation warnings.
    pub fn with_deprecations(mut self, enabled: bool) -> Self {
        self.config.report_deprecations = enabled;
        self
    }

    /// Enables or disables the edge operator check.
    pub fn with_edge_direction(mut self, enabled: bool) -> Self {
        self.config.check_edge_direction = enabled;
        self
    }

    /// Enables or disables HTML-like label checks.
    pub fn with_html_labels(mut self, enabled: bool) -> Self {
        self.config.validate_html_labels = enabled;
        self
    }

    /// Enables or disables record label checks.
    pub fn with_record_labels(mut self, enabled: bool) -> Self {
        self.config.validate_record_labels = enabled;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a document.
    ///
    /// Elements are visited in document order and every attribute is
    /// checked, whatever was found before it. The returned diagnostics are in
    /// the order they were found.
    pub fn validate(&self, document: &Document) -> ValidationOutcome {
        let mut diagnostics = Vec::new();
        self.walk_document(document, &mut diagnostics);
        debug!(
            diagnostics = diagnostics.len(),
            directed = document.directed;
            "Validated document"
        );
        ValidationOutcome::new(diagnostics)
    }

    fn walk_document(&self, document: &Document, diagnostics: &mut Vec<Diag>) {
        self.walk_graph(&document.root, document.directed, Scope::default(), diagnostics);
    }

    fn walk_graph<'d>(
        &self,
        graph: &'d Element,
        directed: bool,
        mut scope: Scope<'d>,
        diagnostics: &mut Vec<Diag>,
    ) {
        debug!(kind = graph.kind.name(), name:? = graph.name; "Visiting graph");

        for stmt in &graph.body {
            match stmt {
                Stmt::Assign(attribute) => {
                    let site = AttrSite::new(graph.kind, graph.assignments(), &scope);
                    self.check_attribute(&site, attribute, diagnostics);
                    scope.assign(attribute);
                }
                Stmt::Defaults(block) => {
                    // `graph[...]` applies to the enclosing graph, subgraph or cluster.
                    let kind = match block.target {
                        DefaultTarget::Graph => graph.kind,
                        target => target.element_kind(),
                    };
                    let site = AttrSite::new(kind, &block.attributes, &scope);
                    self.check_site(&site, diagnostics);
                    scope.apply(block);
                }
                Stmt::Element(element) if element.kind.is_graph_like() => {
                    self.walk_graph(element, directed, scope.clone(), diagnostics);
                }
                Stmt::Element(element) if element.kind == ElementKind::Node => {
                    self.walk_node(element, &scope, diagnostics);
                }
                Stmt::Element(element) => self.walk_edge(element, directed, &scope, diagnostics),
            }
        }
    }

    fn walk_node<'d>(&self, node: &'d Element, scope: &Scope<'d>, diagnostics: &mut Vec<Diag>) {
        debug!(name:? = node.name, attributes = node.attributes.len(); "Visiting node");
        let site = AttrSite::new(ElementKind::Node, &node.attributes, scope);
        self.check_site(&site, diagnostics);

        if let Some(nested) = &node.nested {
            self.walk_document(nested, diagnostics);
        }
    }

    fn walk_edge<'d>(
        &self,
        edge: &'d Element,
        directed: bool,
        scope: &Scope<'d>,
        diagnostics: &mut Vec<Diag>,
    ) {
        debug!(operators = edge.edge_ops.len(), attributes = edge.attributes.len(); "Visiting edge");
        if self.config.check_edge_direction {
            direction_validation::check_edge_ops(edge, directed, diagnostics);
        }
        let site = AttrSite::new(ElementKind::Edge, &edge.attributes, scope);
        self.check_site(&site, diagnostics);
    }

    fn check_site(&self, site: &AttrSite<'_, '_>, diagnostics: &mut Vec<Diag>) {
        for attribute in site.attributes() {
            self.check_attribute(site, attribute, diagnostics);
        }
    }

    /// Dispatches one attribute on its semantic type.
    fn check_attribute(&self, site: &AttrSite<'_, '_>, attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
        let attr_type = attribute_type(site.kind, &attribute.name);
        trace!(
            kind = site.kind.name(),
            name = attribute.name.as_str(),
            attr_type:? = attr_type;
            "Checking attribute"
        );

        match attr_type {
            AttrType::ArrowType => arrow_validation::check_arrow_type(self, attribute, diagnostics),
            AttrType::Color => color_validation::check_color(site, attribute, false, diagnostics),
            AttrType::ColorList => color_validation::check_color(site, attribute, true, diagnostics),
            AttrType::ColorScheme => color_validation::check_color_scheme(attribute, diagnostics),
            AttrType::Shape => range_validation::check_shape(attribute, diagnostics),
            AttrType::Style => style_validation::check_style(self, site, attribute, diagnostics),
            AttrType::Number(bound) => range_validation::check_number(attribute, bound, diagnostics),
            AttrType::Enum(domain) => range_validation::check_enum(attribute, domain, diagnostics),
            AttrType::Label => self.check_label(site, attribute, diagnostics),
            AttrType::Unchecked => {}
        }
    }

    fn check_label(&self, site: &AttrSite<'_, '_>, attribute: &Attribute, diagnostics: &mut Vec<Diag>) {
        if attribute.is_html() {
            if self.config.validate_html_labels {
                html_validation::check_html_label(attribute, diagnostics);
            }
        } else if site.kind == ElementKind::Node
            && self.config.validate_record_labels
            && is_record_shape(site.shape())
        {
            record_validation::check_record_label(attribute, diagnostics);
        }
    }
}

/// Outcome of validation, always carrying every diagnostic found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub diagnostics: Vec<Diag>,
}

impl ValidationOutcome {
    pub fn new(diagnostics: Vec<Diag>) -> Self {
        Self { diagnostics }
    }

    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == DiagSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diag> {
        self.diagnostics.iter().filter(|diag| diag.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diag> {
        self.diagnostics.iter().filter(|diag| diag.is_warning())
    }

    /// Returns the warnings if there are no errors, otherwise fails with
    /// every diagnostic.
    pub fn into_result(self) -> Result<Vec<Diag>, ValidationFailed> {
        if self.has_errors() {
            Err(ValidationFailed {
                errors: self.errors().count(),
                diagnostics: self.diagnostics,
            })
        } else {
            Ok(self.diagnostics)
        }
    }
}

/// Returned by [`ValidationOutcome::into_result`] when errors were found.
#[derive(Debug, Clone, thiserror::Error, Diagnostic)]
#[error("attribute validation found {errors} error(s)")]
#[diagnostic(code(dot_validator::validation_failed))]
pub struct ValidationFailed {
    pub errors: usize,
    /// Every diagnostic of the pass, warnings included.
    pub diagnostics: Vec<Diag>,
}
