//! Arrow type grammar: up to four shape clauses `[o][l|r]<shape>`.

use super::{ParseResult, SyntaxError, char_span, describe_at};
use crate::ast::Span;

/// Maximum number of clauses a single arrow type may combine.
pub const MAX_CLAUSES: usize = 4;

/// Current primitive arrow shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveShape {
    Box,
    Crow,
    Curve,
    ICurve,
    Diamond,
    Dot,
    Inv,
    None,
    Normal,
    Tee,
    Vee,
}

impl PrimitiveShape {
    pub const ALL: [PrimitiveShape; 11] = [
        Self::Box,
        Self::Crow,
        Self::Curve,
        Self::ICurve,
        Self::Diamond,
        Self::Dot,
        Self::Inv,
        Self::None,
        Self::Normal,
        Self::Tee,
        Self::Vee,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Crow => "crow",
            Self::Curve => "curve",
            Self::ICurve => "icurve",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::Inv => "inv",
            Self::None => "none",
            Self::Normal => "normal",
            Self::Tee => "tee",
            Self::Vee => "vee",
        }
    }

    /// Whether the `o` modifier may be applied.
    pub fn accepts_open(self) -> bool {
        !matches!(
            self,
            Self::Crow | Self::Curve | Self::ICurve | Self::None | Self::Tee | Self::Vee
        )
    }

    /// Whether the `l`/`r` modifiers may be applied.
    pub fn accepts_side(self) -> bool {
        !matches!(self, Self::Dot | Self::None)
    }
}

/// Shape names kept for compatibility with old Graphviz releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeprecatedShape {
    EDiamond,
    Open,
    HalfOpen,
    Empty,
    InvEmpty,
}

impl DeprecatedShape {
    pub const ALL: [DeprecatedShape; 5] = [
        Self::EDiamond,
        Self::Open,
        Self::HalfOpen,
        Self::Empty,
        Self::InvEmpty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::EDiamond => "ediamond",
            Self::Open => "open",
            Self::HalfOpen => "halfopen",
            Self::Empty => "empty",
            Self::InvEmpty => "invempty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Primitive(PrimitiveShape),
    Deprecated(DeprecatedShape),
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitive(shape) => shape.name(),
            Self::Deprecated(shape) => shape.name(),
        }
    }
}

/// The `l` / `r` clipping modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn modifier(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }
}

/// One `[o][l|r]<shape>` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeClause {
    pub open: bool,
    pub side: Option<Side>,
    pub shape: ShapeKind,
    /// Value-local span of the shape name, modifiers excluded.
    pub shape_span: Span,
}

/// A parsed arrow type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowClauses {
    pub clauses: Vec<ShapeClause>,
}

impl ArrowClauses {
    /// The clause written last in the value.
    pub fn last(&self) -> Option<&ShapeClause> {
        self.clauses.last()
    }
}

/// Parses an arrow type value.
pub fn parse_arrow_type(text: &str) -> ParseResult<ArrowClauses> {
    if text.is_empty() {
        return Err(SyntaxError::new(
            0..0,
            "No viable alternative at input '<EOF>'.",
        ));
    }

    let mut clauses = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let clause = parse_clause(text, pos).ok_or_else(|| {
            SyntaxError::new(
                char_span(text, pos),
                format!("No viable alternative at character '{}'.", describe_at(text, pos)),
            )
        })?;
        pos = clause.shape_span.end;
        clauses.push(clause);
    }

    if clauses.len() > MAX_CLAUSES {
        return Err(SyntaxError::new(
            0..text.len(),
            format!("At most {MAX_CLAUSES} arrow shapes may be combined."),
        ));
    }

    Ok(ArrowClauses { clauses })
}

fn parse_clause(text: &str, start: usize) -> Option<ShapeClause> {
    let rest = &text[start..];

    // Bare names first, so `open` is not read as `o` + `pen`.
    if let Some(shape) = longest_shape(rest, true) {
        return Some(ShapeClause {
            open: false,
            side: None,
            shape,
            shape_span: start..start + shape.name().len(),
        });
    }

    let mut pos = start;
    let open = text[pos..].starts_with('o');
    if open {
        pos += 1;
    }
    let side = match text[pos..].chars().next() {
        Some('l') => Some(Side::Left),
        Some('r') => Some(Side::Right),
        _ => None,
    };
    if side.is_some() {
        pos += 1;
    }
    let shape = longest_shape(&text[pos..], false)?;
    Some(ShapeClause {
        open,
        side,
        shape,
        shape_span: pos..pos + shape.name().len(),
    })
}

fn longest_shape(input: &str, with_deprecated: bool) -> Option<ShapeKind> {
    let primitives = PrimitiveShape::ALL.into_iter().map(ShapeKind::Primitive);
    let deprecated = DeprecatedShape::ALL
        .into_iter()
        .map(ShapeKind::Deprecated)
        .filter(|_| with_deprecated);
    primitives
        .chain(deprecated)
        .filter(|shape| input.starts_with(shape.name()))
        .max_by_key(|shape| shape.name().len())
}
