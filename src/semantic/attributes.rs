//! Semantic types of the attributes this crate checks.
//!
//! [`attribute_type`] is the single place that decides how a value is read.
//! Adding an attribute means adding an arm there; attributes that fall
//! through to [`AttrType::Unchecked`] are accepted as-is.

use crate::ast::ElementKind;
use crate::parser::number::NumberKind;

/// A closed enumeration domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDomain {
    /// The type name used in messages, e.g. `dirType`.
    pub type_name: &'static str,
    pub values: &'static [&'static str],
}

pub const DIR_TYPE: EnumDomain = EnumDomain {
    type_name: "dirType",
    values: &["forward", "back", "both", "none"],
};

pub const RANK_TYPE: EnumDomain = EnumDomain {
    type_name: "rankType",
    values: &["same", "min", "source", "max", "sink"],
};

pub const RANKDIR: EnumDomain = EnumDomain {
    type_name: "rankdir",
    values: &["TB", "LR", "BT", "RL"],
};

pub const CLUSTER_MODE: EnumDomain = EnumDomain {
    type_name: "clusterMode",
    values: &["local", "global", "none"],
};

pub const OUTPUT_MODE: EnumDomain = EnumDomain {
    type_name: "outputMode",
    values: &["breadthfirst", "nodesfirst", "edgesfirst"],
};

pub const PAGEDIR: EnumDomain = EnumDomain {
    type_name: "pagedir",
    values: &["BL", "BR", "TL", "TR", "RB", "RT", "LB", "LT"],
};

/// Lower bound of a numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Double(f64),
}

impl Bound {
    pub fn kind(self) -> NumberKind {
        match self {
            Self::Int(_) => NumberKind::Int,
            Self::Double(_) => NumberKind::Double,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(min) => min as f64,
            Self::Double(min) => min,
        }
    }

    /// The bound as printed in messages: `0` for ints, `0.0` for doubles.
    pub fn display(self) -> String {
        match self {
            Self::Int(min) => min.to_string(),
            Self::Double(min) => format!("{min:?}"),
        }
    }
}

/// How an attribute value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrType {
    /// `arrowhead` / `arrowtail`.
    ArrowType,
    /// A single color.
    Color,
    /// A weighted color list.
    ColorList,
    /// `colorscheme`.
    ColorScheme,
    /// A node shape name.
    Shape,
    /// A style list.
    Style,
    /// A label: HTML-like, record-based, or plain text.
    Label,
    /// A number with an inclusive lower bound.
    Number(Bound),
    /// One of a fixed set of words.
    Enum(EnumDomain),
    /// Not interpreted.
    Unchecked,
}

/// Decides the semantic type of `name` on an element of `kind`.
pub fn attribute_type(kind: ElementKind, name: &str) -> AttrType {
    use ElementKind::{Cluster, Edge, Graph, Node, Subgraph};

    match (name, kind) {
        ("arrowhead" | "arrowtail", Edge) => AttrType::ArrowType,

        ("arrowsize", Edge) => AttrType::Number(Bound::Double(0.0)),
        ("labelfontsize", Edge) => AttrType::Number(Bound::Double(1.0)),
        ("weight", Edge) => AttrType::Number(Bound::Double(0.0)),
        ("penwidth", Cluster | Node | Edge) => AttrType::Number(Bound::Double(0.0)),
        ("fontsize", Graph | Cluster | Node | Edge) => AttrType::Number(Bound::Double(1.0)),
        ("distortion" | "skew", Node) => AttrType::Number(Bound::Double(-100.0)),
        ("width", Node) => AttrType::Number(Bound::Double(0.01)),
        ("height", Node) => AttrType::Number(Bound::Double(0.02)),
        ("nodesep", Graph) => AttrType::Number(Bound::Double(0.02)),
        ("sides", Node) => AttrType::Number(Bound::Int(0)),
        ("peripheries", Node | Cluster) => AttrType::Number(Bound::Int(0)),
        ("minlen", Edge) => AttrType::Number(Bound::Int(0)),

        ("dir", Edge) => AttrType::Enum(DIR_TYPE),
        ("rank", Subgraph | Cluster) => AttrType::Enum(RANK_TYPE),
        ("rankdir", Graph) => AttrType::Enum(RANKDIR),
        ("clusterrank", Graph) => AttrType::Enum(CLUSTER_MODE),
        ("outputorder", Graph) => AttrType::Enum(OUTPUT_MODE),
        ("pagedir", Graph) => AttrType::Enum(PAGEDIR),

        ("shape", Node) => AttrType::Shape,
        ("style", Graph | Cluster | Node | Edge) => AttrType::Style,

        ("colorscheme", Graph | Cluster | Node | Edge) => AttrType::ColorScheme,
        ("bgcolor", Graph | Cluster) => AttrType::ColorList,
        ("color", Edge) => AttrType::ColorList,
        ("color", Node | Cluster) => AttrType::Color,
        ("fillcolor", Node | Cluster) => AttrType::ColorList,
        ("fillcolor", Edge) => AttrType::Color,
        ("fontcolor", Graph | Cluster | Node | Edge) => AttrType::Color,
        ("pencolor", Cluster) => AttrType::Color,
        ("labelfontcolor", Edge) => AttrType::Color,

        ("label", Graph | Cluster | Node | Edge) => AttrType::Label,
        ("xlabel", Node | Edge) => AttrType::Label,
        ("headlabel" | "taillabel", Edge) => AttrType::Label,

        _ => AttrType::Unchecked,
    }
}

/// Node shapes drawn as polygons.
pub const POLYGON_SHAPES: &[&str] = &[
    "box", "polygon", "ellipse", "oval", "circle", "point", "egg", "triangle", "plaintext",
    "plain", "diamond", "trapezium", "parallelogram", "house", "pentagon", "hexagon", "septagon",
    "octagon", "doublecircle", "doubleoctagon", "tripleoctagon", "invtriangle", "invtrapezium",
    "invhouse", "Mdiamond", "Msquare", "Mcircle", "rect", "rectangle", "square", "star", "none",
    "underline", "cylinder", "note", "tab", "folder", "box3d", "component", "promoter", "cds",
    "terminator", "utr", "primersite", "restrictionsite", "fivepoverhang", "threepoverhang",
    "noverhang", "assembly", "signature", "insulator", "ribosite", "rnastab", "proteasesite",
    "proteinstab", "rpromoter", "rarrow", "larrow", "lpromoter",
];

/// Node shapes whose label is a record label.
pub const RECORD_SHAPES: &[&str] = &["record", "Mrecord"];

/// Shapes that can render the `striped` style.
pub const STRIPED_SHAPES: &[&str] = &["box", "rect", "rectangle", "square"];

/// The shape a node has when none is set.
pub const DEFAULT_SHAPE: &str = "ellipse";

fn contains_ignore_case(set: &[&str], name: &str) -> bool {
    set.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Returns true if `name` is a known node shape.
pub fn is_known_shape(name: &str) -> bool {
    contains_ignore_case(POLYGON_SHAPES, name) || contains_ignore_case(RECORD_SHAPES, name)
}

pub fn is_record_shape(name: &str) -> bool {
    contains_ignore_case(RECORD_SHAPES, name)
}

pub fn supports_stripes(name: &str) -> bool {
    contains_ignore_case(STRIPED_SHAPES, name)
}
