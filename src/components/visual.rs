//! Visual encoding tables for graph rendering
//!
//! Styling is data, not logic: each table maps a type and a secondary attribute
//! to a style, and every node type carries a `"default"` row used when the
//! attribute is missing or unrecognized.

use crate::value_objects::{EdgeType, NodeType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key of the fallback row in [`NODE_PALETTE`]
pub const DEFAULT_STYLE_KEY: &str = "default";

/// Node diameter before scaling by book count
pub const BASE_NODE_SIZE: f64 = 30.0;
/// Growth of the node diameter per square root of book count
pub const NODE_SIZE_SCALE: f64 = 6.0;
/// Edge width before scaling by strength
pub const BASE_EDGE_WIDTH: f64 = 1.0;
/// Growth of the edge width per square root of strength
pub const EDGE_WIDTH_SCALE: f64 = 1.5;

/// An opaque RGB colour, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a colour from a packed `0xRRGGBB` value
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid colour '{s}'")))
    }
}

/// Node outline understood by the rendering widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Ellipse,
    Rectangle,
    Diamond,
}

/// Edge stroke pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Rendering style of one edge type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: Color,
    pub line_style: LineStyle,
    pub opacity: f64,
}

/// `(type, era or tier, colour)`
pub const NODE_PALETTE: &[(NodeType, &str, Color)] = &[
    (NodeType::Author, "pre_romantic", Color::hex(0x8b4513)),
    (NodeType::Author, "romantic", Color::hex(0xb8860b)),
    (NodeType::Author, "victorian", Color::hex(0x2e7d32)),
    (NodeType::Author, "edwardian", Color::hex(0x1565c0)),
    (NodeType::Author, "post_1910", Color::hex(0x6a1b9a)),
    (NodeType::Author, DEFAULT_STYLE_KEY, Color::hex(0x5d4037)),
    (NodeType::Publisher, "TIER_1", Color::hex(0xc62828)),
    (NodeType::Publisher, "TIER_2", Color::hex(0xef6c00)),
    (NodeType::Publisher, "TIER_3", Color::hex(0xf9a825)),
    (NodeType::Publisher, DEFAULT_STYLE_KEY, Color::hex(0x9e9e9e)),
    (NodeType::Binder, "TIER_1", Color::hex(0x4a148c)),
    (NodeType::Binder, "TIER_2", Color::hex(0x7b1fa2)),
    (NodeType::Binder, "TIER_3", Color::hex(0xab47bc)),
    (NodeType::Binder, DEFAULT_STYLE_KEY, Color::hex(0x8e8e8e)),
];

/// `(type, shape)`
pub const NODE_SHAPES: &[(NodeType, Shape)] = &[
    (NodeType::Author, Shape::Ellipse),
    (NodeType::Publisher, Shape::Rectangle),
    (NodeType::Binder, Shape::Diamond),
];

/// `(type, style)`; binder edges are dashed and fainter than the publisher family
pub const EDGE_PALETTE: &[(EdgeType, EdgeStyle)] = &[
    (
        EdgeType::Publisher,
        EdgeStyle {
            color: Color::hex(0xd32f2f),
            line_style: LineStyle::Solid,
            opacity: 0.8,
        },
    ),
    (
        EdgeType::SharedPublisher,
        EdgeStyle {
            color: Color::hex(0xe57373),
            line_style: LineStyle::Solid,
            opacity: 0.8,
        },
    ),
    (
        EdgeType::Binder,
        EdgeStyle {
            color: Color::hex(0x7b1fa2),
            line_style: LineStyle::Dashed,
            opacity: 0.5,
        },
    ),
];

/// Colour for a node type and its era/tier, falling back to the type's default row
pub fn node_color(node_type: NodeType, style_key: Option<&str>) -> Color {
    let lookup = |key: &str| {
        NODE_PALETTE
            .iter()
            .find(|(t, k, _)| *t == node_type && *k == key)
            .map(|(_, _, color)| *color)
    };

    style_key
        .and_then(lookup)
        .or_else(|| lookup(DEFAULT_STYLE_KEY))
        .unwrap_or(Color::hex(0x9e9e9e))
}

pub fn node_shape(node_type: NodeType) -> Shape {
    NODE_SHAPES
        .iter()
        .find(|(t, _)| *t == node_type)
        .map(|(_, shape)| *shape)
        .unwrap_or(Shape::Ellipse)
}

pub fn edge_style(edge_type: EdgeType) -> EdgeStyle {
    EDGE_PALETTE
        .iter()
        .find(|(t, _)| *t == edge_type)
        .map(|(_, style)| *style)
        .unwrap_or(EdgeStyle {
            color: Color::hex(0x9e9e9e),
            line_style: LineStyle::Solid,
            opacity: 0.8,
        })
}

/// Node diameter; strictly increasing in `book_count`
pub fn node_size(book_count: u32) -> f64 {
    BASE_NODE_SIZE + f64::from(book_count).sqrt() * NODE_SIZE_SCALE
}

/// Edge width; strictly increasing in `strength`
pub fn edge_width(strength: u32) -> f64 {
    BASE_EDGE_WIDTH + f64::from(strength).sqrt() * EDGE_WIDTH_SCALE
}
