//! Graph value objects
//!
//! Value objects are immutable types that represent concepts in the social circles
//! graph. They are compared by value rather than identity. Identifiers are nominal
//! wrappers so a book id can never be passed where a node id is expected.

use crate::errors::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a graph node, formatted as `"<type>:<entity_id>"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an opaque identifier. No format validation is performed.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the canonical id for an entity of the given type
    pub fn for_entity(node_type: NodeType, entity_id: u64) -> Self {
        Self(format!("{}:{}", node_type.as_str(), entity_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a graph edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a book record in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of entity a node can stand for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// A writer of one or more books in the collection
    Author,
    /// A publishing house
    Publisher,
    /// A bindery
    Binder,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::Author, NodeType::Publisher, NodeType::Binder];

    /// Get the wire representation of the node type
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Author => "author",
            NodeType::Publisher => "publisher",
            NodeType::Binder => "binder",
        }
    }
}

impl FromStr for NodeType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(NodeType::Author),
            "publisher" => Ok(NodeType::Publisher),
            "binder" => Ok(NodeType::Binder),
            other => Err(GraphError::UnknownNodeType(other.to_string())),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kinds of relationship inferred from shared books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Author published by a publisher
    Publisher,
    /// Two authors sharing a publisher
    SharedPublisher,
    /// Author whose books were bound by a binder
    Binder,
}

impl EdgeType {
    pub const ALL: [EdgeType; 3] = [EdgeType::Publisher, EdgeType::SharedPublisher, EdgeType::Binder];

    /// Get the wire representation of the edge type
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Publisher => "publisher",
            EdgeType::SharedPublisher => "shared_publisher",
            EdgeType::Binder => "binder",
        }
    }
}

impl FromStr for EdgeType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publisher" => Ok(EdgeType::Publisher),
            "shared_publisher" => Ok(EdgeType::SharedPublisher),
            "binder" => Ok(EdgeType::Binder),
            other => Err(GraphError::UnknownEdgeType(other.to_string())),
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the distance to another position
    pub fn distance_to(&self, other: &Position2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Position2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Width and height of a screen-space box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
