//! Edge records of the social circles graph

use crate::value_objects::{BookId, EdgeId, EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// A relationship between two nodes inferred from shared books
///
/// `source` and `target` may name nodes missing from the snapshot node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    /// Relative weight, at least 1
    pub strength: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_book_ids: Option<Vec<BookId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        edge_type: EdgeType,
        strength: u32,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type,
            strength,
            evidence: None,
            shared_book_ids: None,
            start_year: None,
            end_year: None,
        }
    }

    /// Whether `node_id` is one of the endpoints
    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }

    /// The endpoint opposite `node_id`, if the edge touches it
    pub fn other_end(&self, node_id: &NodeId) -> Option<&NodeId> {
        if &self.source == node_id {
            Some(&self.target)
        } else if &self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
