//! Graph snapshot as fetched once per view

use super::{GraphEdge, GraphNode};
use crate::errors::GraphResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Totals and provenance reported alongside a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotMeta {
    pub total_books: u32,
    pub total_authors: u32,
    pub total_publishers: u32,
    pub total_binders: u32,
    pub total_edges: u32,
    /// Earliest and latest publication year covered
    pub date_range: Option<[i32; 2]>,
    pub generated_at: Option<DateTime<Utc>>,
    /// The backend capped the result set
    pub truncated: bool,
}

/// Immutable node/edge snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub meta: SnapshotMeta,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            nodes,
            edges,
            meta: SnapshotMeta::default(),
        }
    }

    /// Decode a snapshot from its JSON wire form
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        snapshot.log_loaded();
        Ok(snapshot)
    }

    /// Decode a snapshot from a JSON stream
    pub fn from_reader<R: Read>(reader: R) -> GraphResult<Self> {
        let snapshot: GraphSnapshot = serde_json::from_reader(reader)?;
        snapshot.log_loaded();
        Ok(snapshot)
    }

    fn log_loaded(&self) {
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Loaded graph snapshot"
        );
        if self.meta.truncated {
            tracing::warn!(
                nodes = self.nodes.len(),
                edges = self.edges.len(),
                "Graph snapshot was truncated by the backend"
            );
        }
    }
}
