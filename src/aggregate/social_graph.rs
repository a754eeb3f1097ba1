//! Snapshot paired with its adjacency structure
//!
//! Building the adjacency once per snapshot lets path and similarity queries
//! share it. The snapshot is never mutated; a new snapshot means a new
//! `SocialGraph`.

use super::{build_adjacency_list, AdjacencyMap};
use crate::components::{GraphNode, GraphSnapshot};
use crate::projections::{calculate_graph_stats, GraphStats};
use crate::queries::{self, Hub, NodeConnection, SimilarNode};
use crate::value_objects::NodeId;

#[derive(Debug, Clone)]
pub struct SocialGraph {
    snapshot: GraphSnapshot,
    adjacency: AdjacencyMap,
}

impl SocialGraph {
    pub fn new(snapshot: GraphSnapshot) -> Self {
        let adjacency = build_adjacency_list(&snapshot.edges);
        Self { snapshot, adjacency }
    }

    pub fn snapshot(&self) -> &GraphSnapshot {
        &self.snapshot
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.snapshot.nodes.iter().find(|node| &node.id == id)
    }

    pub fn shortest_path(&self, start: &NodeId, end: &NodeId) -> Option<Vec<NodeId>> {
        queries::find_shortest_path(&self.adjacency, start, end)
    }

    pub fn degrees_of_separation(&self, a: &NodeId, b: &NodeId) -> i64 {
        queries::degrees_of_separation(&self.adjacency, a, b)
    }

    pub fn hubs(&self, limit: usize) -> Vec<Hub<'_>> {
        queries::find_hubs(&self.snapshot.nodes, &self.snapshot.edges, limit)
    }

    pub fn similar_to(&self, target: &NodeId, limit: usize) -> Vec<SimilarNode<'_>> {
        queries::find_similar_nodes(&self.adjacency, &self.snapshot.nodes, target, limit)
    }

    pub fn connections(&self, id: &NodeId) -> Vec<NodeConnection<'_>> {
        queries::node_connections(&self.snapshot.nodes, &self.snapshot.edges, id)
    }

    pub fn stats(&self) -> GraphStats {
        calculate_graph_stats(&self.snapshot.nodes, &self.snapshot.edges)
    }
}

impl From<GraphSnapshot> for SocialGraph {
    fn from(snapshot: GraphSnapshot) -> Self {
        Self::new(snapshot)
    }
}
