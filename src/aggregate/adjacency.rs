//! Undirected adjacency structure built from an edge list

use crate::components::GraphEdge;
use crate::value_objects::NodeId;
use indexmap::{IndexMap, IndexSet};

/// Mapping from node id to the set of its neighbours
///
/// Symmetric: `b` is a neighbour of `a` exactly when `a` is a neighbour of `b`.
/// Parallel edges collapse, and a self-loop makes a node its own neighbour.
/// Iteration follows first appearance in the edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbors: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an undirected connection between `a` and `b`
    pub fn connect(&mut self, a: &NodeId, b: &NodeId) {
        self.neighbors.entry(a.clone()).or_default().insert(b.clone());
        self.neighbors.entry(b.clone()).or_default().insert(a.clone());
    }

    /// Neighbours of `id`, or `None` if the id never appeared in an edge
    pub fn neighbors(&self, id: &NodeId) -> Option<&IndexSet<NodeId>> {
        self.neighbors.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Number of distinct ids with at least one edge
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &IndexSet<NodeId>)> {
        self.neighbors.iter()
    }

    /// Number of nodes adjacent to both `a` and `b`
    pub fn shared_neighbor_count(&self, a: &NodeId, b: &NodeId) -> usize {
        match (self.neighbors.get(a), self.neighbors.get(b)) {
            (Some(left), Some(right)) => left.intersection(right).count(),
            _ => 0,
        }
    }
}

/// Build the adjacency structure for `edges` in O(E)
pub fn build_adjacency_list(edges: &[GraphEdge]) -> AdjacencyMap {
    let mut adjacency = AdjacencyMap::new();
    for edge in edges {
        adjacency.connect(&edge.source, &edge.target);
    }
    tracing::debug!(
        edges = edges.len(),
        nodes = adjacency.len(),
        "Built adjacency list"
    );
    adjacency
}
