//! Shared-neighbour similarity ranking

use crate::aggregate::AdjacencyMap;
use crate::components::GraphNode;
use crate::value_objects::NodeId;
use serde::Serialize;

/// Default number of results returned by [`find_similar_nodes`]
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// A node and the number of neighbours it shares with the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarNode<'a> {
    pub node: &'a GraphNode,
    pub shared_connections: usize,
}

/// Nodes sharing at least one neighbour with `target_id`, most shared first
///
/// The target itself is never returned. Equal counts keep the order of
/// `nodes`, so when ties straddle `limit` only the earliest tied nodes fit.
pub fn find_similar_nodes<'a>(
    adjacency: &AdjacencyMap,
    nodes: &'a [GraphNode],
    target_id: &NodeId,
    limit: usize,
) -> Vec<SimilarNode<'a>> {
    match adjacency.neighbors(target_id) {
        Some(neighbors) if !neighbors.is_empty() => {}
        _ => return Vec::new(),
    }

    let mut similar: Vec<SimilarNode<'a>> = nodes
        .iter()
        .filter(|node| &node.id != target_id)
        .filter_map(|node| {
            let shared_connections = adjacency.shared_neighbor_count(target_id, &node.id);
            (shared_connections > 0).then_some(SimilarNode {
                node,
                shared_connections,
            })
        })
        .collect();

    similar.sort_by(|a, b| b.shared_connections.cmp(&a.shared_connections));
    similar.truncate(limit);
    similar
}
