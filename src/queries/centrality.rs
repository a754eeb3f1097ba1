//! Degree centrality and hub ranking

use crate::components::{GraphEdge, GraphNode};
use crate::value_objects::NodeId;
use indexmap::IndexMap;
use serde::Serialize;

/// Default number of hubs returned by [`find_hubs`]
pub const DEFAULT_HUB_LIMIT: usize = 10;

/// A node together with its degree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hub<'a> {
    pub node: &'a GraphNode,
    pub degree: usize,
}

/// Degree of every node id and every edge endpoint
///
/// Listed nodes start at zero, then each edge adds one to both endpoints,
/// including endpoints that are not in `nodes`. Keys keep first-seen order:
/// listed nodes first, then unlisted endpoints in edge order.
pub fn calculate_degree_centrality(nodes: &[GraphNode], edges: &[GraphEdge]) -> IndexMap<NodeId, usize> {
    let mut degrees: IndexMap<NodeId, usize> = nodes.iter().map(|node| (node.id.clone(), 0)).collect();

    for edge in edges {
        *degrees.entry(edge.source.clone()).or_insert(0) += 1;
        *degrees.entry(edge.target.clone()).or_insert(0) += 1;
    }

    degrees
}

/// The `limit` listed nodes with the highest degree, highest first
///
/// Equal degrees keep the order of `nodes`.
pub fn find_hubs<'a>(nodes: &'a [GraphNode], edges: &[GraphEdge], limit: usize) -> Vec<Hub<'a>> {
    let degrees = calculate_degree_centrality(nodes, edges);

    let mut hubs: Vec<Hub<'a>> = nodes
        .iter()
        .map(|node| Hub {
            node,
            degree: degrees.get(&node.id).copied().unwrap_or(0),
        })
        .collect();

    hubs.sort_by(|a, b| b.degree.cmp(&a.degree));
    hubs.truncate(limit);

    tracing::debug!(candidates = nodes.len(), returned = hubs.len(), "Ranked hubs");
    hubs
}
