//! Bounded substring search over node names

use crate::components::GraphNode;

/// Default cap on search results
pub const MAX_FILTER_RESULTS: usize = 20;

/// Nodes whose name contains `query`, case-insensitively, in input order
///
/// A missing or blank query applies no filter and returns the first `limit`
/// nodes.
pub fn filter_nodes_by_query<'a>(nodes: &'a [GraphNode], query: Option<&str>, limit: usize) -> Vec<&'a GraphNode> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

    if needle.is_empty() {
        return nodes.iter().take(limit).collect();
    }

    nodes
        .iter()
        .filter(|node| node.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
