//! Direct connections of a single node, as listed on its detail card

use crate::components::{GraphEdge, GraphNode};
use crate::value_objects::NodeId;
use serde::Serialize;
use std::collections::HashMap;

/// One edge touching the focused node, seen from that node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeConnection<'a> {
    pub edge: &'a GraphEdge,
    /// Id at the far end of the edge
    pub other_id: &'a NodeId,
    /// Record at the far end, when the snapshot lists it
    pub other: Option<&'a GraphNode>,
}

/// Every edge touching `node_id`, strongest first, ties in edge order
pub fn node_connections<'a>(
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
    node_id: &NodeId,
) -> Vec<NodeConnection<'a>> {
    let by_id: HashMap<&NodeId, &GraphNode> = nodes.iter().map(|node| (&node.id, node)).collect();

    let mut connections: Vec<NodeConnection<'a>> = edges
        .iter()
        .filter_map(|edge| {
            let other_id = edge.other_end(node_id)?;
            Some(NodeConnection {
                edge,
                other_id,
                other: by_id.get(other_id).copied(),
            })
        })
        .collect();

    connections.sort_by(|a, b| b.edge.strength.cmp(&a.edge.strength));
    connections
}
