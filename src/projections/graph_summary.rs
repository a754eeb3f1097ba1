//! Graph summary statistics
//!
//! Aggregate density and degree figures for a snapshot.

use crate::components::{GraphEdge, GraphNode};
use crate::queries::calculate_degree_centrality;
use petgraph::algo::connected_components;
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};

/// Summary statistics of a node/edge snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Sum of degrees over the node count, two decimals
    pub avg_degree: f64,
    pub max_degree: usize,
    /// Edges over the maximum possible for the node count, three decimals
    pub density: f64,
    /// Components over listed nodes and edge endpoints
    pub connected_components: usize,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Compute [`GraphStats`]; division by zero is defined as `0`
pub fn calculate_graph_stats(nodes: &[GraphNode], edges: &[GraphEdge]) -> GraphStats {
    let total_nodes = nodes.len();
    let total_edges = edges.len();
    let degrees = calculate_degree_centrality(nodes, edges);

    let degree_sum: usize = degrees.values().sum();
    let max_degree = degrees.values().copied().max().unwrap_or(0);

    let avg_degree = if total_nodes == 0 {
        0.0
    } else {
        round_to(degree_sum as f64 / total_nodes as f64, 2)
    };

    let density = if total_nodes < 2 {
        0.0
    } else {
        let possible = (total_nodes * (total_nodes - 1)) as f64;
        round_to(2.0 * total_edges as f64 / possible, 3)
    };

    GraphStats {
        total_nodes,
        total_edges,
        avg_degree,
        max_degree,
        density,
        connected_components: count_components(nodes, edges),
    }
}

fn count_components(nodes: &[GraphNode], edges: &[GraphEdge]) -> usize {
    let mut graph: UnGraphMap<&str, ()> = UnGraphMap::new();
    for node in nodes {
        graph.add_node(node.id.as_str());
    }
    for edge in edges {
        graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }
    connected_components(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{EdgeType, NodeId, NodeType};

    fn nodes(names: &[&str]) -> Vec<GraphNode> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut node = GraphNode::new(NodeType::Author, i as u64, *name);
                node.id = NodeId::from(*name);
                node
            })
            .collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<GraphEdge> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (s, t))| GraphEdge::new(format!("e{i}"), *s, *t, EdgeType::SharedPublisher, 1))
            .collect()
    }

    #[test]
    fn test_linear_graph_stats() {
        let stats = calculate_graph_stats(
            &nodes(&["A", "B", "C", "D"]),
            &edges(&[("A", "B"), ("B", "C"), ("C", "D")]),
        );
        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.total_edges, 3);
        assert_eq!(stats.avg_degree, 1.5);
        assert_eq!(stats.max_degree, 2);
        assert_eq!(stats.density, 0.5);
        assert_eq!(stats.connected_components, 1);
    }

    #[test]
    fn test_triangle_is_fully_dense() {
        let stats = calculate_graph_stats(&nodes(&["A", "B", "C"]), &edges(&[("A", "B"), ("B", "C"), ("C", "A")]));
        assert_eq!(stats.density, 1.0);
        assert_eq!(stats.avg_degree, 2.0);
    }

    #[test]
    fn test_isolated_node_adds_component() {
        let stats = calculate_graph_stats(
            &nodes(&["A", "B", "C", "D"]),
            &edges(&[("A", "B"), ("B", "C"), ("C", "A")]),
        );
        assert_eq!(stats.connected_components, 2);
        assert_eq!(stats.density, 0.5);
    }

    #[test]
    fn test_empty_and_single_node_graphs() {
        assert_eq!(calculate_graph_stats(&[], &[]), GraphStats::default());

        let single = calculate_graph_stats(&nodes(&["A"]), &[]);
        assert_eq!(single.total_nodes, 1);
        assert_eq!(single.density, 0.0);
        assert_eq!(single.avg_degree, 0.0);
        assert_eq!(single.connected_components, 1);
    }

    #[test]
    fn test_rounding() {
        // 3 nodes, 1 edge: avg 2/3, density 1/3
        let stats = calculate_graph_stats(&nodes(&["A", "B", "C"]), &edges(&[("A", "B")]));
        assert_eq!(stats.avg_degree, 0.67);
        assert_eq!(stats.density, 0.333);
    }
}
