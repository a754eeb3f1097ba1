//! Property tests for the graph analytics and card placement

use proptest::prelude::*;
use social_circles_graph::{
    build_adjacency_list, calculate_degree_centrality, calculate_graph_stats, degrees_of_separation,
    find_hubs, find_shortest_path, find_similar_nodes, get_best_card_position, EdgeType, GraphEdge, GraphNode,
    NodeId, NodeType, Position2D, Size,
};

const MAX_NODES: usize = 12;

fn node_name(i: usize) -> String {
    format!("author:{i}")
}

fn nodes(count: usize) -> Vec<GraphNode> {
    (0..count)
        .map(|i| GraphNode::new(NodeType::Author, i as u64, format!("Author {i}")))
        .collect()
}

/// Node count plus an edge list over those nodes, self-loops and repeats included
fn arb_graph() -> impl Strategy<Value = (usize, Vec<GraphEdge>)> {
    (1..=MAX_NODES).prop_flat_map(|count| {
        let pair = (0..count, 0..count);
        prop::collection::vec(pair, 0..30).prop_map(move |pairs| {
            let edges = pairs
                .into_iter()
                .enumerate()
                .map(|(i, (s, t))| {
                    GraphEdge::new(format!("e{i}"), node_name(s), node_name(t), EdgeType::SharedPublisher, 1)
                })
                .collect();
            (count, edges)
        })
    })
}

/// A simple graph: no self-loops, no repeated pairs
fn arb_simple_graph() -> impl Strategy<Value = (usize, Vec<GraphEdge>)> {
    arb_graph().prop_map(|(count, edges)| {
        let mut seen = std::collections::HashSet::new();
        let edges = edges
            .into_iter()
            .filter(|e| !e.is_self_loop())
            .filter(|e| {
                let key = if e.source < e.target {
                    (e.source.clone(), e.target.clone())
                } else {
                    (e.target.clone(), e.source.clone())
                };
                seen.insert(key)
            })
            .collect();
        (count, edges)
    })
}

proptest! {
    #[test]
    fn separation_is_symmetric((count, edges) in arb_graph(), a in 0..MAX_NODES, b in 0..MAX_NODES) {
        let adjacency = build_adjacency_list(&edges);
        let a = NodeId::from(node_name(a % count));
        let b = NodeId::from(node_name(b % count));

        prop_assert_eq!(
            degrees_of_separation(&adjacency, &a, &b),
            degrees_of_separation(&adjacency, &b, &a)
        );
        prop_assert_eq!(
            find_shortest_path(&adjacency, &a, &b).map(|p| p.len()),
            find_shortest_path(&adjacency, &b, &a).map(|p| p.len())
        );
    }

    #[test]
    fn path_and_separation_agree((count, edges) in arb_graph(), a in 0..MAX_NODES, b in 0..MAX_NODES) {
        let adjacency = build_adjacency_list(&edges);
        let a = NodeId::from(node_name(a % count));
        let b = NodeId::from(node_name(b % count));

        prop_assert_eq!(degrees_of_separation(&adjacency, &a, &a), 0);
        match find_shortest_path(&adjacency, &a, &b) {
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&a));
                prop_assert_eq!(path.last(), Some(&b));
                prop_assert_eq!(degrees_of_separation(&adjacency, &a, &b), path.len() as i64 - 1);
                for step in path.windows(2) {
                    prop_assert!(adjacency.neighbors(&step[0]).unwrap().contains(&step[1]));
                }
            }
            None if a != b => prop_assert_eq!(degrees_of_separation(&adjacency, &a, &b), -1),
            None => {}
        }
    }

    #[test]
    fn average_degree_matches_degree_sum((count, edges) in arb_graph()) {
        let nodes = nodes(count);
        let stats = calculate_graph_stats(&nodes, &edges);
        let sum: usize = calculate_degree_centrality(&nodes, &edges).values().sum();
        prop_assert!((stats.avg_degree * count as f64 - sum as f64).abs() <= 0.005 * count as f64 + 1e-9);
        prop_assert_eq!(sum, 2 * edges.len());
    }

    #[test]
    fn density_is_bounded((count, edges) in arb_simple_graph()) {
        let stats = calculate_graph_stats(&nodes(count), &edges);
        prop_assert!(stats.density >= 0.0);
        prop_assert!(stats.density <= 1.0);
    }

    #[test]
    fn hubs_are_non_increasing((count, edges) in arb_graph(), limit in 0..15usize) {
        let nodes = nodes(count);
        let hubs = find_hubs(&nodes, &edges, limit);
        prop_assert_eq!(hubs.len(), limit.min(count));
        prop_assert!(hubs.windows(2).all(|w| w[0].degree >= w[1].degree));
    }

    #[test]
    fn similar_nodes_exclude_target((count, edges) in arb_graph(), target in 0..MAX_NODES) {
        let nodes = nodes(count);
        let adjacency = build_adjacency_list(&edges);
        let target = NodeId::from(node_name(target % count));
        let similar = find_similar_nodes(&adjacency, &nodes, &target, 5);

        prop_assert!(similar.len() <= 5);
        prop_assert!(similar.iter().all(|s| s.node.id != target));
        prop_assert!(similar.iter().all(|s| s.shared_connections > 0));
        prop_assert!(similar.windows(2).all(|w| w[0].shared_connections >= w[1].shared_connections));
    }

    #[test]
    fn card_stays_inside_viewport(
        card_w in 50.0..400.0f64,
        card_h in 50.0..400.0f64,
        extra_w in 0.0..1500.0f64,
        extra_h in 0.0..1500.0f64,
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
        margin in 0.0..40.0f64,
    ) {
        let viewport = Size::new(card_w + 2.0 * margin + extra_w, card_h + 2.0 * margin + extra_h);
        let node = Position2D::new(fx * viewport.width, fy * viewport.height);
        let placement = get_best_card_position(node, Size::new(card_w, card_h), viewport, margin);

        prop_assert!(placement.position.x >= margin);
        prop_assert!(placement.position.y >= margin);
        prop_assert!(placement.position.x <= viewport.width - card_w - margin + 1e-9);
        prop_assert!(placement.position.y <= viewport.height - card_h - margin + 1e-9);
    }
}
