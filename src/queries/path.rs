//! Shortest path and hop-count queries

use crate::aggregate::AdjacencyMap;
use crate::value_objects::NodeId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first shortest path from `start` to `end`, inclusive of both ends
///
/// A node is always reachable from itself, edges or not. Otherwise returns
/// `None` when either id is absent from the adjacency map or the two are
/// disconnected. Among several shortest paths the one found first in
/// neighbour order is returned.
pub fn find_shortest_path(adjacency: &AdjacencyMap, start: &NodeId, end: &NodeId) -> Option<Vec<NodeId>> {
    if start == end {
        return Some(vec![start.clone()]);
    }
    if !adjacency.contains(start) || !adjacency.contains(end) {
        return None;
    }

    let mut predecessors: HashMap<&NodeId, &NodeId> = HashMap::new();
    let mut visited: HashSet<&NodeId> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = adjacency.neighbors(current) else {
            continue;
        };
        for neighbor in neighbors {
            if !visited.insert(neighbor) {
                continue;
            }
            predecessors.insert(neighbor, current);
            if neighbor == end {
                return Some(reconstruct(&predecessors, start, end));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct<'a>(
    predecessors: &HashMap<&'a NodeId, &'a NodeId>,
    start: &NodeId,
    end: &'a NodeId,
) -> Vec<NodeId> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match predecessors.get(current) {
            Some(&previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Hop count between `a` and `b`: `0` for the same id, `-1` when unreachable
/// or unknown
pub fn degrees_of_separation(adjacency: &AdjacencyMap, a: &NodeId, b: &NodeId) -> i64 {
    if a == b {
        return 0;
    }
    match find_shortest_path(adjacency, a, b) {
        Some(path) => path.len() as i64 - 1,
        None => -1,
    }
}
