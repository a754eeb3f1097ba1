//! Graph aggregates
//!
//! The adjacency structure every analytic runs on, and the snapshot wrapper
//! that builds it once.

pub mod adjacency;
pub mod social_graph;

pub use adjacency::{build_adjacency_list, AdjacencyMap};
pub use social_graph::SocialGraph;
