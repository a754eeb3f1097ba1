//! Graph queries
//!
//! Queries provide read-only access to graph data. Every query is a pure
//! function of its inputs and reports absence with a sentinel (`None`, `-1` or
//! an empty list) rather than an error.

pub mod centrality;
pub mod connections;
pub mod path;
pub mod search;
pub mod similarity;
pub mod visibility;

pub use centrality::{calculate_degree_centrality, find_hubs, Hub, DEFAULT_HUB_LIMIT};
pub use connections::{node_connections, NodeConnection};
pub use path::{degrees_of_separation, find_shortest_path};
pub use search::{filter_nodes_by_query, MAX_FILTER_RESULTS};
pub use similarity::{find_similar_nodes, SimilarNode, DEFAULT_SIMILAR_LIMIT};
pub use visibility::{
    get_visible_element_ids, RenderedEdge, RenderedElement, RenderedGraph, VisibilityFilter, VisibleElements,
};
