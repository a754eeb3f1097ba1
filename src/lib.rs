//! Social circles graph engine
//!
//! Analytics and visual encoding for the relationships among authors,
//! publishers and binders that share books in a collection. A snapshot of
//! nodes and edges goes in; paths, centrality, similarity, summary statistics,
//! styled render elements, visibility sets, layout profiles and card
//! placements come out. Nothing here performs I/O beyond optional snapshot and
//! configuration decoding, and nothing mutates its inputs.

pub mod aggregate;
pub mod components;
pub mod config;
pub mod errors;
pub mod layout;
pub mod projections;
pub mod queries;
pub mod transformations;
pub mod value_objects;

// Re-export main types
pub use aggregate::{build_adjacency_list, AdjacencyMap, SocialGraph};
pub use components::{GraphEdge, GraphNode, GraphSnapshot, SnapshotMeta};
pub use config::EngineConfig;
pub use errors::{GraphError, GraphResult};

// Re-export query types
pub use queries::{
    calculate_degree_centrality, degrees_of_separation, filter_nodes_by_query, find_hubs, find_shortest_path,
    find_similar_nodes, get_visible_element_ids, node_connections, Hub, NodeConnection, SimilarNode,
    VisibilityFilter, VisibleElements, MAX_FILTER_RESULTS,
};

// Re-export projections
pub use projections::{calculate_graph_stats, GraphStats};

// Re-export rendering and layout
pub use layout::{get_best_card_position, get_layout_config, CardPlacement, LayoutMode, LayoutProfile, Quadrant};
pub use transformations::{
    build_render_export, transform_edge, transform_node, transform_to_cytoscape_elements, RenderEdge, RenderElement,
    RenderExport, RenderNode,
};

// Re-export value objects
pub use value_objects::{BookId, EdgeId, EdgeType, NodeId, NodeType, Position2D, Size};
