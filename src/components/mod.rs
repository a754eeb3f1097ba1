//! Data components of the social circles graph
//!
//! Plain records as delivered by the backend snapshot, plus the visual
//! encoding tables used to style them.

pub mod edge;
pub mod graph;
pub mod node;
pub mod visual;

// Re-export commonly used types
pub use edge::GraphEdge;
pub use graph::{GraphSnapshot, SnapshotMeta};
pub use node::GraphNode;
pub use visual::{Color, EdgeStyle, LineStyle, Shape};
