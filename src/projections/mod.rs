//! Graph projections
//!
//! Read-only summaries derived from a whole snapshot.

pub mod graph_summary;

pub use graph_summary::*;
