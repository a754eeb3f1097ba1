//! Layout parameter profiles for the rendering widget
//!
//! Profiles serialize straight into the widget's layout options.

use crate::errors::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Padding around the fitted graph, shared by every profile
pub const LAYOUT_PADDING: u32 = 50;

/// Layout algorithm chosen in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Force,
    Circle,
    Grid,
    Hierarchical,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Force => "force",
            LayoutMode::Circle => "circle",
            LayoutMode::Grid => "grid",
            LayoutMode::Hierarchical => "hierarchical",
        }
    }

    /// Parse a mode, falling back to [`LayoutMode::Force`] for anything unknown
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(mode = s, "Unknown layout mode, using force");
            LayoutMode::Force
        })
    }
}

impl FromStr for LayoutMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(LayoutMode::Force),
            "circle" => Ok(LayoutMode::Circle),
            "grid" => Ok(LayoutMode::Grid),
            "hierarchical" => Ok(LayoutMode::Hierarchical),
            other => Err(GraphError::UnknownLayoutMode(other.to_string())),
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physics simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceOptions {
    pub num_iter: u32,
    pub initial_temp: f64,
    pub cooling_factor: f64,
    pub min_temp: f64,
    /// Constant returned by the node repulsion function
    pub node_repulsion: f64,
    /// Constant returned by the ideal edge length function
    pub ideal_edge_length: f64,
    /// Constant returned by the edge elasticity function
    pub edge_elasticity: f64,
    pub gravity: f64,
    pub node_overlap: f64,
    pub randomize: bool,
}

/// Geometric arrangement parameters for circle and grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricOptions {
    pub avoid_overlap: bool,
    pub spacing_factor: f64,
}

/// Layered top-down arrangement parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalOptions {
    pub rank_dir: String,
    /// Separation between levels
    pub rank_sep: f64,
    /// Separation between nodes on the same level
    pub node_sep: f64,
    pub edge_sep: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutOptions {
    Force(ForceOptions),
    Hierarchical(HierarchicalOptions),
    Geometric(GeometricOptions),
}

/// Complete layout configuration consumed by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProfile {
    /// Widget layout algorithm name
    pub name: String,
    pub fit: bool,
    pub padding: u32,
    pub animate: bool,
    /// Milliseconds
    pub animation_duration: u32,
    #[serde(flatten)]
    pub options: LayoutOptions,
}

impl LayoutProfile {
    fn new(name: &str, animation_duration: u32, options: LayoutOptions) -> Self {
        Self {
            name: name.to_string(),
            fit: true,
            padding: LAYOUT_PADDING,
            animate: true,
            animation_duration,
            options,
        }
    }

    pub fn force() -> Self {
        Self::new(
            "cose",
            1000,
            LayoutOptions::Force(ForceOptions {
                num_iter: 1000,
                initial_temp: 200.0,
                cooling_factor: 0.95,
                min_temp: 1.0,
                node_repulsion: 8000.0,
                ideal_edge_length: 100.0,
                edge_elasticity: 100.0,
                gravity: 0.25,
                node_overlap: 20.0,
                randomize: false,
            }),
        )
    }

    pub fn circle() -> Self {
        Self::new(
            "circle",
            500,
            LayoutOptions::Geometric(GeometricOptions {
                avoid_overlap: true,
                spacing_factor: 1.5,
            }),
        )
    }

    pub fn grid() -> Self {
        Self::new(
            "grid",
            500,
            LayoutOptions::Geometric(GeometricOptions {
                avoid_overlap: true,
                spacing_factor: 1.2,
            }),
        )
    }

    pub fn hierarchical() -> Self {
        Self::new(
            "dagre",
            750,
            LayoutOptions::Hierarchical(HierarchicalOptions {
                rank_dir: "TB".to_string(),
                rank_sep: 100.0,
                node_sep: 50.0,
                edge_sep: 10.0,
            }),
        )
    }

    pub fn for_mode(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Force => Self::force(),
            LayoutMode::Circle => Self::circle(),
            LayoutMode::Grid => Self::grid(),
            LayoutMode::Hierarchical => Self::hierarchical(),
        }
    }
}

/// Profile for a mode name; unknown names get the force profile
pub fn get_layout_config(mode: &str) -> LayoutProfile {
    LayoutProfile::for_mode(LayoutMode::parse_or_default(mode))
}
