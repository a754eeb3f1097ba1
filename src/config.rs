//! Engine configuration
//!
//! Limits and defaults used by UI callers and the report tool. Every field
//! has a default, so a partial TOML file is valid.

use crate::errors::{GraphError, GraphResult};
use crate::layout::{LayoutMode, DEFAULT_CARD_MARGIN};
use crate::queries::{VisibilityFilter, DEFAULT_HUB_LIMIT, DEFAULT_SIMILAR_LIMIT, MAX_FILTER_RESULTS};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hub_limit: usize,
    pub similar_limit: usize,
    pub search_limit: usize,
    pub card_margin: f64,
    pub default_layout: LayoutMode,
    pub visibility: VisibilityFilter,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hub_limit: DEFAULT_HUB_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            search_limit: MAX_FILTER_RESULTS,
            card_margin: DEFAULT_CARD_MARGIN,
            default_layout: LayoutMode::default(),
            visibility: VisibilityFilter::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: EngineConfig = toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    fn validate(&self) -> GraphResult<()> {
        if !self.card_margin.is_finite() || self.card_margin < 0.0 {
            return Err(GraphError::Config(format!(
                "card_margin must be a non-negative number, got {}",
                self.card_margin
            )));
        }
        Ok(())
    }
}
