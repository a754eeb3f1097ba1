//! Errors raised at the parsing boundaries of the crate
//!
//! The analytics themselves are total and report absence with sentinel values.

/// Errors that can occur while decoding snapshots, configuration or type names
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Failed to decode graph snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("Unknown edge type '{0}'")]
    UnknownEdgeType(String),

    #[error("Unknown layout mode '{0}'")]
    UnknownLayoutMode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible graph operations
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GraphError::UnknownLayoutMode("spiral".to_string());
        assert_eq!(error.to_string(), "Unknown layout mode 'spiral'");
    }

    #[test]
    fn test_json_error_converts() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: GraphError = json_error.into();
        assert!(error.to_string().starts_with("Failed to decode graph snapshot"));
    }
}
