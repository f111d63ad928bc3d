//! Error types for Tooldir
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Tooldir
#[derive(Debug, Error)]
pub enum Error {
    /// No tool with this id in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(u32),

    /// Catalog data could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Opening an external website failed
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tooldir operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_error() {
        let err = Error::ToolNotFound(42);
        assert_eq!(err.to_string(), "Tool not found: 42");
    }

    #[test]
    fn test_storage_error() {
        let err = Error::Storage("file locked".to_string());
        assert_eq!(err.to_string(), "Storage error: file locked");
    }

    #[test]
    fn test_navigation_error() {
        let err = Error::Navigation("no browser".to_string());
        assert_eq!(err.to_string(), "Navigation error: no browser");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
