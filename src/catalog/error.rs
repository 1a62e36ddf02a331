//! Catalog load errors

use thiserror::Error;

/// Errors that can occur while loading the category catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// Request could not be sent or the connection failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("Catalog source returned status {0}")]
    Status(u16),

    /// Local catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Response body was not a valid catalog document
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        CatalogLoadError::Parse(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogLoadError>;
