//! Error types for the reading list core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid book id: {0}")]
    InvalidId(String),

    #[error("Unknown sort mode: {0} (expected \"none\" or \"level\")")]
    InvalidSortMode(String),

    #[error("Book not found: {0}")]
    BookNotFound(u32),
}
