// Rust guideline compliant 2026-10-19

//! Error types for the Libris core library.

use thiserror::Error;

/// Result type alias for Libris operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Libris operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A book with the same ISBN is already in the inventory.
    #[error("A book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    /// Book not found.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Invalid configuration file or value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
