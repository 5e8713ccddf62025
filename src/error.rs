//! Error types for Bookshelf
//!
//! Provides a unified error type for all operations.
//!
//! "Not found" is never an error here: lookups report it through
//! `Option`/`bool` results. Only unexpected failures (I/O, malformed
//! record mappings, bad interactive input) surface as `ShelfError`.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    /// A persisted record mapping is missing a required key or has a
    /// wrongly-typed value.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    /// Non-numeric input where an integer (id or year) was required.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
