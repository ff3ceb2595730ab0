//! Error types for email-presets
//!
//! Building entities and presets cannot fail. Errors only appear at the wire
//! boundary, when a tree is encoded to or decoded from the editor's JSON.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to encode or decode an entity tree as JSON
    #[error("Failed to process canvas JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for email-presets operations
pub type Result<T> = std::result::Result<T, Error>;
