//! Resource-specific error types.

use thiserror::Error;

use crate::core::upstream::UpstreamError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// Fetching the resource content failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The fetched content could not be re-serialized.
    #[error("Failed to serialize resource: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
