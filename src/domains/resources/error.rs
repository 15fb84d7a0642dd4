//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// Unlike tool errors these are never wrapped in an envelope: a failed read
/// aborts the request.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under the uri.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// The resource snapshot could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
