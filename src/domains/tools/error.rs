//! Tool-specific error types.

use rmcp::model::CallToolResult;
use thiserror::Error;

use crate::core::dispatch::{ValidationError, envelope};
use crate::domains::state::StateError;

/// Errors that can occur during tool operations.
///
/// Most variants are caller-facing and turn into an `isError` envelope.
/// `Serialization` and `Internal` are faults in the server itself and are
/// propagated instead (see [`ToolError::is_fatal`]).
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments broke the tool's input schema.
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// The arguments matched the schema but could not be converted.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A domain rule rejected the call.
    #[error("Error: {0}")]
    State(#[from] StateError),

    /// A result could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is a server fault rather than a caller mistake.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Serialization(_) | Self::Internal(_))
    }

    /// Soft-error envelope carrying this error's message.
    pub fn to_result(&self) -> CallToolResult {
        envelope::tool_error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ToolError::unknown_tool("nope").to_string(),
            "Unknown tool: nope"
        );
        assert_eq!(
            ToolError::from(StateError::TaskNotFound(9)).to_string(),
            "Error: Task with ID 9 not found"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(!ToolError::unknown_tool("x").is_fatal());
        assert!(!ToolError::invalid_arguments("x").is_fatal());
        assert!(!ToolError::from(StateError::TaskNotFound(1)).is_fatal());
        assert!(ToolError::internal("boom").is_fatal());
    }

    #[test]
    fn test_to_result_is_flagged() {
        let result = ToolError::unknown_tool("x").to_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(envelope::first_text(&result), Some("Unknown tool: x"));
    }
}
