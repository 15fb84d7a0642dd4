//! State-specific error types.

use thiserror::Error;

/// Errors that can occur while reading or mutating the state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No task exists with the given id.
    #[error("Task with ID {0} not found")]
    TaskNotFound(u64),

    /// The id is a number but not a whole, non-negative one, so no task can
    /// carry it.
    #[error("Task with ID {0} not found")]
    InvalidTaskId(serde_json::Number),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_the_id_as_sent() {
        assert_eq!(
            StateError::TaskNotFound(999).to_string(),
            "Task with ID 999 not found"
        );
        assert_eq!(
            StateError::InvalidTaskId(serde_json::Number::from(-1)).to_string(),
            "Task with ID -1 not found"
        );
    }
}
