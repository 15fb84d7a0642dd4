//! Update task status tool definition.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::Number;
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::core::dispatch::{FieldType, InputSchema};
use crate::domains::state::{StateError, StateStore, whole_number};
use crate::domains::tools::{ToolError, ToolHandler, parse_params, to_pretty_json};

/// Parameters for the update task status tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusParams {
    /// The ID of the task to update, as sent by the client.
    pub task_id: Number,

    /// The new status of the task.
    pub status: String,
}

/// Update task status tool - changes the status of an existing task.
pub struct UpdateTaskStatusTool;

impl ToolDefinition for UpdateTaskStatusTool {
    const NAME: &'static str = "update_task_status";
    const DESCRIPTION: &'static str = "Update the status of an existing task";

    fn input_schema() -> InputSchema {
        InputSchema::new()
            .required("taskId", FieldType::Number, "The ID of the task to update")
            .required("status", FieldType::String, "The new status of the task")
    }
}

#[async_trait]
impl ToolHandler for UpdateTaskStatusTool {
    #[instrument(name = "update_task_status", skip_all)]
    async fn call(&self, args: &JsonObject, state: &StateStore) -> Result<String, ToolError> {
        let params: UpdateTaskStatusParams = parse_params(args)?;
        let id = whole_number(&params.task_id)
            .ok_or_else(|| StateError::InvalidTaskId(params.task_id.clone()))?;
        let task = state.update_task_status(id, params.status).await?;

        info!(task_id = task.id, status = %task.status, "Task status updated");
        Ok(format!(
            "Task status updated successfully: {}",
            to_pretty_json(&task)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_update_status() {
        let state = StateStore::with_sample_data();
        let text = UpdateTaskStatusTool
            .call(&args(json!({ "taskId": 1, "status": "Completed" })), &state)
            .await
            .unwrap();

        assert!(text.starts_with("Task status updated successfully: "));
        assert!(text.contains("\"status\": \"Completed\""));
        assert_eq!(state.find_task(1).await.unwrap().status, "Completed");
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let state = StateStore::with_sample_data();
        let err = UpdateTaskStatusTool
            .call(&args(json!({ "taskId": 999, "status": "Completed" })), &state)
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::State(StateError::TaskNotFound(999))));
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_whole_float_id_updates_task() {
        let state = StateStore::with_sample_data();
        UpdateTaskStatusTool
            .call(&args(json!({ "taskId": 2.0, "status": "Completed" })), &state)
            .await
            .unwrap();

        assert_eq!(state.find_task(2).await.unwrap().status, "Completed");
    }

    #[tokio::test]
    async fn test_negative_and_fractional_ids_are_not_found() {
        let state = StateStore::with_sample_data();
        let before = state.tasks().await;

        for (id, message) in [
            (json!(-1), "Task with ID -1 not found"),
            (json!(1.5), "Task with ID 1.5 not found"),
        ] {
            let err = UpdateTaskStatusTool
                .call(&args(json!({ "taskId": id, "status": "Completed" })), &state)
                .await
                .unwrap_err();

            assert!(matches!(err, ToolError::State(StateError::InvalidTaskId(_))));
            assert_eq!(err.to_string(), format!("Error: {}", message));
        }
        assert_eq!(state.tasks().await, before);
    }
}
