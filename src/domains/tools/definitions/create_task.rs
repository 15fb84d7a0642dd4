//! Create task tool definition.
//!
//! Appends a task with the next id. `assignedTo` is stored as given; it is
//! not checked against the user list.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::core::dispatch::{FieldType, InputSchema};
use crate::domains::state::{NewTask, StateStore};
use crate::domains::tools::{ToolError, ToolHandler, parse_params, to_pretty_json};

/// Create task tool.
pub struct CreateTaskTool;

impl ToolDefinition for CreateTaskTool {
    const NAME: &'static str = "create_task";
    const DESCRIPTION: &'static str = "Create a new task";

    fn input_schema() -> InputSchema {
        InputSchema::new()
            .required("title", FieldType::String, "The title of the task")
            .required(
                "status",
                FieldType::String,
                "The status of the task (e.g., Pending, In Progress, Completed)",
            )
            .required(
                "assignedTo",
                FieldType::Number,
                "The ID of the user to assign the task to",
            )
    }
}

#[async_trait]
impl ToolHandler for CreateTaskTool {
    #[instrument(name = "create_task", skip_all)]
    async fn call(&self, args: &JsonObject, state: &StateStore) -> Result<String, ToolError> {
        let new_task: NewTask = parse_params(args)?;
        let task = state.create_task(new_task).await;

        info!(task_id = task.id, "Task created");
        Ok(format!("Task created successfully: {}", to_pretty_json(&task)?))
    }
}
