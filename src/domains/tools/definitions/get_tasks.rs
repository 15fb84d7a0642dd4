//! List tasks tool definition.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::core::dispatch::InputSchema;
use crate::domains::state::StateStore;
use crate::domains::tools::{ToolError, ToolHandler, to_pretty_json};

/// Returns every task as a JSON array.
pub struct GetTasksTool;

impl ToolDefinition for GetTasksTool {
    const NAME: &'static str = "get_tasks";
    const DESCRIPTION: &'static str = "Get a list of all tasks in the system";

    fn input_schema() -> InputSchema {
        InputSchema::new()
    }
}

#[async_trait]
impl ToolHandler for GetTasksTool {
    #[instrument(name = "get_tasks", skip_all)]
    async fn call(&self, _args: &JsonObject, state: &StateStore) -> Result<String, ToolError> {
        let tasks = state.tasks().await;
        info!("Returning {} tasks", tasks.len());
        to_pretty_json(&tasks)
    }
}
