//! List users tool definition.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::core::dispatch::InputSchema;
use crate::domains::state::StateStore;
use crate::domains::tools::{ToolError, ToolHandler, to_pretty_json};

/// Returns every user as a JSON array.
pub struct GetUsersTool;

impl ToolDefinition for GetUsersTool {
    const NAME: &'static str = "get_users";
    const DESCRIPTION: &'static str = "Get a list of all users in the system";

    fn input_schema() -> InputSchema {
        InputSchema::new()
    }
}

#[async_trait]
impl ToolHandler for GetUsersTool {
    #[instrument(name = "get_users", skip_all)]
    async fn call(&self, _args: &JsonObject, state: &StateStore) -> Result<String, ToolError> {
        let users = state.users().await;
        info!("Returning {} users", users.len());
        to_pretty_json(&users)
    }
}
