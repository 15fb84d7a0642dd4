//! Tool Registry - central registration of all tools.
//!
//! When adding a new tool:
//! 1. Create the tool file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `register_all_tools()`

use std::sync::Arc;

use super::definitions::{
    CreateTaskTool, GetTasksTool, GetUsersTool, ToolDefinition, UpdateTaskStatusTool,
};
use crate::core::dispatch::{OperationRegistry, RegistryError};

/// Register every tool, in listing order.
pub fn register_all_tools(registry: &mut OperationRegistry) -> Result<(), RegistryError> {
    registry.register_tool(GetUsersTool::descriptor(), Arc::new(GetUsersTool))?;
    registry.register_tool(GetTasksTool::descriptor(), Arc::new(GetTasksTool))?;
    registry.register_tool(CreateTaskTool::descriptor(), Arc::new(CreateTaskTool))?;
    registry.register_tool(
        UpdateTaskStatusTool::descriptor(),
        Arc::new(UpdateTaskStatusTool),
    )?;
    Ok(())
}

/// Get all tool names.
pub fn tool_names() -> Vec<&'static str> {
    vec![
        GetUsersTool::NAME,
        GetTasksTool::NAME,
        CreateTaskTool::NAME,
        UpdateTaskStatusTool::NAME,
    ]
}
