//! Tool definitions module.
//!
//! Each tool is defined in its own file: a unit struct implementing
//! [`ToolDefinition`] for its metadata and
//! [`ToolHandler`](super::ToolHandler) for its behavior.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` and `ToolHandler`
//! 3. Export it here
//! 4. Register in `registry.rs`

mod create_task;
mod get_tasks;
mod get_users;
mod update_task_status;

pub use create_task::CreateTaskTool;
pub use get_tasks::GetTasksTool;
pub use get_users::GetUsersTool;
pub use update_task_status::{UpdateTaskStatusParams, UpdateTaskStatusTool};

use crate::core::dispatch::{InputSchema, ToolDescriptor};

/// Trait for tool definitions.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Declared arguments.
    fn input_schema() -> InputSchema;

    /// Descriptor used at registration.
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::input_schema())
    }
}
