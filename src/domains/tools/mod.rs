//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are callable operations that may read or modify the state store.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registration
//! - `handlers.rs` - The `ToolHandler` trait and shared helpers
//! - `error.rs` - Tool-specific error types
//!
//! Routing, validation and envelope shaping live in `core::dispatch`; a tool
//! only supplies its metadata and behavior.

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use handlers::{ToolHandler, parse_params, to_pretty_json};
pub use registry::{register_all_tools, tool_names};
