//! PowerApps MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a small
//! set of user and task tools, plus read-only resources over the same data.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the dispatch core, the server
//!   handler and the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: callable operations (`get_users`, `create_task`, ...)
//!   - **resources**: JSON snapshots addressed by uri
//!   - **state**: the in-memory user and task store
//!
//! # Example
//!
//! ```rust,no_run
//! use powerapps_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let users = server
//!         .call_tool("get_users", serde_json::json!({}))
//!         .await?;
//!     println!("{}", users["content"][0]["text"]);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Dispatcher, Error, McpServer, Result};
