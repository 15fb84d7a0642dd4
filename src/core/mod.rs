//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including the dispatch core, error handling, configuration, server
//! lifecycle management and transport layer abstractions.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
