//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Resources are read-only JSON snapshots of the state store, addressed by
//! an opaque uri.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `handlers.rs` - The `ResourceHandler` trait
//! - `error.rs` - Resource-specific error types

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use handlers::ResourceHandler;
pub use registry::{register_all_resources, resource_uris};
