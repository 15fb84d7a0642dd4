//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `domains/tools/registry.rs`. Every transport ends up in
//! the same `Dispatcher`, so STDIO, TCP and HTTP share routing, validation
//! and envelopes. **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::dispatch::{Dispatcher, OperationRegistry};
use super::error::Result;
use crate::domains::{resources::ResourceError, state::StateStore, tools::ToolError};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone; clones share one dispatcher and therefore one state store.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Routes tool calls and resource reads.
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the built-in operations cannot be registered.
    pub fn new(config: Config) -> Result<Self> {
        let state = Arc::new(StateStore::from_config(&config.state));
        let registry = OperationRegistry::with_builtin()?;
        let dispatcher = Dispatcher::new(registry, state).with_config(config.dispatch.clone());

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema.to_json_schema()
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Caller mistakes come back inside the envelope; only internal faults
    /// produce `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let args = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Ok(serde_json::to_value(
                    ToolError::invalid_arguments(format!(
                        "arguments must be an object, got {}",
                        other
                    ))
                    .to_result(),
                )?);
            }
        };

        let result = self.dispatcher.invoke(name, &args).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// List all available resources (for HTTP transport).
    pub fn list_resources(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_resources()
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<serde_json::Value, ResourceError> {
        let result = self.dispatcher.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }
}

fn resource_error_to_mcp(e: ResourceError) -> McpError {
    match e {
        ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PowerApps demo server. Tools list and modify users and tasks; \
                 resources expose the same data as JSON snapshots."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                title: Some("PowerApps MCP Server".to_string()),
                version: self.version().to_string(),
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        let tools = self
            .dispatcher
            .list_tools()
            .iter()
            .map(|t| t.to_tool())
            .collect();
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let args = request.arguments.unwrap_or_default();
        self.dispatcher
            .invoke(&request.name, &args)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self
            .dispatcher
            .list_resources()
            .iter()
            .map(|r| r.to_resource())
            .collect();
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.dispatcher
            .read_resource(&request.uri)
            .await
            .map_err(resource_error_to_mcp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "powerapps-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_list_tools_json() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 4);
        assert_eq!(tools[2]["name"], "create_task");
        assert_eq!(
            tools[2]["inputSchema"]["required"],
            json!(["title", "status", "assignedTo"])
        );
    }

    #[test]
    fn test_list_resources_json() {
        let resources = server().list_resources();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["uri"], "powerapps://data/users");
        assert_eq!(resources[0]["mimeType"], "application/json");
    }

    #[tokio::test]
    async fn test_call_tool_json() {
        let result = server()
            .call_tool("update_task_status", json!({ "taskId": 999, "status": "Done" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Error: Task with ID 999 not found");
    }

    #[tokio::test]
    async fn test_call_tool_non_object_arguments() {
        let result = server().call_tool("get_users", json!([1, 2])).await.unwrap();
        assert_eq!(result["isError"], true);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let server = server();
        let clone = server.clone();
        clone
            .call_tool(
                "create_task",
                json!({ "title": "Shared", "status": "Pending", "assignedTo": 1 }),
            )
            .await
            .unwrap();

        assert_eq!(server.dispatcher().state().tasks().await.len(), 4);
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let server = server();
        let result = server.read_resource("powerapps://data/users").await.unwrap();
        assert_eq!(result["contents"][0]["uri"], "powerapps://data/users");

        assert!(server.read_resource("bogus://uri").await.is_err());
    }

    #[test]
    fn test_resource_error_mapping() {
        let err = resource_error_to_mcp(ResourceError::not_found("bogus://uri"));
        assert_eq!(err.code.0, -32002);
        assert!(err.message.contains("bogus://uri"));
    }
}
