//! Operation Registry - the name/uri to handler dispatch table.
//!
//! Registration happens once at startup. A duplicate tool name or resource
//! uri is a configuration error and aborts initialization; lookups are hash
//! based and listings keep registration order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rmcp::model::{AnnotateAble, RawResource, Resource, Tool};
use thiserror::Error;
use tracing::{debug, info};

use super::validator::InputSchema;
use crate::domains::resources::{ResourceError, ResourceHandler, register_all_resources};
use crate::domains::tools::{ToolError, ToolHandler, register_all_tools};

/// Startup-time registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Resource already registered: {0}")]
    DuplicateResource(String),
}

/// Metadata describing a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Convert to the rmcp Tool model used in `tools/list`.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(self.input_schema.to_json_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Metadata describing a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

impl ResourceDescriptor {
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: description.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Convert to the rmcp Resource model used in `resources/list`.
    pub fn to_resource(&self) -> Resource {
        let mut raw = RawResource::new(self.uri.clone(), self.name.clone());
        raw.description = Some(self.description.clone());
        raw.mime_type = Some(self.mime_type.clone());
        raw.no_annotation()
    }
}

/// A registered tool: its descriptor and handler.
pub struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Arc<dyn ToolHandler>,
}

impl RegisteredTool {
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    pub fn handler(&self) -> &dyn ToolHandler {
        self.handler.as_ref()
    }
}

/// A registered resource: its descriptor and handler.
pub struct RegisteredResource {
    descriptor: ResourceDescriptor,
    handler: Arc<dyn ResourceHandler>,
}

impl RegisteredResource {
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn handler(&self) -> &dyn ResourceHandler {
        self.handler.as_ref()
    }
}

/// Registry of every tool and resource the server exposes.
#[derive(Default)]
pub struct OperationRegistry {
    tools: Vec<RegisteredTool>,
    tool_index: HashMap<String, usize>,
    resources: Vec<RegisteredResource>,
    resource_index: HashMap<String, usize>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool and resource.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        register_all_tools(&mut registry)?;
        register_all_resources(&mut registry)?;
        info!(
            tools = registry.tools.len(),
            resources = registry.resources.len(),
            "Operation registry built"
        );
        Ok(registry)
    }

    /// Register a tool.
    pub fn register_tool(
        &mut self,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), RegistryError> {
        if self.tool_index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateTool(descriptor.name));
        }

        debug!("Registering tool: {}", descriptor.name);
        self.tool_index
            .insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
        Ok(())
    }

    /// Register a resource.
    pub fn register_resource(
        &mut self,
        descriptor: ResourceDescriptor,
        handler: Arc<dyn ResourceHandler>,
    ) -> Result<(), RegistryError> {
        if self.resource_index.contains_key(&descriptor.uri) {
            return Err(RegistryError::DuplicateResource(descriptor.uri));
        }

        debug!("Registering resource: {}", descriptor.uri);
        self.resource_index
            .insert(descriptor.uri.clone(), self.resources.len());
        self.resources.push(RegisteredResource {
            descriptor,
            handler,
        });
        Ok(())
    }

    /// Tool descriptors in registration order.
    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    /// Resource descriptors in registration order.
    pub fn list_resources(&self) -> Vec<&ResourceDescriptor> {
        self.resources.iter().map(|r| &r.descriptor).collect()
    }

    /// Find a tool by name.
    pub fn lookup_tool(&self, name: &str) -> Result<&RegisteredTool, ToolError> {
        self.tool_index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    /// Find a resource by uri.
    pub fn lookup_resource(&self, uri: &str) -> Result<&RegisteredResource, ResourceError> {
        self.resource_index
            .get(uri)
            .map(|&i| &self.resources[i])
            .ok_or_else(|| ResourceError::not_found(uri))
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("tools", &self.list_tools())
            .field("resources", &self.list_resources())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::state::StateStore;
    use async_trait::async_trait;
    use rmcp::model::JsonObject;

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn call(&self, _args: &JsonObject, _state: &StateStore) -> Result<String, ToolError> {
            Ok("echo".to_string())
        }
    }

    #[async_trait]
    impl ResourceHandler for Echo {
        async fn read(&self, _state: &StateStore) -> Result<String, ResourceError> {
            Ok("echo".to_string())
        }
    }

    fn tool(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, "test tool", InputSchema::new())
    }

    fn resource(uri: &str) -> ResourceDescriptor {
        ResourceDescriptor::new(uri, "Test", "test resource", "text/plain")
    }

    #[test]
    fn test_builtin_registry() {
        let registry = OperationRegistry::with_builtin().unwrap();

        let names: Vec<_> = registry
            .list_tools()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["get_users", "get_tasks", "create_task", "update_task_status"]
        );

        let uris: Vec<_> = registry
            .list_resources()
            .iter()
            .map(|r| r.uri.as_str())
            .collect();
        assert_eq!(uris, vec!["powerapps://data/users", "powerapps://data/tasks"]);
    }

    #[test]
    fn test_listing_follows_registration_order() {
        let mut registry = OperationRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register_tool(tool(name), Arc::new(Echo)).unwrap();
        }

        let names: Vec<_> = registry
            .list_tools()
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_tool_rejected() {
        let mut registry = OperationRegistry::new();
        registry.register_tool(tool("dup"), Arc::new(Echo)).unwrap();

        let err = registry.register_tool(tool("dup"), Arc::new(Echo)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTool("dup".to_string()));
        assert_eq!(registry.list_tools().len(), 1);
    }

    #[test]
    fn test_duplicate_resource_rejected() {
        let mut registry = OperationRegistry::new();
        registry
            .register_resource(resource("test://a"), Arc::new(Echo))
            .unwrap();

        let err = registry
            .register_resource(resource("test://a"), Arc::new(Echo))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateResource("test://a".to_string()));
    }

    #[test]
    fn test_lookup() {
        let mut registry = OperationRegistry::new();
        registry.register_tool(tool("known"), Arc::new(Echo)).unwrap();
        registry
            .register_resource(resource("test://known"), Arc::new(Echo))
            .unwrap();

        assert_eq!(registry.lookup_tool("known").unwrap().descriptor().name, "known");
        assert!(matches!(
            registry.lookup_tool("unknown"),
            Err(ToolError::UnknownTool(name)) if name == "unknown"
        ));
        assert!(registry.lookup_resource("test://known").is_ok());
        assert!(matches!(
            registry.lookup_resource("test://missing"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_descriptor_conversions() {
        let tool = ToolDescriptor::new("t", "desc", InputSchema::new()).to_tool();
        assert_eq!(tool.name, "t");
        assert_eq!(tool.input_schema.get("type"), Some(&serde_json::json!("object")));

        let resource = resource("test://r").to_resource();
        assert_eq!(resource.raw.uri, "test://r");
        assert_eq!(resource.raw.mime_type.as_deref(), Some("text/plain"));
    }
}
