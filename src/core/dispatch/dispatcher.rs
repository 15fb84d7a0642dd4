//! Dispatcher - routes tool calls and resource reads to their handlers.
//!
//! Tool calls never fail for caller mistakes: an unknown tool, invalid
//! arguments or a missing task all come back as an `isError` envelope. Only
//! internal faults inside a handler escape as `Err`. Resource reads keep the
//! stricter convention and fail hard on an unknown uri.

use std::sync::Arc;
use std::time::Duration;

use rmcp::model::{CallToolResult, JsonObject, ReadResourceResult};
use tracing::{error, info, instrument, warn};

use super::envelope;
use super::registry::{OperationRegistry, ResourceDescriptor, ToolDescriptor};
use super::validator::validate;
use crate::core::config::DispatchConfig;
use crate::domains::resources::ResourceError;
use crate::domains::state::StateStore;
use crate::domains::tools::ToolError;

/// Routes calls through the registry to handlers that operate on the store.
#[derive(Debug)]
pub struct Dispatcher {
    registry: OperationRegistry,
    state: Arc<StateStore>,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry and state store.
    pub fn new(registry: OperationRegistry, state: Arc<StateStore>) -> Self {
        Self {
            registry,
            state,
            config: DispatchConfig::default(),
        }
    }

    /// Replace the dispatch configuration.
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The state store handlers operate on.
    pub fn state(&self) -> &StateStore {
        &self.state
    }

    /// Tool descriptors in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.list_tools().into_iter().cloned().collect()
    }

    /// Resource descriptors in registration order.
    pub fn list_resources(&self) -> Vec<ResourceDescriptor> {
        self.registry.list_resources().into_iter().cloned().collect()
    }

    /// Invoke a tool by name.
    #[instrument(skip(self, args))]
    pub async fn invoke(&self, name: &str, args: &JsonObject) -> Result<CallToolResult, ToolError> {
        let tool = match self.registry.lookup_tool(name) {
            Ok(tool) => tool,
            Err(e) => {
                warn!("{}", e);
                return Ok(e.to_result());
            }
        };

        if let Err(e) = validate(&tool.descriptor().input_schema, args) {
            let e = ToolError::from(e);
            warn!("Rejected call: {}", e);
            return Ok(e.to_result());
        }

        self.simulate_latency().await;

        match tool.handler().call(args, &self.state).await {
            Ok(text) => {
                info!("Tool completed");
                Ok(envelope::tool_success(text))
            }
            Err(e) if e.is_fatal() => {
                error!("Tool failed: {}", e);
                Err(e)
            }
            Err(e) => {
                warn!("Tool returned an error: {}", e);
                Ok(e.to_result())
            }
        }
    }

    /// Read a resource by uri.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let resource = self.registry.lookup_resource(uri)?;
        let text = resource.handler().read(&self.state).await?;

        Ok(envelope::resource_text(
            uri,
            resource.descriptor().mime_type.as_str(),
            text,
        ))
    }

    async fn simulate_latency(&self) {
        if self.config.handler_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.handler_latency_ms)).await;
        }
    }
}
