//! STDIO transport.
//!
//! One client per process: the MCP host spawns the server and talks over
//! stdin/stdout. Logs must stay on stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve the single stdio session until the host closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(format!("stdio handshake failed: {}", e)))?;

        info!("{} running on stdio", name);

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("stdio session closed: {:?}", reason);
        Ok(())
    }
}
