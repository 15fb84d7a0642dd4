//! Transport selection.
//!
//! Whichever transport is configured, every call lands in the same
//! `McpServer`, so tools and resources behave identically on all of them.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an `McpServer` on the transport picked by `MCP_TRANSPORT`.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the transport shuts down (stdin closed, or forever for
    /// the network listeners).
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            tools = server.dispatcher().list_tools().len(),
            resources = server.dispatcher().list_resources().len(),
            "Serving {} over {}",
            server.name(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_config() {
        let service = TransportService::new(TransportConfig::default());
        assert_eq!(service.config(), &TransportConfig::default());
    }
}
