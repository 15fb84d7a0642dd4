//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// State store configuration.
    pub state: StateConfig,

    /// Dispatcher configuration.
    pub dispatch: DispatchConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the state store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Load the demo users and tasks at startup.
    pub seed_sample_data: bool,
}

/// Configuration for the dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Artificial delay before each tool handler runs, in milliseconds.
    /// Zero disables it.
    pub handler_latency_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load the logging section alone from `MCP_LOG_LEVEL`.
    ///
    /// Called before the subscriber exists, so it must not log.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("MCP_LOG_LEVEL") {
            Ok(level) => Self { level },
            Err(_) => Self::default(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "powerapps-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            state: StateConfig::default(),
            dispatch: DispatchConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`. Invalid values are
    /// reported with `warn!`, so install the subscriber first (see
    /// [`LoggingConfig::from_env`]).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(seed) = std::env::var("MCP_SEED_DATA") {
            match seed.to_lowercase().as_str() {
                "true" | "1" => config.state.seed_sample_data = true,
                "false" | "0" => config.state.seed_sample_data = false,
                other => warn!("Ignoring invalid MCP_SEED_DATA value: {}", other),
            }
        }

        if let Ok(latency) = std::env::var("MCP_HANDLER_LATENCY_MS") {
            match latency.parse() {
                Ok(ms) => {
                    config.dispatch.handler_latency_ms = ms;
                    info!("Simulated handler latency: {}ms", ms);
                }
                Err(_) => warn!("Ignoring invalid MCP_HANDLER_LATENCY_MS value: {}", latency),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "powerapps-mcp-server");
        assert!(config.state.seed_sample_data);
        assert_eq!(config.dispatch.handler_latency_ms, 0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_state_and_dispatch_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEED_DATA", "false");
            std::env::set_var("MCP_HANDLER_LATENCY_MS", "300");
        }
        let config = Config::from_env();
        assert!(!config.state.seed_sample_data);
        assert_eq!(config.dispatch.handler_latency_ms, 300);
        unsafe {
            std::env::remove_var("MCP_SEED_DATA");
            std::env::remove_var("MCP_HANDLER_LATENCY_MS");
        }
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEED_DATA", "maybe");
            std::env::set_var("MCP_HANDLER_LATENCY_MS", "soon");
        }
        let config = Config::from_env();
        assert!(config.state.seed_sample_data);
        assert_eq!(config.dispatch.handler_latency_ms, 0);
        unsafe {
            std::env::remove_var("MCP_SEED_DATA");
            std::env::remove_var("MCP_HANDLER_LATENCY_MS");
        }
    }

    #[test]
    fn test_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert_eq!(Config::from_env().logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::from_env().level, "info");
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "tasks-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "tasks-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
