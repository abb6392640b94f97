//! HTTP Server Configuration
//!
//! Host, port, CORS origins, plus the store and logging sections. Loaded
//! from a JSON file by the CLI; every field has a default so an empty
//! object is a valid config.

use serde::{Deserialize, Serialize};

use crate::observability::LogConfig;
use crate::repository::StoreConfig;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, which allows any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            store: StoreConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".into());
        }
        if self.store.max_connections == 0 {
            return Err("store.max_connections must be > 0".into());
        }
        if self.store.database_path.as_os_str().is_empty() {
            return Err("store.database_path must not be empty".into());
        }
        Ok(())
    }
}
