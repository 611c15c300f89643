//! Backend server configuration
//!
//! Host, port, API root, CORS settings and simulated latency for the
//! in-memory hero backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 54321)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix for the hero routes (default: "/api")
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// CORS allowed origins; empty means permissive
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Simulated latency added to every hero response, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    54321
}

fn default_api_root() -> String {
    "/api".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:4200".to_string(), // ng serve
        "http://127.0.0.1:4200".to_string(),
    ]
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_root: default_api_root(),
            cors_origins: default_cors_origins(),
            latency_ms: 0,
        }
    }
}

impl BackendConfig {
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

    /// Simulated latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }
        if !self.api_root.starts_with('/') {
            return Err(format!(
                "server.api_root must start with '/': '{}'",
                self.api_root
            ));
        }
        if self.api_root.len() > 1 && self.api_root.ends_with('/') {
            return Err(format!(
                "server.api_root must not end with '/': '{}'",
                self.api_root
            ));
        }
        Ok(())
    }
}
