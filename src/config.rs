//! Configuration file
//!
//! A single JSON file (default `./heroes.json`). Every field has a
//! default, so a missing file or a partial one is fine.
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 54321, "api_root": "/api" },
//!   "client": { "base_url": "http://127.0.0.1:54321/api" },
//!   "log": { "level": "info" },
//!   "search": { "debounce_ms": 300 }
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BackendConfig;
use crate::observability::Severity;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Gateway client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend URL including the API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; unset waits indefinitely
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:54321/api".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Diagnostic logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum severity: trace, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.level.parse().map_err(ConfigError::Invalid)
    }
}

/// Search box settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: BackendConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate().map_err(ConfigError::Invalid)?;

        Url::parse(&self.client.base_url).map_err(|e| {
            ConfigError::Invalid(format!(
                "client.base_url '{}' is not a URL: {}",
                self.client.base_url, e
            ))
        })?;

        if self.client.timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "client.timeout_ms must be > 0 when set".to_string(),
            ));
        }

        self.log.severity()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/heroes.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(r#"{ "server": { "port": 8080 }, "log": { "level": "warn" } }"#);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.api_root, "/api");
        assert_eq!(config.log.severity().unwrap(), Severity::Warn);
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
        assert_eq!(config.client.timeout(), None);
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{ not json");
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values() {
        let file = write_config(r#"{ "log": { "level": "loud" } }"#);
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Invalid(_))));

        let file = write_config(r#"{ "client": { "base_url": "nowhere" } }"#);
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Invalid(_))));

        let file = write_config(r#"{ "client": { "timeout_ms": 0 } }"#);
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Invalid(_))));
    }
}
