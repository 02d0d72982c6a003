//! Configuration types for the salary service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Every field
//! has a default, so a partial file (or no file at all) is valid.

use serde::Deserialize;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// The interface to bind to.
    pub host: String,
    /// The TCP port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Cross-origin request settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Origins allowed to call the API. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsSettings {
    /// Returns true if any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"salary_engine=debug,tower_http=info"`.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// CORS settings.
    pub cors: CorsSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl ServiceConfig {
    /// Returns the `host:port` address to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
