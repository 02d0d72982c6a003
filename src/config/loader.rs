//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Environment variable naming the service configuration file.
pub const CONFIG_PATH_ENV: &str = "SALARY_ENGINE_CONFIG";

/// Loads the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8000
/// cors:
///   allowed_origins: ["*"]
/// logging:
///   filter: info
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on {}", config.bind_address());
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read, or
    /// [`EngineError::ConfigParseError`] if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ServiceConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&path_str, &content)
    }

    /// Parses configuration YAML; `source` names the origin in error messages.
    pub fn parse(source: &str, content: &str) -> EngineResult<ServiceConfig> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads configuration from the file named by [`CONFIG_PATH_ENV`], or
    /// returns the defaults when the variable is unset.
    pub fn from_env() -> EngineResult<ServiceConfig> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(ServiceConfig::default()),
        }
    }
}
