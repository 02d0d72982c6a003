//! Configuration loading for the salary service.
//!
//! The tax tables themselves are compiled in (see [`crate::schedule`]); this
//! module only covers how the service runs: bind address, CORS origins and
//! the log filter.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding to {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
pub use types::{CorsSettings, LoggingSettings, ServerSettings, ServiceConfig};
