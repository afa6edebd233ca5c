//! Configuration loading for the promotion statistics service.
//!
//! This module provides functionality to load the service configuration from
//! a YAML file: the HTTP bind address, the snapshot location and the default
//! log level.
//!
//! # Example
//!
//! ```no_run
//! use promotion_stats::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", loader.config().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, ServerConfig, ServiceConfig, SnapshotConfig};
