//! Configuration loading and management for the shift wage service.
//!
//! This module provides functionality to load the service configuration
//! (listener, storage, export and wage rounding settings) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Database: {}", config.config().storage.database_path);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ExportConfig, IN_MEMORY_DATABASE, ServerConfig, ServiceConfig, StorageConfig, WageConfig,
};
