//! Configuration types for the shift wage service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Every section
//! has defaults so a partial (or empty) file is valid.

use serde::Deserialize;

use crate::calculation::WageRounding;

/// Database path value that selects the in-memory record store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// The `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Record storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file, or `:memory:` for a non-persistent store.
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "records.db".to_string(),
        }
    }
}

impl StorageConfig {
    /// Whether records are kept in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name offered to the client for download.
    pub filename: String,
    /// Whether to prefix the CSV with a UTF-8 byte order mark.
    pub byte_order_mark: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "勤務記録.csv".to_string(),
            byte_order_mark: true,
        }
    }
}

/// Wage calculation settings.
///
/// Only the tie-breaking rule is adjustable; the night window and the night
/// premium are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WageConfig {
    /// How exact half-unit wages are rounded.
    pub rounding: WageRounding,
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Record storage settings.
    pub storage: StorageConfig,
    /// CSV export settings.
    pub export: ExportConfig,
    /// Wage calculation settings.
    pub wage: WageConfig,
}
