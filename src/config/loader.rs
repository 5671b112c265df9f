//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 3000
/// storage:
///   database_path: records.db   # or ":memory:"
/// export:
///   filename: 勤務記録.csv
///   byte_order_mark: true
/// wage:
///   rounding: half_away_from_zero   # or half_even
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown enum values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })?;

        Ok(Self { config })
    }

    /// Loads configuration from `path` when given, otherwise uses defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses YAML text into a configuration. Empty text yields the defaults.
    fn parse(content: &str) -> Result<ServiceConfig, String> {
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::WageRounding;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./config/service.yaml"
    }

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.database_path, "records.db");
        assert_eq!(config.export.filename, "勤務記録.csv");
        assert_eq!(config.wage.rounding, WageRounding::HalfAwayFromZero);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_dir, path) = write_config("server:\n  port: 8080\n");
        let loader = ConfigLoader::load(&path).unwrap();

        assert_eq!(loader.config().server.port, 8080);
        assert_eq!(loader.config().server.host, "127.0.0.1");
        assert!(loader.config().export.byte_order_mark);
    }

    #[test]
    fn test_empty_file_is_default() {
        let (_dir, path) = write_config("");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_half_even_rounding_and_memory_store() {
        let (_dir, path) =
            write_config("storage:\n  database_path: \":memory:\"\nwage:\n  rounding: half_even\n");
        let config = ConfigLoader::load(&path).unwrap().into_config();

        assert!(config.storage.is_in_memory());
        assert_eq!(config.wage.rounding, WageRounding::HalfEven);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/service.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_unknown_rounding_returns_parse_error() {
        let (_dir, path) = write_config("wage:\n  rounding: banker\n");

        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("service.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(loader.config().server.bind_address(), "127.0.0.1:3000");
    }
}
