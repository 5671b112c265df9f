//! Application state for the shift wage API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::store::RecordStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the record store and the loaded service configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates a new application state from a store and configuration.
    pub fn new(store: Arc<dyn RecordStore>, config: ServiceConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
