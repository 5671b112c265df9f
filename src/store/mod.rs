//! Record storage for submitted shifts.
//!
//! A [`RecordStore`] keeps [`ShiftRecord`]s keyed by an integer identifier it
//! assigns itself. Identifiers increase monotonically and are never reused
//! within one store. Records are inserted with their freshly computed result
//! and afterwards only listed or deleted.
//!
//! Two back ends are provided:
//! - [`MemoryStore`] for tests and `:memory:` configurations
//! - [`SqliteStore`] for a persistent database file

mod memory;
mod sqlite;

use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::error::EngineResult;
use crate::models::{NewShiftRecord, ShiftRecord};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Persistence seam for shift records.
pub trait RecordStore: Send + Sync {
    /// Stores a new record and returns it with its assigned identifier.
    fn insert(&self, record: NewShiftRecord) -> EngineResult<ShiftRecord>;

    /// Returns every stored record ordered by identifier ascending.
    fn list(&self) -> EngineResult<Vec<ShiftRecord>>;

    /// Deletes the record with the given identifier.
    ///
    /// Returns `RecordNotFound` when no such record exists.
    fn delete(&self, id: i64) -> EngineResult<()>;
}

/// Opens the record store selected by the storage configuration.
pub fn open_store(config: &StorageConfig) -> EngineResult<Arc<dyn RecordStore>> {
    if config.is_in_memory() {
        info!("Using in-memory record store");
        Ok(Arc::new(MemoryStore::new()))
    } else {
        info!(path = %config.database_path, "Using SQLite record store");
        Ok(Arc::new(SqliteStore::open(&config.database_path)?))
    }
}
