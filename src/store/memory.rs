//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::models::{NewShiftRecord, ShiftRecord};

use super::RecordStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, ShiftRecord>,
}

/// A [`RecordStore`] that keeps records in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::StorageError {
        message: "record store lock poisoned".to_string(),
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, record: NewShiftRecord) -> EngineResult<ShiftRecord> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.next_id += 1;
        let stored = ShiftRecord::from_new(inner.next_id, record, Utc::now());
        inner.records.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn list(&self) -> EngineResult<Vec<ShiftRecord>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.values().cloned().collect())
    }

    fn delete(&self, id: i64) -> EngineResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::RecordNotFound { id })
    }
}
