//! Stored shift records.
//!
//! A record pairs the raw [`Shift`] input with the [`ShiftResult`] computed
//! from it at submission time. Records are inserted and deleted, never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Shift, ShiftResult};

/// A shift record as handed to a record store, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShiftRecord {
    /// The raw shift inputs.
    pub shift: Shift,
    /// The result computed from `shift`.
    pub result: ShiftResult,
}

/// A persisted shift record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Opaque identifier assigned by the store.
    pub id: i64,
    /// The raw shift inputs.
    pub shift: Shift,
    /// The result computed from `shift`.
    pub result: ShiftResult,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
}

impl ShiftRecord {
    /// Builds a stored record from a new record and its assigned identifier.
    pub fn from_new(id: i64, record: NewShiftRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            shift: record.shift,
            result: record.result,
            created_at,
        }
    }
}
