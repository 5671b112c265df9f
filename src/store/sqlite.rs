//! SQLite-backed record store.
//!
//! Records live in a single `records` table. Breaks are stored as a JSON
//! array in one text column since they are only ever read back together
//! with their record.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{Break, NewShiftRecord, Shift, ShiftRecord, ShiftResult};

use super::RecordStore;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        work_start TEXT NOT NULL,
        work_end TEXT NOT NULL,
        breaks TEXT NOT NULL,
        hourly_rate INTEGER NOT NULL,
        net_minutes INTEGER NOT NULL,
        night_minutes INTEGER NOT NULL,
        wage INTEGER NOT NULL,
        created_at TEXT NOT NULL
    );
";

/// A [`RecordStore`] persisting records to a SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

/// Column values of one `records` row before decoding.
struct RawRecord {
    id: i64,
    work_start: String,
    work_end: String,
    breaks: String,
    hourly_rate: i64,
    net_minutes: i64,
    night_minutes: i64,
    wage: i64,
    created_at: String,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        info!(path = %path.display(), "Opened record database");
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> EngineResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> EngineResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> EngineResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| EngineError::StorageError {
            message: "database connection lock poisoned".to_string(),
        })
    }
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(column: &str, value: &str) -> EngineResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| EngineError::StorageError {
        message: format!("invalid {column} '{value}': {e}"),
    })
}

impl RawRecord {
    fn decode(self) -> EngineResult<ShiftRecord> {
        let breaks: Vec<Break> =
            serde_json::from_str(&self.breaks).map_err(|e| EngineError::StorageError {
                message: format!("invalid breaks for record {}: {e}", self.id),
            })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| EngineError::StorageError {
                message: format!("invalid created_at for record {}: {e}", self.id),
            })?
            .with_timezone(&Utc);

        Ok(ShiftRecord {
            id: self.id,
            shift: Shift {
                start_time: parse_timestamp("work_start", &self.work_start)?,
                end_time: parse_timestamp("work_end", &self.work_end)?,
                breaks,
                hourly_rate: self.hourly_rate,
            },
            result: ShiftResult {
                net_minutes: self.net_minutes,
                night_minutes: self.night_minutes,
                wage: self.wage,
            },
            created_at,
        })
    }
}

impl RecordStore for SqliteStore {
    fn insert(&self, record: NewShiftRecord) -> EngineResult<ShiftRecord> {
        let breaks =
            serde_json::to_string(&record.shift.breaks).map_err(|e| EngineError::StorageError {
                message: format!("failed to encode breaks: {e}"),
            })?;
        let created_at = Utc::now();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO records
                (work_start, work_end, breaks, hourly_rate, net_minutes, night_minutes, wage, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                format_timestamp(record.shift.start_time),
                format_timestamp(record.shift.end_time),
                breaks,
                record.shift.hourly_rate,
                record.result.net_minutes,
                record.result.night_minutes,
                record.result.wage,
                created_at.to_rfc3339(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "Inserted record");

        Ok(ShiftRecord::from_new(id, record, created_at))
    }

    fn list(&self) -> EngineResult<Vec<ShiftRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, work_start, work_end, breaks, hourly_rate, net_minutes, night_minutes, wage, created_at
             FROM records ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawRecord {
                id: row.get(0)?,
                work_start: row.get(1)?,
                work_end: row.get(2)?,
                breaks: row.get(3)?,
                hourly_rate: row.get(4)?,
                net_minutes: row.get(5)?,
                night_minutes: row.get(6)?,
                wage: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?;

        let records = rows
            .map(|raw| raw.map_err(EngineError::from).and_then(RawRecord::decode))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(records)
    }

    fn delete(&self, id: i64) -> EngineResult<()> {
        let deleted = self
            .conn()?
            .execute("DELETE FROM records WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(EngineError::RecordNotFound { id });
        }
        debug!(id, "Deleted record");
        Ok(())
    }
}
