//! Error types for the shift wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating shifts,
//! computing wages, loading configuration and storing records.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the shift wage engine.
///
/// The first three variants are produced by the pure calculation engine;
/// the rest come from the collaborators wrapped around it (configuration,
/// record storage).
///
/// # Example
///
/// ```
/// use shift_wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidRate { rate: -1 };
/// assert_eq!(error.to_string(), "Invalid hourly rate -1: must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An interval was constructed with `start >= end`.
    #[error("Invalid interval for '{field}': start {start} is not before end {end}")]
    InvalidInterval {
        /// The input field that held the malformed interval (e.g. "work", "breaks[1]").
        field: String,
        /// The supplied start instant.
        start: NaiveDateTime,
        /// The supplied end instant.
        end: NaiveDateTime,
    },

    /// The hourly rate was negative.
    #[error("Invalid hourly rate {rate}: must not be negative")]
    InvalidRate {
        /// The rejected rate.
        rate: i64,
    },

    /// A submitted break row had only one of its two times filled in.
    #[error("Incomplete break at 'breaks[{index}]': both start and end are required")]
    IncompleteBreak {
        /// Position of the row in the submitted break list.
        index: usize,
    },

    /// An internal postcondition failed. Indicates an engine bug.
    #[error("Computation invariant violated: {message}")]
    ComputationInvariantViolation {
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No stored record has the requested identifier.
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// The identifier that was not found.
        id: i64,
    },

    /// The record store failed.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the caller's input rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInterval { .. }
                | EngineError::InvalidRate { .. }
                | EngineError::IncompleteBreak { .. }
        )
    }
}

impl From<rusqlite::Error> for EngineError {
    fn from(err: rusqlite::Error) -> Self {
        EngineError::StorageError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
