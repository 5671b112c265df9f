//! Core data models for the shift wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod interval;
mod record;
mod shift;
mod shift_result;

pub use interval::Interval;
pub use record::{NewShiftRecord, ShiftRecord};
pub use shift::{Break, Shift};
pub use shift_result::{MINUTES_PER_HOUR, ShiftResult, Totals, minutes_to_hours};
