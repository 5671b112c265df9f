//! Shift model and related types.
//!
//! This module defines the raw [`Shift`] and [`Break`] inputs as they arrive
//! from a form submission, before any validation or normalization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Interval;

/// Represents a break taken during a shift.
///
/// Breaks are raw input: they may overlap each other, extend past the shift,
/// or be supplied in any order. Only `start_time < end_time` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
}

impl Break {
    /// Creates a break from its start and end times.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Validates the break as the `index`-th entry of a break list.
    ///
    /// The error names the field as `breaks[index]`.
    pub fn interval(&self, index: usize) -> EngineResult<Interval> {
        Interval::for_field(format!("breaks[{}]", index), self.start_time, self.end_time)
    }
}

/// Represents one submitted work shift: the work span, its breaks and the hourly rate.
///
/// # Examples
///
/// ```
/// use shift_wage_engine::models::{Break, Shift};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shift = Shift {
///     start_time: at("2025-10-10 09:00"),
///     end_time: at("2025-10-10 18:00"),
///     breaks: vec![Break::new(at("2025-10-10 12:00"), at("2025-10-10 13:00"))],
///     hourly_rate: 1200,
/// };
/// assert_eq!(shift.work_interval().unwrap().duration_minutes(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<Break>,
    /// Hourly rate in whole currency units.
    pub hourly_rate: i64,
}

impl Shift {
    /// Validates the work span, naming the field `work` on failure.
    pub fn work_interval(&self) -> EngineResult<Interval> {
        Interval::for_field("work", self.start_time, self.end_time)
    }

    /// Validates the hourly rate.
    pub fn validated_rate(&self) -> EngineResult<i64> {
        if self.hourly_rate < 0 {
            return Err(EngineError::InvalidRate {
                rate: self.hourly_rate,
            });
        }
        Ok(self.hourly_rate)
    }
}
