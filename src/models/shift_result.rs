//! Calculation output models.
//!
//! This module contains the per-shift [`ShiftResult`] and the aggregated
//! [`Totals`] produced over a collection of results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in one hour, as used for every minutes-to-hours conversion.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Converts whole minutes to exact decimal hours.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(450), Decimal::new(75, 1)); // 7.5
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// The derived outcome of one shift.
///
/// Always recomputed from a [`Shift`](super::Shift), never patched in place.
/// Holds `0 <= night_minutes <= net_minutes`.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::ShiftResult;
/// use rust_decimal::Decimal;
///
/// let result = ShiftResult { net_minutes: 480, night_minutes: 0, wage: 9600 };
/// assert_eq!(result.net_hours(), Decimal::from(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftResult {
    /// Worked minutes after subtracting all break time.
    pub net_minutes: i64,
    /// Worked minutes that fall inside a night window.
    pub night_minutes: i64,
    /// Wage in whole currency units.
    pub wage: i64,
}

impl ShiftResult {
    /// Net worked time in hours.
    pub fn net_hours(&self) -> Decimal {
        minutes_to_hours(self.net_minutes)
    }

    /// Worked minutes outside any night window.
    pub fn day_minutes(&self) -> i64 {
        self.net_minutes - self.night_minutes
    }
}

/// Aggregated totals over a collection of shift results.
///
/// Minutes are summed as integers first; `sum_hours` is derived from the
/// minute sum once, never from per-record hour values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of shifts included.
    pub shift_count: usize,
    /// Total net worked minutes.
    pub sum_minutes: i64,
    /// Total net worked hours (`sum_minutes / 60`).
    pub sum_hours: Decimal,
    /// Total night minutes.
    pub sum_night_minutes: i64,
    /// Total wage in whole currency units.
    pub sum_wage: i64,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            shift_count: 0,
            sum_minutes: 0,
            sum_hours: Decimal::ZERO,
            sum_night_minutes: 0,
            sum_wage: 0,
        }
    }
}
