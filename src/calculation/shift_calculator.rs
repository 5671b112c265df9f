//! Shift calculation functionality.
//!
//! This module composes the interval primitive, the break normalizer and the
//! night window generator into net worked minutes and net night minutes for a
//! single shift, then prices them with the wage calculator.

use crate::error::{EngineError, EngineResult};
use crate::models::{Break, Interval, Shift, ShiftResult};

use super::break_normalizer::{normalize_breaks, total_minutes};
use super::night_window::night_minutes_within;
use super::wage::{WageRounding, calculate_wage_with_rounding};

/// Net durations of one shift, before pricing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDurations {
    /// Worked minutes after subtracting all (normalized) break time.
    pub net_minutes: i64,
    /// Worked minutes inside night windows, after subtracting break time that fell at night.
    pub night_minutes: i64,
    /// The normalized breaks: sorted, disjoint, enclosed by the work span.
    pub breaks: Vec<Interval>,
}

/// Calculates net and night minutes for a work span and its breaks.
///
/// ```text
/// net   = duration(work) - sum(duration(break))
/// night = night(work)    - sum(night(break))
/// ```
///
/// Night time is measured over the full work span and the night time that
/// fell inside breaks is subtracted afterwards. Breaks are normalized first so
/// that none of their time is counted twice.
///
/// # Returns
///
/// The durations, `InvalidInterval` for a malformed break, or
/// `ComputationInvariantViolation` if `0 <= night <= net <= duration(work)`
/// does not hold.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::calculate_durations;
/// use shift_wage_engine::models::{Break, Interval};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// // 22:00-06:00 with a break 00:00-01:00
/// let work = Interval::new(at("2025-10-10 22:00"), at("2025-10-11 06:00")).unwrap();
/// let breaks = vec![Break::new(at("2025-10-11 00:00"), at("2025-10-11 01:00"))];
///
/// let durations = calculate_durations(&work, &breaks).unwrap();
/// assert_eq!(durations.net_minutes, 420);
/// assert_eq!(durations.night_minutes, 360);
/// ```
pub fn calculate_durations(work: &Interval, breaks: &[Break]) -> EngineResult<ShiftDurations> {
    let normalized = normalize_breaks(work, breaks)?;

    let work_minutes = work.duration_minutes();
    let net_minutes = work_minutes - total_minutes(&normalized);

    let raw_night_overlap = night_minutes_within(work);
    let break_night_overlap: i64 = normalized.iter().map(night_minutes_within).sum();
    let night_minutes = raw_night_overlap - break_night_overlap;

    if !(0 <= night_minutes && night_minutes <= net_minutes && net_minutes <= work_minutes) {
        return Err(EngineError::ComputationInvariantViolation {
            message: format!(
                "expected 0 <= night ({}) <= net ({}) <= work ({}) minutes",
                night_minutes, net_minutes, work_minutes
            ),
        });
    }

    Ok(ShiftDurations {
        net_minutes,
        night_minutes,
        breaks: normalized,
    })
}

/// Computes the result of one shift with the default wage rounding.
///
/// # Examples
///
/// ```
/// use shift_wage_engine::calculation::compute_shift;
/// use shift_wage_engine::models::{Break, Interval};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let work = Interval::new(at("2025-10-10 09:00"), at("2025-10-10 18:00")).unwrap();
/// let breaks = vec![Break::new(at("2025-10-10 12:00"), at("2025-10-10 13:00"))];
///
/// let result = compute_shift(&work, &breaks, 1200).unwrap();
/// assert_eq!(result.net_minutes, 480);
/// assert_eq!(result.night_minutes, 0);
/// assert_eq!(result.wage, 9600);
/// ```
pub fn compute_shift(work: &Interval, breaks: &[Break], hourly_rate: i64) -> EngineResult<ShiftResult> {
    compute_shift_with_rounding(work, breaks, hourly_rate, WageRounding::default())
}

/// Computes the result of one shift using the given wage rounding rule.
///
/// The rate is checked before any interval work so that a negative rate is
/// reported even for an otherwise valid shift.
pub fn compute_shift_with_rounding(
    work: &Interval,
    breaks: &[Break],
    hourly_rate: i64,
    rounding: WageRounding,
) -> EngineResult<ShiftResult> {
    if hourly_rate < 0 {
        return Err(EngineError::InvalidRate { rate: hourly_rate });
    }

    let durations = calculate_durations(work, breaks)?;
    let wage = calculate_wage_with_rounding(
        durations.net_minutes,
        durations.night_minutes,
        hourly_rate,
        rounding,
    )?;

    Ok(ShiftResult {
        net_minutes: durations.net_minutes,
        night_minutes: durations.night_minutes,
        wage,
    })
}

/// Validates a raw [`Shift`] and computes its result.
///
/// Fails with `InvalidInterval { field: "work" }` when the work span is
/// malformed, before looking at breaks or the rate.
pub fn calculate_shift(shift: &Shift, rounding: WageRounding) -> EngineResult<ShiftResult> {
    let work = shift.work_interval()?;
    compute_shift_with_rounding(&work, &shift.breaks, shift.hourly_rate, rounding)
}
