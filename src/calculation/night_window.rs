//! Night window generation.
//!
//! The night window is the recurring daily span 22:00 to 05:00 of the next
//! calendar day. Windows are derived on demand from that fixed definition;
//! nothing is cached.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::Interval;

/// Hour of day at which a night window opens.
pub const NIGHT_START_HOUR: i64 = 22;

/// Hour of the following day at which a night window closes.
pub const NIGHT_END_HOUR: i64 = 5;

/// Length of every night window in minutes (7 hours).
pub const NIGHT_WINDOW_MINUTES: i64 = (24 - NIGHT_START_HOUR + NIGHT_END_HOUR) * 60;

/// Returns the night window anchored at `day`: `day 22:00` to `day+1 05:00`.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::{night_window_for, NIGHT_WINDOW_MINUTES};
/// use chrono::NaiveDate;
///
/// let window = night_window_for(NaiveDate::from_ymd_opt(2025, 10, 10).unwrap());
/// assert_eq!(window.start().to_string(), "2025-10-10 22:00:00");
/// assert_eq!(window.end().to_string(), "2025-10-11 05:00:00");
/// assert_eq!(window.duration_minutes(), NIGHT_WINDOW_MINUTES);
/// ```
pub fn night_window_for(day: NaiveDate) -> Interval {
    let midnight = day.and_time(NaiveTime::MIN);
    let start = midnight + Duration::hours(NIGHT_START_HOUR);
    let end = midnight + Duration::days(1) + Duration::hours(NIGHT_END_HOUR);
    Interval::from_ordered(start, end)
}

/// Generates the night windows that overlap `span`, in chronological order.
///
/// Candidate windows are anchored on every calendar day from the day before
/// `span` starts (whose window may still be open after midnight) through the
/// day `span` ends. Candidates that do not overlap `span` are skipped.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::night_windows;
/// use shift_wage_engine::models::Interval;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// // 03:00-09:00 touches only the window opened the previous evening
/// let span = Interval::new(at("2025-10-10 03:00"), at("2025-10-10 09:00")).unwrap();
/// let windows: Vec<Interval> = night_windows(&span).collect();
/// assert_eq!(windows.len(), 1);
/// assert_eq!(windows[0].start(), at("2025-10-09 22:00"));
/// ```
pub fn night_windows(span: &Interval) -> impl Iterator<Item = Interval> + use<> {
    let span = *span;
    let first_day = span.start().date() - Duration::days(1);
    let last_day = span.end().date();

    first_day
        .iter_days()
        .take_while(move |day| *day <= last_day)
        .map(night_window_for)
        .filter(move |window| window.intersect(&span).is_some())
}

/// Minutes of `span` that fall inside any night window.
pub fn night_minutes_within(span: &Interval) -> i64 {
    night_windows(span)
        .map(|window| window.overlap_minutes(span))
        .sum()
}
