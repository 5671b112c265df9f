//! Half-open time interval primitive.
//!
//! An [`Interval`] is the unit of all temporal algebra in the engine:
//! work spans, normalized breaks and night windows are all intervals.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A half-open span of time `[start, end)` with minute resolution.
///
/// The constructor enforces `start < end`; zero-length and inverted spans are
/// rejected instead of being treated as empty. Instants are truncated to the
/// whole minute on construction.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::Interval;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2025-10-10 22:00", "%Y-%m-%d %H:%M").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-10-11 05:00", "%Y-%m-%d %H:%M").unwrap();
/// let interval = Interval::new(start, end).unwrap();
/// assert_eq!(interval.duration_minutes(), 420);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Creates an interval, failing with `InvalidInterval` if `start >= end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        Self::for_field("interval", start, end)
    }

    /// Creates an interval, naming `field` in the error if `start >= end`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_wage_engine::error::EngineError;
    /// use shift_wage_engine::models::Interval;
    /// use chrono::NaiveDateTime;
    ///
    /// let t = NaiveDateTime::parse_from_str("2025-10-10 09:00", "%Y-%m-%d %H:%M").unwrap();
    /// match Interval::for_field("work", t, t) {
    ///     Err(EngineError::InvalidInterval { field, .. }) => assert_eq!(field, "work"),
    ///     other => panic!("expected InvalidInterval, got {:?}", other),
    /// }
    /// ```
    pub fn for_field(
        field: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<Self> {
        let start = truncate_to_minute(start);
        let end = truncate_to_minute(end);
        if start >= end {
            return Err(EngineError::InvalidInterval {
                field: field.into(),
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from bounds already known to satisfy `start < end`.
    pub(crate) fn from_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "interval bounds out of order");
        Self { start, end }
    }

    /// The inclusive start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The exclusive end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the interval in whole minutes. Always positive.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns the overlap of two intervals, or `None` when they are disjoint.
    ///
    /// Touching intervals (`a.end == b.start`) do not intersect.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Interval { start, end })
    }

    /// Clips this interval to `bound`; `None` if nothing remains.
    pub fn clip(&self, bound: &Interval) -> Option<Interval> {
        self.intersect(bound)
    }

    /// Minutes shared by both intervals (zero when disjoint).
    pub fn overlap_minutes(&self, other: &Interval) -> i64 {
        self.intersect(other)
            .map(|overlap| overlap.duration_minutes())
            .unwrap_or(0)
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether `other` lies entirely within this interval.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}
