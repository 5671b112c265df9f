//! Break normalization.
//!
//! This module turns the raw break list of a shift into a sorted, disjoint
//! sequence of intervals lying inside the work span, so that overlapping or
//! duplicated breaks are never subtracted twice.

use crate::error::EngineResult;
use crate::models::{Break, Interval};

/// Normalizes the breaks of a shift against its work span.
///
/// 1. Validates every break (`start < end`), failing on the first malformed entry
/// 2. Clips each break to `work`, dropping breaks entirely outside it
/// 3. Sorts by start time and merges overlapping or exactly adjacent breaks
///
/// # Arguments
///
/// * `work` - The validated work span
/// * `breaks` - The raw breaks, in any order, possibly overlapping
///
/// # Returns
///
/// A sorted, disjoint sequence of intervals, each enclosed by `work`,
/// or `InvalidInterval` naming the first malformed break (`breaks[i]`).
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::normalize_breaks;
/// use shift_wage_engine::models::{Break, Interval};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let work = Interval::new(at("2025-10-10 09:00"), at("2025-10-10 18:00")).unwrap();
/// let breaks = vec![
///     Break::new(at("2025-10-10 12:30"), at("2025-10-10 12:45")),
///     Break::new(at("2025-10-10 12:00"), at("2025-10-10 13:00")),
/// ];
///
/// let normalized = normalize_breaks(&work, &breaks).unwrap();
/// assert_eq!(normalized.len(), 1);
/// assert_eq!(normalized[0].duration_minutes(), 60);
/// ```
pub fn normalize_breaks(work: &Interval, breaks: &[Break]) -> EngineResult<Vec<Interval>> {
    let validated = breaks
        .iter()
        .enumerate()
        .map(|(index, b)| b.interval(index))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut clipped: Vec<Interval> = validated
        .iter()
        .filter_map(|b| b.clip(work))
        .collect();
    clipped.sort_by_key(|b| b.start());

    Ok(merge_sorted(clipped))
}

/// Merges a start-sorted sequence of intervals into a disjoint sequence.
///
/// An interval joins the current run when it starts at or before the run's
/// end, so exactly adjacent intervals are merged as well as overlapping ones.
pub fn merge_sorted(sorted: Vec<Interval>) -> Vec<Interval> {
    sorted
        .into_iter()
        .fold(Vec::new(), |mut merged: Vec<Interval>, next| {
            match merged.last_mut() {
                Some(run) if next.start() <= run.end() => *run = run.hull(&next),
                _ => merged.push(next),
            }
            merged
        })
}

/// Total minutes covered by a disjoint sequence of intervals.
pub fn total_minutes(intervals: &[Interval]) -> i64 {
    intervals.iter().map(Interval::duration_minutes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn work_day() -> Interval {
        Interval::new(at("2025-10-10 09:00"), at("2025-10-10 18:00")).unwrap()
    }

    fn brk(start: &str, end: &str) -> Break {
        Break::new(at(start), at(end))
    }

    #[test]
    fn test_no_breaks_yields_empty() {
        let normalized = normalize_breaks(&work_day(), &[]).unwrap();
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_single_break_is_kept() {
        let normalized =
            normalize_breaks(&work_day(), &[brk("2025-10-10 12:00", "2025-10-10 13:00")]).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].start(), at("2025-10-10 12:00"));
        assert_eq!(total_minutes(&normalized), 60);
    }

    /// BN-001: duplicate entries are not double-subtracted
    #[test]
    fn test_duplicate_breaks_collapse() {
        let breaks = vec![
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(total_minutes(&normalized), 60);
    }

    /// BN-002: a break nested in another collapses into the outer one
    #[test]
    fn test_nested_break_collapses() {
        let breaks = vec![
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
            brk("2025-10-10 12:30", "2025-10-10 12:45"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].end(), at("2025-10-10 13:00"));
    }

    /// BN-003: partially overlapping breaks merge into their union
    #[test]
    fn test_overlapping_breaks_merge() {
        let breaks = vec![
            brk("2025-10-10 12:30", "2025-10-10 13:30"),
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].start(), at("2025-10-10 12:00"));
        assert_eq!(normalized[0].end(), at("2025-10-10 13:30"));
        assert_eq!(total_minutes(&normalized), 90);
    }

    /// BN-004: exactly adjacent breaks merge
    #[test]
    fn test_adjacent_breaks_merge() {
        let breaks = vec![
            brk("2025-10-10 12:00", "2025-10-10 12:30"),
            brk("2025-10-10 12:30", "2025-10-10 13:00"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(total_minutes(&normalized), 60);
    }

    #[test]
    fn test_separate_breaks_stay_sorted() {
        let breaks = vec![
            brk("2025-10-10 17:00", "2025-10-10 17:10"),
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
            brk("2025-10-10 15:00", "2025-10-10 15:15"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].start(), at("2025-10-10 12:00"));
        assert_eq!(normalized[1].start(), at("2025-10-10 15:00"));
        assert_eq!(normalized[2].start(), at("2025-10-10 17:00"));
        assert_eq!(total_minutes(&normalized), 85);
    }

    /// BN-005: a break running past the shift end is clipped
    #[test]
    fn test_break_past_shift_end_is_clipped() {
        let breaks = vec![brk("2025-10-10 17:30", "2025-10-10 19:00")];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].end(), at("2025-10-10 18:00"));
        assert_eq!(total_minutes(&normalized), 30);
    }

    /// BN-006: a break entirely outside the shift is dropped
    #[test]
    fn test_break_outside_shift_is_dropped() {
        let breaks = vec![
            brk("2025-10-10 07:00", "2025-10-10 08:00"),
            brk("2025-10-10 18:00", "2025-10-10 18:30"),
        ];
        let normalized = normalize_breaks(&work_day(), &breaks).unwrap();
        assert!(normalized.is_empty());
    }

    /// BN-007: a malformed break is an error even when it lies outside the shift
    #[test]
    fn test_inverted_break_is_rejected() {
        let breaks = vec![
            brk("2025-10-10 12:00", "2025-10-10 13:00"),
            brk("2025-10-10 20:00", "2025-10-10 19:00"),
        ];
        match normalize_breaks(&work_day(), &breaks) {
            Err(EngineError::InvalidInterval { field, .. }) => assert_eq!(field, "breaks[1]"),
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_break_is_rejected() {
        let breaks = vec![brk("2025-10-10 12:00", "2025-10-10 12:00")];
        assert!(normalize_breaks(&work_day(), &breaks).is_err());
    }

    #[test]
    fn test_merge_sorted_keeps_gaps() {
        let a = Interval::new(at("2025-10-10 10:00"), at("2025-10-10 11:00")).unwrap();
        let b = Interval::new(at("2025-10-10 11:01"), at("2025-10-10 12:00")).unwrap();
        assert_eq!(merge_sorted(vec![a, b]), vec![a, b]);
    }
}
