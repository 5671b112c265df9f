//! Totals aggregation.
//!
//! Sums shift results into [`Totals`]. Minutes, night minutes and wages are
//! integers and are summed exactly; hours are derived from the minute sum
//! once at the end.

use crate::error::EngineResult;
use crate::models::{Shift, ShiftResult, Totals, minutes_to_hours};

use super::shift_calculator::calculate_shift;
use super::wage::WageRounding;

/// Aggregates a collection of shift results.
///
/// Totals are always recomputed from the full collection passed in; removing
/// a record means calling this again without it.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::compute_totals;
/// use shift_wage_engine::models::ShiftResult;
/// use rust_decimal::Decimal;
///
/// let results = vec![
///     ShiftResult { net_minutes: 480, night_minutes: 0, wage: 9600 },
///     ShiftResult { net_minutes: 420, night_minutes: 420, wage: 8750 },
/// ];
/// let totals = compute_totals(&results);
/// assert_eq!(totals.sum_hours, Decimal::from(15));
/// assert_eq!(totals.sum_night_minutes, 420);
/// assert_eq!(totals.sum_wage, 18350);
/// ```
pub fn compute_totals<'a, I>(results: I) -> Totals
where
    I: IntoIterator<Item = &'a ShiftResult>,
{
    let (shift_count, sum_minutes, sum_night_minutes, sum_wage) = results.into_iter().fold(
        (0usize, 0i64, 0i64, 0i64),
        |(count, minutes, night, wage), result| {
            (
                count + 1,
                minutes + result.net_minutes,
                night + result.night_minutes,
                wage + result.wage,
            )
        },
    );

    Totals {
        shift_count,
        sum_minutes,
        sum_hours: minutes_to_hours(sum_minutes),
        sum_night_minutes,
        sum_wage,
    }
}

/// Re-derives totals from raw shifts, recomputing every result first.
///
/// Fails on the first shift that does not validate.
pub fn compute_totals_from_shifts(shifts: &[Shift], rounding: WageRounding) -> EngineResult<Totals> {
    let results = shifts
        .iter()
        .map(|shift| calculate_shift(shift, rounding))
        .collect::<EngineResult<Vec<_>>>()?;
    Ok(compute_totals(&results))
}
