//! Wage calculation functionality.
//!
//! This module converts net and night minutes into a wage using the split
//! rate formula: day minutes at the hourly rate, night minutes at the hourly
//! rate times the night premium.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::MINUTES_PER_HOUR;

/// Returns the night premium multiplier applied to night minutes.
///
/// The multiplier is 1.25 (25% premium) and is not configurable.
pub fn night_premium_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

/// Tie-breaking rule for wages that land exactly on a half currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageRounding {
    /// 0.5 rounds to 1, 1.5 rounds to 2.
    #[default]
    HalfAwayFromZero,
    /// 0.5 rounds to 0, 1.5 rounds to 2.
    HalfEven,
}

impl WageRounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            WageRounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            WageRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Calculates the wage for a shift with the default rounding rule.
///
/// See [`calculate_wage_with_rounding`].
///
/// # Examples
///
/// ```
/// use shift_wage_engine::calculation::calculate_wage;
///
/// // 20:00-01:00: 120 day minutes + 180 night minutes at 1000/h
/// assert_eq!(calculate_wage(300, 180, 1000).unwrap(), 5750);
/// ```
pub fn calculate_wage(net_minutes: i64, night_minutes: i64, hourly_rate: i64) -> EngineResult<i64> {
    calculate_wage_with_rounding(
        net_minutes,
        night_minutes,
        hourly_rate,
        WageRounding::default(),
    )
}

/// Calculates the wage for a shift.
///
/// ```text
/// wage = round((net - night) / 60 * rate + night / 60 * rate * 1.25)
/// ```
///
/// The exact sum is divided by 60 once and rounded once, to whole currency
/// units; no intermediate value is rounded.
///
/// # Arguments
///
/// * `net_minutes` - Worked minutes after breaks
/// * `night_minutes` - Worked minutes inside night windows (`<= net_minutes`)
/// * `hourly_rate` - Hourly rate in whole currency units
/// * `rounding` - Tie-breaking rule for half units
///
/// # Returns
///
/// The wage, `InvalidRate` for a negative rate, or
/// `ComputationInvariantViolation` if the minute inputs are inconsistent.
pub fn calculate_wage_with_rounding(
    net_minutes: i64,
    night_minutes: i64,
    hourly_rate: i64,
    rounding: WageRounding,
) -> EngineResult<i64> {
    if hourly_rate < 0 {
        return Err(EngineError::InvalidRate { rate: hourly_rate });
    }
    if night_minutes < 0 || night_minutes > net_minutes {
        return Err(EngineError::ComputationInvariantViolation {
            message: format!(
                "night minutes {} outside 0..={} net minutes",
                night_minutes, net_minutes
            ),
        });
    }

    let rate = Decimal::from(hourly_rate);
    let day_minutes = Decimal::from(net_minutes - night_minutes);
    let night_minutes = Decimal::from(night_minutes);

    let minute_weighted = day_minutes * rate + night_minutes * rate * night_premium_multiplier();
    let exact = minute_weighted / Decimal::from(MINUTES_PER_HOUR);

    exact
        .round_dp_with_strategy(0, rounding.strategy())
        .to_i64()
        .ok_or_else(|| EngineError::ComputationInvariantViolation {
            message: format!("wage {} does not fit a 64-bit amount", exact),
        })
}
