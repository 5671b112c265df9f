//! Calculation logic for the shift wage engine.
//!
//! This module contains the pure calculation functions: break normalization,
//! night window generation, net and night minute calculation for a shift,
//! split-rate wage calculation with the night premium, and aggregation of
//! results into totals. Nothing here performs I/O or keeps state between calls.

mod aggregator;
mod break_normalizer;
mod night_window;
mod shift_calculator;
mod wage;

pub use aggregator::{compute_totals, compute_totals_from_shifts};
pub use break_normalizer::{merge_sorted, normalize_breaks, total_minutes};
pub use night_window::{
    NIGHT_END_HOUR, NIGHT_START_HOUR, NIGHT_WINDOW_MINUTES, night_minutes_within,
    night_window_for, night_windows,
};
pub use shift_calculator::{
    ShiftDurations, calculate_durations, calculate_shift, compute_shift,
    compute_shift_with_rounding,
};
pub use wage::{
    WageRounding, calculate_wage, calculate_wage_with_rounding, night_premium_multiplier,
};
