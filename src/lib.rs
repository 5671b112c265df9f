//! Shift Wage Engine
//!
//! This crate records work shifts and calculates wages for them: net worked
//! minutes after breaks, minutes falling in the 22:00 to 05:00 night window,
//! and a wage paid at the hourly rate with a 1.25 night premium, rounded once
//! to whole currency units.
//!
//! The [`calculation`] module is the pure engine. The [`store`], [`export`]
//! and [`api`] modules wrap it into a small HTTP service.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
