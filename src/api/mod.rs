//! HTTP API module for the shift wage service.
//!
//! This module provides the REST endpoints for calculating shift wages,
//! recording shifts, reading totals and exporting records as CSV.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{DeletedRecord, create_router};
pub use request::{BreakRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
