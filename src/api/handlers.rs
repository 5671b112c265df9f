//! HTTP request handlers for the shift wage API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_shift, compute_totals};
use crate::error::{EngineError, EngineResult};
use crate::export::{ExportOptions, render_csv};
use crate::models::{NewShiftRecord, Shift, ShiftRecord, Totals};

use super::request::ShiftRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Body returned after a record is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// Identifier of the deleted record.
    pub id: i64,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/records", post(create_record_handler).get(list_records_handler))
        .route("/records/totals", get(totals_handler))
        .route("/records/csv", get(csv_handler))
        .route("/records/:id", delete(delete_record_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Computes the result for a shift without storing it.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let shift = match parse_shift(payload, correlation_id) {
        Ok(shift) => shift,
        Err(response) => return response.into_response(),
    };

    let start_time = Instant::now();
    match calculate_shift(&shift, state.config().wage.rounding) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                net_minutes = result.net_minutes,
                night_minutes = result.night_minutes,
                wage = result.wage,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /records.
///
/// Computes the result for a shift and stores both together.
async fn create_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record submission");

    let shift = match parse_shift(payload, correlation_id) {
        Ok(shift) => shift,
        Err(response) => return response.into_response(),
    };

    match store_shift(&state, shift) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = record.id,
                wage = record.result.wage,
                "Record stored"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /records.
async fn list_records_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().list() {
        Ok(records) => {
            info!(correlation_id = %correlation_id, count = records.len(), "Listed records");
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /records/totals.
///
/// Totals are recomputed from the stored records on every request.
async fn totals_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match current_totals(&state) {
        Ok((_, totals)) => {
            info!(
                correlation_id = %correlation_id,
                shift_count = totals.shift_count,
                sum_wage = totals.sum_wage,
                "Computed totals"
            );
            (StatusCode::OK, Json(totals)).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /records/csv.
///
/// Responds with every stored record plus a total row as a CSV attachment.
async fn csv_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let (records, totals) = match current_totals(&state) {
        Ok(current) => current,
        Err(err) => return error_response(err, correlation_id),
    };

    let export = &state.config().export;
    let body = render_csv(&records, &totals, ExportOptions::from(export));
    info!(
        correlation_id = %correlation_id,
        count = records.len(),
        bytes = body.len(),
        "Exported records as CSV"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&export.filename)),
        ],
        body,
    )
        .into_response()
}

/// Handler for DELETE /records/:id.
async fn delete_record_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().delete(id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, record_id = id, "Record deleted");
            (StatusCode::OK, Json(DeletedRecord { id })).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Extracts a domain shift from the request body, mapping rejections to 400 responses.
fn parse_shift(
    payload: Result<Json<ShiftRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<Shift, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") || body_text.contains("invalid timestamp")
                    {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    request.into_shift().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected shift request");
        ApiErrorResponse::from(err)
    })
}

fn store_shift(state: &AppState, shift: Shift) -> EngineResult<ShiftRecord> {
    let result = calculate_shift(&shift, state.config().wage.rounding)?;
    state.store().insert(NewShiftRecord { shift, result })
}

fn current_totals(state: &AppState) -> EngineResult<(Vec<ShiftRecord>, Totals)> {
    let records = state.store().list()?;
    let totals = compute_totals(records.iter().map(|record| &record.result));
    Ok((records, totals))
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    if err.is_validation() || matches!(err, EngineError::RecordNotFound { .. }) {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    }
    ApiErrorResponse::from(err).into_response()
}

/// Builds an attachment disposition carrying an ASCII fallback and an
/// RFC 5987 encoded UTF-8 filename.
fn content_disposition(filename: &str) -> String {
    let fallback = if filename
        .chars()
        .all(|c| c.is_ascii_graphic() && c != '"' && c != '\\')
    {
        filename
    } else {
        "records.csv"
    };
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        percent_encode(filename)
    )
}

fn percent_encode(value: &str) -> String {
    value
        .bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (byte as char).to_string()
            }
            _ => format!("%{:02X}", byte),
        })
        .collect()
}
