//! HTTP request handlers for the time-accounting API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounting::{
    MonthKey, derive_absence_entry, derive_shift_entry, format_minutes_as_clock, parse_clock_time,
    summarize_month, summarize_vacation,
};
use crate::models::{AbsenceKind, DayEntry, EntryKind, Shift};

use super::request::{DeriveEntryRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, DeriveEntryResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries/derive", post(derive_entry_handler))
        .route("/summary", post(summary_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a structured API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Builds a JSON error response with the given status.
fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Builds the derived entry for a normal workday from the request's clock
/// time strings.
fn derive_normal_entry(
    request: &DeriveEntryRequest,
) -> Result<DayEntry, ApiErrorResponse> {
    let start_text = request.start_time.as_deref().ok_or_else(|| ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::validation_error("start_time is required for normal entries"),
    })?;
    let end_text = request.end_time.as_deref().ok_or_else(|| ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::validation_error("end_time is required for normal entries"),
    })?;

    let shift = Shift {
        start_minute: parse_clock_time(start_text).map_err(ApiErrorResponse::from)?,
        end_minute: parse_clock_time(end_text).map_err(ApiErrorResponse::from)?,
        pause_minutes: request.pause_minutes.unwrap_or(0),
    };

    Ok(derive_shift_entry(request.date, &shift))
}

/// Handler for the POST /entries/derive endpoint.
///
/// Accepts a day's raw input and returns the derived entry with its worked
/// and night-bonus minutes.
async fn derive_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeriveEntryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entry derivation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let entry = match request.kind {
        EntryKind::Normal => match derive_normal_entry(&request) {
            Ok(entry) => entry,
            Err(api_error) => {
                warn!(
                    correlation_id = %correlation_id,
                    code = %api_error.error.code,
                    "Entry derivation rejected"
                );
                return api_error.into_response();
            }
        },
        EntryKind::Vacation => derive_absence_entry(
            request.date,
            AbsenceKind::Vacation,
            state.config().absence_credit_minutes(),
        ),
        EntryKind::Sick => derive_absence_entry(
            request.date,
            AbsenceKind::Sick,
            state.config().absence_credit_minutes(),
        ),
    };

    info!(
        correlation_id = %correlation_id,
        date = %entry.date,
        worked_minutes = entry.worked_minutes,
        night_minutes = entry.night_minutes,
        "Entry derived successfully"
    );

    let response = DeriveEntryResponse {
        worked_time: format_minutes_as_clock(entry.worked_minutes),
        night_time: format_minutes_as_clock(entry.night_minutes),
        entry,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the POST /summary endpoint.
///
/// Aggregates the supplied entry snapshot into a monthly summary and a
/// yearly vacation summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let month = match MonthKey::parse(&request.month) {
        Ok(month) => month,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid month key"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let summary = summarize_month(&request.entries, month);
    let vacation_year = request.vacation_year.unwrap_or(month.year());
    let vacation = summarize_vacation(
        &request.entries,
        vacation_year,
        state.config().vacation_allowance_days(),
    );

    info!(
        correlation_id = %correlation_id,
        month = %month,
        entries_count = request.entries.len(),
        worked_minutes = summary.worked_minutes,
        night_minutes = summary.night_minutes,
        "Summary computed successfully"
    );

    let response = SummaryResponse {
        month: month.to_string(),
        summary,
        vacation,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
