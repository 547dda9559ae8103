//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Response,
    routing::{on, post, MethodFilter},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::Event;
use crate::error::{AppError, AppResult};
use crate::event_store::EventStoreError;

use super::response::{no_content, result_envelope};
use super::state::AppState;
use super::validation::{
    decode_event_body, parse_date_param, parse_user_id_param, validate_event,
};

// =========================================================================
// Request types
// =========================================================================

/// Query string of the range endpoints.
///
/// Values are kept as raw strings so that parse failures are reported with
/// the API's own error messages.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl RangeQuery {
    /// Parse `user_id` then `date`
    pub fn parse(&self) -> AppResult<(i64, NaiveDate)> {
        let user_id = parse_user_id_param(self.user_id.as_deref().unwrap_or_default())?;
        let date = parse_date_param(self.date.as_deref().unwrap_or_default())?;
        Ok((user_id, date))
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Mutations
        .route("/create_event", post(create_event).fallback(method_not_allowed))
        .route("/update_event", post(update_event).fallback(method_not_allowed))
        .route("/delete_event", post(delete_event).fallback(method_not_allowed))
        // Range queries, GET only (HEAD falls through to 405)
        .route(
            "/events_for_day",
            on(MethodFilter::GET, events_for_day).fallback(method_not_allowed),
        )
        .route(
            "/events_for_week",
            on(MethodFilter::GET, events_for_week).fallback(method_not_allowed),
        )
        .route(
            "/events_for_month",
            on(MethodFilter::GET, events_for_month).fallback(method_not_allowed),
        )
        .fallback(not_found)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Decode and validate a mutation body
fn event_from_body(body: Result<Bytes, BytesRejection>) -> AppResult<Event> {
    let body = body.map_err(|_| AppError::InvalidRequestBody)?;
    decode_event_body(&body)
}

fn range_from_query(
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> AppResult<(i64, NaiveDate)> {
    let Query(query) = query.map_err(|_| AppError::InvalidQuery)?;
    query.parse()
}

// =========================================================================
// POST /create_event
// =========================================================================

/// Create an event and echo it back
async fn create_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let event = event_from_body(body)?;
    if !validate_event(&event) {
        return Err(AppError::InvalidRequestBody);
    }

    state.store.create_event(event.clone())?;

    Ok(result_envelope(StatusCode::OK, event))
}

// =========================================================================
// POST /update_event
// =========================================================================

/// Update title, description and date of an existing event
async fn update_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let event = event_from_body(body)?;
    if !validate_event(&event) {
        return Err(AppError::InvalidRequestBody);
    }

    state.store.update_event(event)?;

    Ok(no_content())
}

// =========================================================================
// POST /delete_event
// =========================================================================

/// Delete an event; only `user_id` and `id` of the body are used
async fn delete_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let event = event_from_body(body)?;

    state.store.delete_event(&event)?;

    Ok(no_content())
}

// =========================================================================
// GET /events_for_day, /events_for_week, /events_for_month
// =========================================================================

async fn events_for_day(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> AppResult<Response> {
    let (user_id, date) = range_from_query(query)?;
    events_response(state.store.events_for_day(user_id, date))
}

async fn events_for_week(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> AppResult<Response> {
    let (user_id, date) = range_from_query(query)?;
    events_response(state.store.events_for_week(user_id, date))
}

async fn events_for_month(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> AppResult<Response> {
    let (user_id, date) = range_from_query(query)?;
    events_response(state.store.events_for_month(user_id, date))
}

fn events_response(events: Result<Vec<Event>, EventStoreError>) -> AppResult<Response> {
    Ok(result_envelope(StatusCode::OK, events?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_parses_user_id_before_date() {
        let query = RangeQuery {
            user_id: Some("abc".to_string()),
            date: Some("bad".to_string()),
        };
        assert!(matches!(query.parse(), Err(AppError::UserIdNotNumber)));
    }

    #[test]
    fn test_range_query_missing_values() {
        let query: RangeQuery = serde_json::from_str("{}").unwrap();
        assert!(matches!(query.parse(), Err(AppError::UserIdNotNumber)));

        let query = RangeQuery {
            user_id: Some("3".to_string()),
            date: None,
        };
        assert!(matches!(query.parse(), Err(AppError::InvalidDate)));
    }

    #[test]
    fn test_range_query_valid() {
        let query = RangeQuery {
            user_id: Some("3".to_string()),
            date: Some("2024-01-31".to_string()),
        };
        let (user_id, date) = query.parse().unwrap();
        assert_eq!(user_id, 3);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }
}
