//! Request validation
//!
//! Pure helpers that turn raw request input into domain values.
//! None of them touch the event store.

use chrono::NaiveDate;

use crate::domain::Event;
use crate::error::{AppError, AppResult};

/// Query-string date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Structural validity of an event: positive ids, non-empty text fields
pub fn validate_event(event: &Event) -> bool {
    event.id > 0 && event.user_id > 0 && !event.title.is_empty() && !event.description.is_empty()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date_param(value: &str) -> AppResult<NaiveDate> {
    if value.len() != 10 {
        return Err(AppError::InvalidDate);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| AppError::InvalidDate)
}

/// Parse a decimal user id
pub fn parse_user_id_param(value: &str) -> AppResult<i64> {
    value.parse().map_err(|_| AppError::UserIdNotNumber)
}

/// Decode a JSON request body into an event
pub fn decode_event_body(body: &[u8]) -> AppResult<Event> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::InvalidRequestBody
    })
}
