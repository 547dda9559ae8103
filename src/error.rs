//! Error handling module
//!
//! Centralized error types and HTTP response conversion.
//!
//! Every error is rendered in the `{"error": "<message>"}` envelope:
//! - input errors (the caller's fault, the store is never touched) → 400
//! - business errors (rejected by store invariants) → 503
//! - everything else → 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::response::error_envelope;
use crate::event_store::EventStoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors (400)
    #[error("invalid request body")]
    InvalidRequestBody,

    #[error("invalid date")]
    InvalidDate,

    #[error("user_id is not number")]
    UserIdNotNumber,

    #[error("invalid query string")]
    InvalidQuery,

    // Routing errors
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("not found")]
    NotFound,

    // Store errors (503 or 500)
    #[error(transparent)]
    Store(#[from] EventStoreError),

    // Server errors (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequestBody
            | AppError::InvalidDate
            | AppError::UserIdNotNumber
            | AppError::InvalidQuery => StatusCode::BAD_REQUEST,

            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,

            AppError::Store(e) if e.is_business_error() => StatusCode::SERVICE_UNAVAILABLE,

            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the log
        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Internal error: {:?}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        error_envelope(status, message)
    }
}
