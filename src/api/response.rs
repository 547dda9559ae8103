//! Response envelope
//!
//! Every response body is either `{"result": ...}` or `{"error": "..."}`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success body
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

const APPLICATION_JSON: &str = "application/json";

/// Wrap `result` in the success envelope
pub fn result_envelope<T: Serialize>(status: StatusCode, result: T) -> Response {
    (status, Json(ResultEnvelope { result })).into_response()
}

/// Wrap `message` in the error envelope
pub fn error_envelope(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorEnvelope {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

/// 204 with no body
pub fn no_content() -> Response {
    (
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
    )
        .into_response()
}
