//! Common test utilities
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use calendar_api::api::{build_router, AppState};
use calendar_api::{Event, EventRepository, EventStoreError, InMemoryEventStore, MonthMatching};

/// Body used by the create/duplicate scenarios
pub const EVENT_BODY: &str =
    r#"{"user_id":1,"id":1,"date":"2024-01-01T00:00:00Z","title":"T","description":"D"}"#;

/// Router over a fresh in-memory store
pub fn app() -> Router {
    app_with(MonthMatching::default())
}

pub fn app_with(month_matching: MonthMatching) -> Router {
    build_router(AppState::in_memory(
        InMemoryEventStore::with_month_matching(month_matching),
    ))
}

/// Router over a store that always fails internally
pub fn failing_app() -> Router {
    build_router(AppState::new(Arc::new(FailingStore)))
}

/// JSON body for an event
pub fn event_body(user_id: i64, id: i64, date: &str, title: &str, description: &str) -> String {
    serde_json::json!({
        "user_id": user_id,
        "id": id,
        "date": date,
        "title": title,
        "description": description,
    })
    .to_string()
}

/// Send a request; returns status, content type and parsed body
/// (`Value::Null` for an empty body)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, content_type, json)
}

pub async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, _, json) = send(app, "POST", uri, Some(body)).await;
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, json) = send(app, "GET", uri, None).await;
    (status, json)
}

/// Titles of the events in a `{"result": [...]}` body
pub fn titles(json: &Value) -> Vec<String> {
    json["result"]
        .as_array()
        .expect("result is not a list")
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

/// Test double: every operation fails as if the lock were poisoned
pub struct FailingStore;

impl EventRepository for FailingStore {
    fn create_event(&self, _event: Event) -> Result<(), EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }

    fn update_event(&self, _event: Event) -> Result<(), EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }

    fn delete_event(&self, _event: &Event) -> Result<(), EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }

    fn events_for_day(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }

    fn events_for_week(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }

    fn events_for_month(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        Err(EventStoreError::LockPoisoned)
    }
}
