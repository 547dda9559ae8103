//! Calendar Event
//!
//! The record owned by the event store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A titled, described, dated record owned by one user.
///
/// Missing fields deserialize to their zero values so that incomplete
/// request bodies are rejected by validation rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub user_id: i64,
    pub id: i64,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

impl Event {
    pub fn new(
        user_id: i64,
        id: i64,
        date: DateTime<Utc>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            id,
            date,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Calendar date of the event in UTC
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Whether `other` refers to the same stored event
    pub fn same_identity(&self, other: &Event) -> bool {
        self.user_id == other.user_id && self.id == other.id
    }
}
