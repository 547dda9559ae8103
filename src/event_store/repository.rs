//! Event Store Repository
//!
//! `EventRepository` is the capability set the HTTP layer depends on;
//! `InMemoryEventStore` is the production implementation.
//!
//! The whole map sits behind a single reader/writer lock: mutations hold the
//! write lock for their entire duration, range queries share the read lock.
//! No I/O happens under the lock.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::period::{in_month, same_day, within_week};
use crate::domain::{Event, MonthMatching};

use super::EventStoreError;

/// Storage operations for calendar events
pub trait EventRepository: Send + Sync {
    /// Store a new event. Fails with `DuplicateEvent` if `(user_id, id)` exists.
    fn create_event(&self, event: Event) -> Result<(), EventStoreError>;

    /// Overwrite title, description and date of a stored event.
    fn update_event(&self, event: Event) -> Result<(), EventStoreError>;

    /// Remove a stored event.
    fn delete_event(&self, event: &Event) -> Result<(), EventStoreError>;

    /// Events on the same calendar day as `date`.
    fn events_for_day(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError>;

    /// Events within seven days of `date`, on either side.
    fn events_for_week(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError>;

    /// Events in the month of `date`.
    fn events_for_month(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError>;
}

/// Event store backed by a map from user id to that user's events,
/// in insertion order.
///
/// A user key is created by the first `create_event` for that user and is
/// never removed, so a user whose events were all deleted still queries as
/// an empty list rather than `UnknownUser`.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<i64, Vec<Event>>>,
    month_matching: MonthMatching,
}

impl InMemoryEventStore {
    /// Create an empty store with the default month matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given month matching
    pub fn with_month_matching(month_matching: MonthMatching) -> Self {
        Self {
            events: RwLock::default(),
            month_matching,
        }
    }

    /// Number of stored events across all users
    pub fn len(&self) -> usize {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<i64, Vec<Event>>>, EventStoreError> {
        self.events.read().map_err(|_| {
            tracing::error!("Event store lock poisoned (read)");
            EventStoreError::LockPoisoned
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<i64, Vec<Event>>>, EventStoreError> {
        self.events.write().map_err(|_| {
            tracing::error!("Event store lock poisoned (write)");
            EventStoreError::LockPoisoned
        })
    }

    /// Clone every event of `user_id` whose calendar date satisfies `matches`
    fn select<F>(&self, user_id: i64, matches: F) -> Result<Vec<Event>, EventStoreError>
    where
        F: Fn(NaiveDate) -> bool,
    {
        let events = self.read()?;
        let user_events = events.get(&user_id).ok_or(EventStoreError::UnknownUser)?;

        Ok(user_events
            .iter()
            .filter(|event| matches(event.calendar_date()))
            .cloned()
            .collect())
    }
}

impl EventRepository for InMemoryEventStore {
    fn create_event(&self, event: Event) -> Result<(), EventStoreError> {
        let mut events = self.write()?;
        let user_events = events.entry(event.user_id).or_default();

        if user_events.iter().any(|stored| stored.same_identity(&event)) {
            return Err(EventStoreError::DuplicateEvent);
        }

        tracing::debug!(user_id = event.user_id, event_id = event.id, "Event created");
        user_events.push(event);
        Ok(())
    }

    fn update_event(&self, event: Event) -> Result<(), EventStoreError> {
        let mut events = self.write()?;
        let stored = events
            .get_mut(&event.user_id)
            .and_then(|user_events| user_events.iter_mut().find(|stored| stored.id == event.id))
            .ok_or(EventStoreError::EventNotFound)?;

        stored.title = event.title;
        stored.description = event.description;
        stored.date = event.date;

        tracing::debug!(user_id = event.user_id, event_id = event.id, "Event updated");
        Ok(())
    }

    fn delete_event(&self, event: &Event) -> Result<(), EventStoreError> {
        let mut events = self.write()?;
        let user_events = events
            .get_mut(&event.user_id)
            .ok_or(EventStoreError::EventNotFound)?;
        let position = user_events
            .iter()
            .position(|stored| stored.id == event.id)
            .ok_or(EventStoreError::EventNotFound)?;

        user_events.remove(position);

        tracing::debug!(user_id = event.user_id, event_id = event.id, "Event deleted");
        Ok(())
    }

    fn events_for_day(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        self.select(user_id, |event_date| same_day(event_date, date))
    }

    fn events_for_week(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        self.select(user_id, |event_date| within_week(event_date, date))
    }

    fn events_for_month(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Event>, EventStoreError> {
        let matching = self.month_matching;
        self.select(user_id, |event_date| in_month(event_date, date, matching))
    }
}
