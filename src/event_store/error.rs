//! Event Store Errors
//!
//! Error types for event store operations.

/// Errors that can occur in the event store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventStoreError {
    /// An event with the same (user_id, id) is already stored
    #[error("duplicate event")]
    DuplicateEvent,

    /// No stored event matches (user_id, id)
    #[error("event not found")]
    EventNotFound,

    /// The user has never had an event recorded
    #[error("unknown user")]
    UnknownUser,

    /// A writer panicked while holding the store lock
    #[error("event store lock poisoned")]
    LockPoisoned,
}

impl EventStoreError {
    /// Check if this error is a rejection by store invariants
    /// (the request itself was well-formed)
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            EventStoreError::DuplicateEvent
                | EventStoreError::EventNotFound
                | EventStoreError::UnknownUser
        )
    }
}
