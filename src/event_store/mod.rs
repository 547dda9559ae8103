//! Event Store module
//!
//! In-memory, lock-guarded storage of calendar events keyed by user.

mod error;
mod repository;

pub use error::EventStoreError;
pub use repository::{EventRepository, InMemoryEventStore};
