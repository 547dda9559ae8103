//! Shared application state

use std::sync::Arc;

use crate::event_store::{EventRepository, InMemoryEventStore};

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventRepository>) -> Self {
        Self { store }
    }

    /// State over an in-memory store
    pub fn in_memory(store: InMemoryEventStore) -> Self {
        Self::new(Arc::new(store))
    }
}
