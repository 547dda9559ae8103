//! calendar_api Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
pub mod event_store;
pub mod server;

mod error;

pub use config::{Config, ConfigError};
pub use domain::{Event, MonthMatching};
pub use error::{AppError, AppResult};
pub use event_store::{EventRepository, EventStoreError, InMemoryEventStore};
pub use server::Server;
