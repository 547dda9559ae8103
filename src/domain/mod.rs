//! Domain module
//!
//! Core domain types and date-window rules.

pub mod event;
pub mod period;

pub use event::Event;
pub use period::{MonthMatching, UnknownMonthMatching};
