//! Query periods
//!
//! Date-window rules used by the day/week/month range queries.
//! All comparisons are made on UTC calendar dates.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Half-width of the week window, in days (inclusive)
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// How `events_for_month` decides that an event falls in the requested month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthMatching {
    /// Year matches OR month number matches.
    ///
    /// Mirrors the behaviour of the deployed calendar service, where an event
    /// on 2023-06-01 is part of "2024-06" and every 2024 event is part of it too.
    #[default]
    Lenient,

    /// Year AND month match.
    Calendar,
}

/// Error returned when parsing an unknown month matching mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown month matching mode: {0}")]
pub struct UnknownMonthMatching(pub String);

impl FromStr for MonthMatching {
    type Err = UnknownMonthMatching;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "calendar" => Ok(Self::Calendar),
            other => Err(UnknownMonthMatching(other.to_string())),
        }
    }
}

impl fmt::Display for MonthMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

/// Same calendar day
pub fn same_day(event_date: NaiveDate, date: NaiveDate) -> bool {
    event_date == date
}

/// Within `WEEK_WINDOW_DAYS` days of `date`, on either side
pub fn within_week(event_date: NaiveDate, date: NaiveDate) -> bool {
    (event_date - date).num_days().abs() <= WEEK_WINDOW_DAYS
}

/// In the month of `date` according to `matching`
pub fn in_month(event_date: NaiveDate, date: NaiveDate, matching: MonthMatching) -> bool {
    let same_year = event_date.year() == date.year();
    let same_month = event_date.month() == date.month();

    match matching {
        MonthMatching::Lenient => same_year || same_month,
        MonthMatching::Calendar => same_year && same_month,
    }
}
