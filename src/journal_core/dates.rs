//! Date and time helpers for the journal core.
//!
//! The canonical entry key is a local calendar date rendered as `YYYY-MM-DD`.
//! "Local" is load-bearing: deriving the day from UTC would report yesterday
//! for any user behind UTC until their clock passes midnight UTC, so all
//! current-day logic starts from the local clock.

use crate::constants::{DATE_FORMAT_ISO, DATE_FORMAT_LONG, REMINDER_TIME_FORMAT};
use crate::errors::ValidationError;
use chrono::{Local, NaiveDate, NaiveTime};

/// Returns the current calendar date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the current instant as an RFC 3339 string, for entry timestamps.
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339()
}

/// Whole-day count from `a` to `b`, positive when `b` is later.
///
/// Computed on date-only values, so daylight-saving transitions between the
/// two dates cannot produce fractional-day drift.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Parses a canonical `YYYY-MM-DD` date identifier.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] carrying the rejected input.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT_ISO).map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Renders the canonical `YYYY-MM-DD` identifier for a date.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Renders a human-readable long form, e.g. `Friday, March 01, 2024`.
pub fn format_long(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_LONG).to_string()
}

/// Parses a 24-hour `HH:MM` reminder time.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidReminderTime`] carrying the rejected
/// input.
pub fn parse_reminder_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, REMINDER_TIME_FORMAT).map_err(|_| {
        ValidationError::InvalidReminderTime {
            value: value.to_string(),
        }
    })
}
