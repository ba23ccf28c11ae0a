//! Program configuration and window classification.
//!
//! A practice runs from a configured start date, either open-ended or for a
//! fixed number of days that counts the start date itself. Classifying
//! "today" against that window decides whether entry recording is open.

use super::dates::{self, days_between};
use crate::constants::MAX_PROGRAM_LENGTH_DAYS;
use crate::errors::ValidationError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The persisted program configuration record.
///
/// Created once during setup, mutated by settings changes, destroyed by
/// reset (which also destroys all entries). The record serializes with
/// camelCase keys (`startDate`, `reminderTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramConfig {
    /// Day 1 of the practice.
    pub start_date: NaiveDate,
    /// Fixed length in days, counting the start date; `None` is open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_length: Option<u32>,
    /// Daily reminder time as a 24-hour `HH:MM` local time string.
    pub reminder_time: String,
    /// Whether reminder notifications are wanted.
    #[serde(default)]
    pub notifications_enabled: bool,
    /// Whether first-run setup has completed.
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl ProgramConfig {
    /// Builds a validated program configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the reminder time is not a valid
    /// `HH:MM` string or the length falls outside 1..=365 days.
    pub fn new(
        start_date: NaiveDate,
        program_length: Option<u32>,
        reminder_time: &str,
        notifications_enabled: bool,
    ) -> Result<Self, ValidationError> {
        dates::parse_reminder_time(reminder_time)?;

        if let Some(length) = program_length {
            if length == 0 || length > MAX_PROGRAM_LENGTH_DAYS {
                return Err(ValidationError::InvalidProgramLength {
                    value: length,
                    max: MAX_PROGRAM_LENGTH_DAYS,
                });
            }
        }

        Ok(ProgramConfig {
            start_date,
            program_length,
            reminder_time: reminder_time.to_string(),
            notifications_enabled,
            onboarding_complete: true,
        })
    }
}

/// Where "today" falls relative to the configured program window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramPhase {
    /// Today is before the start date.
    NotStarted,
    /// Today is within the window (or the program is open-ended).
    Active,
    /// A fixed-length program whose last day has passed.
    Completed,
}

/// Classifies `today` against the program window. Pure, no side effects.
///
/// The window is inclusive of the start date: a 5-day program starting
/// 2024-01-01 is active through 2024-01-05 and completed from 2024-01-06.
pub fn classify(config: &ProgramConfig, today: NaiveDate) -> ProgramPhase {
    if today < config.start_date {
        return ProgramPhase::NotStarted;
    }
    if let Some(end) = end_date(config) {
        if today > end {
            return ProgramPhase::Completed;
        }
    }
    ProgramPhase::Active
}

/// Last day of a fixed-length program, `None` for open-ended programs.
pub fn end_date(config: &ProgramConfig) -> Option<NaiveDate> {
    let length = config.program_length?;
    config
        .start_date
        .checked_add_days(Days::new(u64::from(length.saturating_sub(1))))
}

/// One-based day number within the program, `None` before the start date.
///
/// Keeps counting past the end of a fixed-length program; display code pairs
/// it with [`classify`] to decide what to show.
pub fn day_number(config: &ProgramConfig, today: NaiveDate) -> Option<i64> {
    let offset = days_between(config.start_date, today);
    if offset < 0 {
        None
    } else {
        Some(offset + 1)
    }
}
