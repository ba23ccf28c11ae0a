//! Constants used throughout the application.
//!
//! This module contains all constants used in the tenten application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "tenten";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A daily gratitude and intention journal for the 10-10 practice";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the tenten journal directory.
pub const ENV_VAR_TENTEN_DIR: &str = "TENTEN_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = ".tenten";

// Persisted Records
/// File name of the program configuration record.
pub const PROGRAM_RECORD_FILE: &str = "program.json";
/// File name of the journal entries record.
pub const ENTRIES_RECORD_FILE: &str = "entries.json";

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Journal Shape
/// Number of list positions per entry for gratitudes and for intentions.
pub const MAX_LIST_ITEMS: usize = 10;
/// Largest accepted program length, in days.
pub const MAX_PROGRAM_LENGTH_DAYS: u32 = 365;

// Date/Time Logic
/// Date format string for the canonical date identifier (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format for human-readable display.
pub const DATE_FORMAT_LONG: &str = "%A, %B %d, %Y";
/// Time format for the daily reminder (24-hour HH:MM).
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

// Reminders
/// Title line used when a reminder fires.
pub const REMINDER_TITLE: &str = "10-10 Journal";
/// Body text used when a reminder fires.
pub const REMINDER_BODY: &str = "Time to record your gratitudes and intentions";

// Export
/// Suggested file name for CSV exports.
pub const EXPORT_FILENAME: &str = "tenten-journal.csv";

// Logging Configuration
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
