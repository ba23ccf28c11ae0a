//! Error handling utilities for the tenten application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents user-correctable validation failures.
///
/// These errors are reported back to the user so the input can be fixed and the
/// operation retried; the journal store is never modified when one is raised.
///
/// # Examples
///
/// ```
/// use tenten::errors::ValidationError;
///
/// let error = ValidationError::EmptyEntry;
/// assert!(format!("{}", error).contains("at least one"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted entry has no content in either list after cleaning.
    #[error("An entry needs at least one gratitude or intention before it can be saved")]
    EmptyEntry,

    /// A date string did not parse as a calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A reminder time string did not parse as a 24-hour clock time.
    #[error("Invalid reminder time '{value}': expected HH:MM in 24-hour local time")]
    InvalidReminderTime {
        /// The rejected input.
        value: String,
    },

    /// A program length outside the accepted range was supplied.
    #[error("Invalid program length {value}: expected between 1 and {max} days")]
    InvalidProgramLength {
        /// The rejected length.
        value: u32,
        /// The largest accepted length.
        max: u32,
    },
}

/// Represents all possible errors that can occur in the tenten application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use tenten::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use tenten::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User-correctable validation failures.
    ///
    /// This variant uses the dedicated ValidationError type so callers can
    /// distinguish "fix your input" conditions from real failures.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An entry, status, or settings operation was attempted before setup.
    #[error("No journal program configured yet. Run `tenten setup` to begin.")]
    SetupRequired,

    /// Errors in journal logic that are not validation failures.
    #[error("Journal error: {0}")]
    Journal(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;
