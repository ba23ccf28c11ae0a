//! Configuration management for the tenten application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! journal data directory, which holds the two persisted records (the program
//! configuration and the entry list).
//!
//! # Environment Variables
//!
//! - `TENTEN_DIR`: Path to the journal data directory (defaults to ~/.tenten)
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{DEFAULT_JOURNAL_SUBDIR, ENV_VAR_HOME, ENV_VAR_TENTEN_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the tenten application.
///
/// This struct holds the settings needed to locate persisted journal state.
/// Everything the user configures about the practice itself (start date,
/// reminder time, program length) lives in the persisted program record, not
/// here.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use tenten::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
/// };
/// ```
pub struct Config {
    /// Directory where the journal records are stored.
    ///
    /// This is loaded from the TENTEN_DIR environment variable with a fallback
    /// to ~/.tenten if not specified.
    pub journal_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads the journal directory from `TENTEN_DIR`, falling back to
    /// `~/.tenten`, and expands the path using `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal directory path expansion fails
    /// - The resulting path is empty
    pub fn load() -> AppResult<Self> {
        let journal_dir_str = env::var(ENV_VAR_TENTEN_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&journal_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let journal_dir = PathBuf::from(expanded_path.into_owned());

        if journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        Ok(Config { journal_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Journal directory path is empty" if the journal directory path is empty
    /// - "Journal directory must be an absolute path" if the path is relative
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
