//! Persisted-record I/O for the journal.
//!
//! Two records live under the journal directory, each read and written as a
//! whole JSON document: the program configuration and the entry list. Reads
//! treat a malformed record as absent — the store then degrades to first-run
//! setup instead of failing, a deliberate data-loss-tolerant fallback — while
//! genuine filesystem failures still surface as errors. Writes replace the
//! record file in full; no cross-process coordination is attempted, so the
//! last writer wins.

use crate::constants::{ENTRIES_RECORD_FILE, PROGRAM_RECORD_FILE};
use crate::errors::{AppError, AppResult};
use crate::journal_core::program::ProgramConfig;
use crate::journal_core::{EntryList, JournalEntry};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ensures the journal directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_journal_directory_exists(journal_dir: &Path) -> AppResult<()> {
    if !journal_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Journal directory path must be absolute: {}",
            journal_dir.display()
        )));
    }

    if !journal_dir.exists() {
        fs::create_dir_all(journal_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create journal directory: {}", e),
            ))
        })?;

        // Entries are personal; keep the directory owner-only.
        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            use std::os::unix::fs::PermissionsExt;

            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(journal_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on journal directory: {}", e),
                ))
            })?;
        }
    }
    Ok(())
}

/// Path of the program configuration record.
pub fn program_record_path(journal_dir: &Path) -> PathBuf {
    journal_dir.join(PROGRAM_RECORD_FILE)
}

/// Path of the entries record.
pub fn entries_record_path(journal_dir: &Path) -> PathBuf {
    journal_dir.join(ENTRIES_RECORD_FILE)
}

/// Loads the program configuration record.
///
/// Returns `Ok(None)` when the record is missing or malformed; a malformed
/// record is logged and treated as absent so the caller routes the user to
/// setup rather than crashing.
///
/// # Errors
///
/// Returns `AppError::Io` only for real filesystem failures (for example a
/// permission error); a missing file is not an error.
pub fn load_program(journal_dir: &Path) -> AppResult<Option<ProgramConfig>> {
    let path = program_record_path(journal_dir);
    let raw = match read_record(&path)? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    match serde_json::from_str::<ProgramConfig>(&raw) {
        Ok(program) => Ok(Some(program)),
        Err(e) => {
            warn!(
                "Program record at {} is malformed ({}); treating it as absent",
                path.display(),
                e
            );
            Ok(None)
        }
    }
}

/// Writes the program configuration record, replacing any previous one.
pub fn save_program(journal_dir: &Path, program: &ProgramConfig) -> AppResult<()> {
    let path = program_record_path(journal_dir);
    let json = serde_json::to_string_pretty(program)
        .map_err(|e| AppError::Journal(format!("Failed to serialize program record: {}", e)))?;
    fs::write(&path, json)?;
    debug!("Saved program record to {}", path.display());
    Ok(())
}

/// Loads the entries record.
///
/// Returns an empty list when the record is missing or malformed, mirroring
/// the program record's fallback behavior.
///
/// # Errors
///
/// Returns `AppError::Io` only for real filesystem failures.
pub fn load_entries(journal_dir: &Path) -> AppResult<EntryList> {
    let path = entries_record_path(journal_dir);
    let raw = match read_record(&path)? {
        Some(raw) => raw,
        None => return Ok(EntryList::new()),
    };

    match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
        Ok(entries) => Ok(EntryList::from_entries(entries)),
        Err(e) => {
            warn!(
                "Entries record at {} is malformed ({}); starting from an empty list",
                path.display(),
                e
            );
            Ok(EntryList::new())
        }
    }
}

/// Writes the entries record, replacing any previous one.
pub fn save_entries(journal_dir: &Path, entries: &EntryList) -> AppResult<()> {
    let path = entries_record_path(journal_dir);
    let json = serde_json::to_string_pretty(entries.entries())
        .map_err(|e| AppError::Journal(format!("Failed to serialize entries record: {}", e)))?;
    fs::write(&path, json)?;
    debug!(
        "Saved {} entries to {}",
        entries.len(),
        path.display()
    );
    Ok(())
}

/// Removes both persisted records.
///
/// Records that are already absent are skipped, so reset is idempotent. The
/// two removals are not transactional; from the caller's perspective a reset
/// that returns `Ok` has cleared both.
pub fn reset(journal_dir: &Path) -> AppResult<()> {
    for path in [
        program_record_path(journal_dir),
        entries_record_path(journal_dir),
    ] {
        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Reads a record file to a string, mapping "missing" to `None`.
fn read_record(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
