//! CSV export of the full history.

use crate::config::Config;
use crate::constants::EXPORT_FILENAME;
use crate::errors::AppResult;
use crate::export::to_csv;
use crate::journal_io;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes every entry to CSV, writing to `output` or stdout.
///
/// Export needs no program record: an empty store still produces the header
/// line, so history can be pulled out of a half-configured installation.
pub fn export_entries(config: &Config, output: Option<&Path>) -> AppResult<()> {
    let entries = journal_io::load_entries(&config.journal_dir)?;
    let csv = to_csv(&entries);

    match output {
        Some(path) => {
            fs::write(path, &csv)?;
            info!("Exported {} entries to {}", entries.len(), path.display());
            println!(
                "Exported {} entr{} to {}.",
                entries.len(),
                if entries.len() == 1 { "y" } else { "ies" },
                path.display()
            );
        }
        None => {
            // Suggested download name for callers piping to a file.
            info!("Writing CSV to stdout (suggested filename: {})", EXPORT_FILENAME);
            print!("{}", csv);
        }
    }

    Ok(())
}
