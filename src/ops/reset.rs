//! Reset the journal to its unconfigured state.

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_io;
use tracing::info;

/// Removes the program record and all entries.
///
/// Without `yes` nothing is deleted; the operation describes what it would
/// remove and asks to be re-run with the flag.
pub fn reset_journal(config: &Config, yes: bool) -> AppResult<()> {
    if !yes {
        println!(
            "This removes the journal program and all recorded entries under {}.",
            config.journal_dir.display()
        );
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    journal_io::reset(&config.journal_dir)?;
    info!("Journal reset");
    println!("Journal reset. Run `tenten setup` to begin again.");

    Ok(())
}
