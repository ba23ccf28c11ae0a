//! First-run setup of the journal program.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::dates;
use crate::journal_core::program::ProgramConfig;
use crate::journal_core::EntryList;
use crate::journal_io;
use tracing::info;

/// Creates the program record and an empty entries record.
///
/// Setup is the one operation that may run before any state exists. An
/// existing program is only replaced when `force` is set, because replacing
/// it also wipes the recorded entries.
pub fn setup_program(
    config: &Config,
    start_date: &str,
    reminder: &str,
    length: Option<u32>,
    notifications: bool,
    force: bool,
) -> AppResult<()> {
    let start = dates::parse_date(start_date)?;
    let program = ProgramConfig::new(start, length, reminder, notifications)?;

    journal_io::ensure_journal_directory_exists(&config.journal_dir)?;

    if !force && journal_io::load_program(&config.journal_dir)?.is_some() {
        return Err(AppError::Journal(
            "A journal program already exists; re-run with --force to replace it and delete all entries".to_string(),
        ));
    }

    journal_io::save_program(&config.journal_dir, &program)?;
    journal_io::save_entries(&config.journal_dir, &EntryList::new())?;

    info!("Program configured starting {}", start);

    println!(
        "Journal configured. Your practice begins on {}.",
        dates::format_long(start)
    );
    match length {
        Some(days) => println!("The program runs for {} days, start date included.", days),
        None => println!("The program is open-ended."),
    }
    println!(
        "Daily reminder time: {}{}",
        program.reminder_time,
        if notifications { "" } else { " (notifications off)" }
    );

    Ok(())
}
