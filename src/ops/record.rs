//! Record or replace today's entry.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::dates;
use crate::journal_core::program::{self, ProgramPhase};
use crate::journal_core::EntryDraft;
use crate::journal_io;
use tracing::info;

/// Validates the draft and upserts it as today's entry.
///
/// Outside the program window nothing is saved: before the start date and
/// after a fixed-length program's end the user gets guidance instead of an
/// error, matching how the practice is meant to be paced.
pub fn record_entry(config: &Config, draft: EntryDraft) -> AppResult<()> {
    let program = journal_io::load_program(&config.journal_dir)?.ok_or(AppError::SetupRequired)?;
    let today = dates::today();

    match program::classify(&program, today) {
        ProgramPhase::NotStarted => {
            println!(
                "Your journal begins on {}. Come back then to record your first entry.",
                dates::format_date(program.start_date)
            );
            return Ok(());
        }
        ProgramPhase::Completed => {
            // end_date is always Some for a completed program.
            if let Some(end) = program::end_date(&program) {
                println!(
                    "Your journal ended on {}. Review your history or reset to begin again.",
                    dates::format_date(end)
                );
            }
            return Ok(());
        }
        ProgramPhase::Active => {}
    }

    let entry = draft.into_entry(today, dates::now_timestamp())?;
    let mut entries = journal_io::load_entries(&config.journal_dir)?;
    let replacing = entries.find(today).is_some();
    entries.upsert(entry);
    journal_io::save_entries(&config.journal_dir, &entries)?;

    info!("Entry saved for {}", today);

    if replacing {
        println!("Entry for {} replaced.", dates::format_date(today));
    } else {
        println!(
            "Entry saved for {}. Thank you for practicing gratitude and intention setting.",
            dates::format_date(today)
        );
    }

    Ok(())
}
