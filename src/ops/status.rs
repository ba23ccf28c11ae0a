//! Program progress and streak display.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::dates;
use crate::journal_core::program::{self, ProgramPhase};
use crate::journal_core::streak::compute_streak;
use crate::journal_io;

/// Prints where the program stands today, plus entry and streak counts.
///
/// The streak figures are the pure calculation: a day that has not been
/// journaled yet is not rounded up.
pub fn show_status(config: &Config) -> AppResult<()> {
    let program = journal_io::load_program(&config.journal_dir)?.ok_or(AppError::SetupRequired)?;
    let entries = journal_io::load_entries(&config.journal_dir)?;
    let today = dates::today();

    match program::classify(&program, today) {
        ProgramPhase::NotStarted => {
            let away = dates::days_between(today, program.start_date);
            println!(
                "Program begins on {} ({} day{} away).",
                dates::format_date(program.start_date),
                away,
                if away == 1 { "" } else { "s" }
            );
        }
        ProgramPhase::Active => match (program::day_number(&program, today), program.program_length)
        {
            (Some(day), Some(length)) => println!("Day {} of {}.", day, length),
            (Some(day), None) => println!("Day {} of an open-ended program.", day),
            _ => {}
        },
        ProgramPhase::Completed => {
            if let Some(end) = program::end_date(&program) {
                println!("Program completed on {}.", dates::format_date(end));
            }
        }
    }

    let streak = compute_streak(&entries, today);
    let recorded_today = entries.find(today).is_some();

    println!("Entries recorded: {}", entries.len());
    println!(
        "Today: {}",
        if recorded_today { "recorded" } else { "not recorded yet" }
    );
    println!("Current streak: {} day{}", streak.current, plural(streak.current));
    println!("Longest streak: {} day{}", streak.longest, plural(streak.longest));

    Ok(())
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
