//! Show or change the mutable program settings.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::dates;
use crate::journal_core::program;
use crate::journal_io;
use tracing::info;

/// With no arguments, prints the current settings; otherwise applies the
/// given changes and saves the program record.
///
/// Only the reminder time and the notifications switch are mutable; the
/// start date and program length are fixed at setup (reset to change them).
pub fn show_or_update_settings(
    config: &Config,
    reminder: Option<&str>,
    notifications: Option<bool>,
) -> AppResult<()> {
    let mut program = journal_io::load_program(&config.journal_dir)?.ok_or(AppError::SetupRequired)?;

    if reminder.is_none() && notifications.is_none() {
        println!("Start date:      {}", dates::format_date(program.start_date));
        match program.program_length {
            Some(days) => println!("Program length:  {} days", days),
            None => println!("Program length:  open-ended"),
        }
        if let Some(end) = program::end_date(&program) {
            println!("Last day:        {}", dates::format_date(end));
        }
        println!("Reminder time:   {}", program.reminder_time);
        println!(
            "Notifications:   {}",
            if program.notifications_enabled { "on" } else { "off" }
        );
        return Ok(());
    }

    if let Some(time) = reminder {
        dates::parse_reminder_time(time)?;
        program.reminder_time = time.to_string();
    }
    if let Some(enabled) = notifications {
        program.notifications_enabled = enabled;
    }

    journal_io::save_program(&config.journal_dir, &program)?;
    info!("Settings updated");
    println!("Settings updated.");

    Ok(())
}
