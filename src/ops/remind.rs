//! Foreground daily reminder loop.

use crate::config::Config;
use crate::constants::{REMINDER_BODY, REMINDER_TITLE};
use crate::errors::{AppError, AppResult};
use crate::journal_core::dates;
use crate::journal_io;
use crate::reminder::ReminderScheduler;
use std::thread;
use tracing::info;

/// Runs the reminder worker until the process is interrupted.
///
/// Reads the reminder time and the notifications switch from the program
/// record at startup; the worker itself recomputes the next occurrence every
/// day. When notifications are disabled this simply returns, the same way
/// the practice treats reminders as optional everywhere else.
pub fn run_reminder_loop(config: &Config) -> AppResult<()> {
    let program = journal_io::load_program(&config.journal_dir)?.ok_or(AppError::SetupRequired)?;

    if !program.notifications_enabled {
        println!(
            "Notifications are off. Enable them with `tenten settings --notifications true`."
        );
        return Ok(());
    }

    let reminder_time = dates::parse_reminder_time(&program.reminder_time)?;

    let mut scheduler = ReminderScheduler::new();
    scheduler.schedule(reminder_time, || {
        info!("Reminder fired");
        println!("{}: {}", REMINDER_TITLE, REMINDER_BODY);
    });

    info!("Reminder scheduled daily at {}", program.reminder_time);
    println!(
        "Reminder scheduled daily at {}. Press Ctrl-C to stop.",
        program.reminder_time
    );

    // The worker owns the timing; this thread only keeps the process alive.
    loop {
        thread::park();
    }
}
