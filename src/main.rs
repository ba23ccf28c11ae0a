/*!
# tenten - A Daily Gratitude and Intention Journal

Tenten is a command-line tool for the "10-10" practice: ten gratitude
statements and ten intention statements a day, with reflections, streak
tracking, and CSV export.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
tenten <COMMAND>

Commands:
  setup     Configure the journal program and begin the practice
  record    Record today's gratitudes and intentions
  status    Show program progress, entry count, and streaks
  history   List recorded entries
  export    Export all entries as CSV
  settings  Show or change reminder settings
  remind    Run the daily reminder loop in the foreground
  reset     Delete the program configuration and all entries
```

## Configuration

The application can be configured with the following environment variables:
- `TENTEN_DIR`: The directory to store journal records (defaults to "~/.tenten")
- `RUST_LOG`: Log filter for diagnostic output (defaults to "info")
*/

use clap::Parser;
use tenten::cli::{CliArgs, Command};
use tenten::config::Config;
use tenten::constants::DEFAULT_LOG_LEVEL;
use tenten::errors::AppResult;
use tenten::journal_core::EntryDraft;
use tenten::ops;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Dispatches to the requested operation
fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    // Diagnostics go to stderr so exported CSV on stdout stays clean.
    let default_level = if args.verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tenten");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration loaded");

    match args.command {
        Command::Setup(setup) => ops::setup_program(
            &config,
            &setup.start_date,
            &setup.reminder,
            setup.length,
            setup.notifications,
            setup.force,
        ),
        Command::Record(record) => ops::record_entry(
            &config,
            EntryDraft {
                gratitudes: record.gratitudes,
                intentions: record.intentions,
                reflection1: record.reflection1.unwrap_or_default(),
                reflection2: record.reflection2.unwrap_or_default(),
                notes: record.notes.unwrap_or_default(),
            },
        ),
        Command::Status => ops::show_status(&config),
        Command::History => ops::show_history(&config),
        Command::Export(export) => ops::export_entries(&config, export.output.as_deref()),
        Command::Settings(settings) => ops::show_or_update_settings(
            &config,
            settings.reminder.as_deref(),
            settings.notifications,
        ),
        Command::Remind => ops::run_reminder_loop(&config),
        Command::Reset(reset) => ops::reset_journal(&config, reset.yes),
    }
}
