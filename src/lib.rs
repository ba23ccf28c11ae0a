/*!
# tenten

Tenten is a journal for the daily "10-10" practice: each day the user records
up to ten things they are grateful for and ten things they intend to
co-create, pauses for two reflections, and adds closing thoughts. Entries are
stored locally, consecutive-day streaks are derived from the history, and the
whole journal exports to CSV.

## Core Features

- Record or replace today's gratitudes, intentions, and reflections
- Track current and longest consecutive-day streaks
- Run a fixed-length or open-ended program from a configured start date
- Daily reminder scheduling at a configured local time
- CSV export of the full history

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Pure journal logic — entries, dates, streaks, the program window
- `journal_io`: Persisted-record reading and writing
- `export`: CSV serialization
- `reminder`: Cancellable daily reminder scheduling
- `ops`: One orchestration function per user operation

## Usage Example

```rust,no_run
use tenten::config::Config;
use tenten::journal_core::{dates, streak};
use tenten::journal_io;

fn main() -> tenten::AppResult<()> {
    // Load configuration
    let config = Config::load()?;

    // Read the history and compute streaks as of today
    let entries = journal_io::load_entries(&config.journal_dir)?;
    let streak = streak::compute_streak(&entries, dates::today());
    println!("current streak: {} days", streak.current);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CSV export of the journal history
pub mod export;
/// Pure journal logic: entries, dates, streaks, program window
pub mod journal_core;
/// Persisted-record I/O
pub mod journal_io;
/// User-facing operations
pub mod ops;
/// Daily reminder scheduling
pub mod reminder;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::program::{ProgramConfig, ProgramPhase};
pub use journal_core::streak::{compute_streak, Streak};
pub use journal_core::{EntryDraft, EntryList, JournalEntry};
