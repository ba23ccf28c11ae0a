//! Entry history listing.

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::dates;
use crate::journal_io;

/// Prints a per-entry summary table, oldest first.
pub fn show_history(config: &Config) -> AppResult<()> {
    let entries = journal_io::load_entries(&config.journal_dir)?;

    if entries.is_empty() {
        println!("No entries yet. Record your first day!");
        return Ok(());
    }

    println!(
        "You have recorded {} entr{}.",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    println!();
    println!(
        "{:<12}  {:>10}  {:>10}  {:<30}  {:<30}",
        "date", "gratitudes", "intentions", "first gratitude", "first intention"
    );

    for entry in entries.sorted() {
        println!(
            "{:<12}  {:>10}  {:>10}  {:<30}  {:<30}",
            dates::format_date(entry.date),
            entry.gratitudes.len(),
            entry.intentions.len(),
            truncate(entry.gratitudes.first().map_or("", String::as_str), 30),
            truncate(entry.intentions.first().map_or("", String::as_str), 30),
        );
    }

    Ok(())
}

/// Clips long items so the table stays one line per entry.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", clipped)
    }
}
