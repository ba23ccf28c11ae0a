//! CSV export of the journal history.
//!
//! A pure transform from the entry list to CSV text; writing the result to a
//! file belongs to the caller. The layout is fixed at 25 columns — the date,
//! ten gratitude columns, ten intention columns, and the three free-text
//! fields — so every row has the same width and missing list items show up
//! as empty fields rather than shifted columns.

use crate::constants::MAX_LIST_ITEMS;
use crate::journal_core::{EntryList, JournalEntry};

/// Serializes the full entry list as CSV, chronologically ordered.
///
/// Every data field is double-quoted, embedded quotes are doubled, and
/// newlines inside free-text fields collapse to a single space so each entry
/// occupies exactly one line. An empty list produces the header line only.
pub fn to_csv(entries: &EntryList) -> String {
    let mut out = String::new();
    out.push_str(&header_row());
    out.push('\n');

    for entry in entries.sorted() {
        out.push_str(&entry_row(entry));
        out.push('\n');
    }

    out
}

fn header_row() -> String {
    let mut columns = Vec::with_capacity(2 * MAX_LIST_ITEMS + 4);
    columns.push("date".to_string());
    for i in 1..=MAX_LIST_ITEMS {
        columns.push(format!("gratitude_{}", i));
    }
    for i in 1..=MAX_LIST_ITEMS {
        columns.push(format!("intention_{}", i));
    }
    columns.push("reflection1".to_string());
    columns.push("reflection2".to_string());
    columns.push("notes".to_string());
    columns.join(",")
}

fn entry_row(entry: &JournalEntry) -> String {
    let mut fields = Vec::with_capacity(2 * MAX_LIST_ITEMS + 4);
    fields.push(quote(&entry.date.to_string()));
    for i in 0..MAX_LIST_ITEMS {
        fields.push(quote(entry.gratitudes.get(i).map_or("", String::as_str)));
    }
    for i in 0..MAX_LIST_ITEMS {
        fields.push(quote(entry.intentions.get(i).map_or("", String::as_str)));
    }
    fields.push(quote(&entry.reflection1));
    fields.push(quote(&entry.reflection2));
    fields.push(quote(&entry.notes));
    fields.join(",")
}

/// Quotes one field: newlines collapse to a space, embedded quotes double.
fn quote(field: &str) -> String {
    let flat = field.replace("\r\n", " ").replace(['\r', '\n'], " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}
