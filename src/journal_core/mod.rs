//! Core journal logic without I/O operations.
//!
//! This module contains the entry data model, draft validation, and the
//! in-memory entry list, along with pure helpers for dates, streaks, and the
//! program window in the submodules. Nothing here touches the filesystem.

pub mod dates;
pub mod program;
pub mod streak;

use crate::constants::MAX_LIST_ITEMS;
use crate::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's recorded gratitudes, intentions, and reflections.
///
/// The `date` is the entry's identity: the entry list never holds two entries
/// for the same date, and re-saving a date replaces the previous entry whole.
/// `timestamp` records the instant of the last save and is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Canonical local calendar date, the unique key within the entry list.
    pub date: NaiveDate,
    /// Up to ten non-empty gratitude statements, in input order.
    pub gratitudes: Vec<String>,
    /// Up to ten non-empty intention statements, in input order.
    pub intentions: Vec<String>,
    /// Reflection after the gratitude list.
    #[serde(default)]
    pub reflection1: String,
    /// Reflection after the intention list.
    #[serde(default)]
    pub reflection2: String,
    /// Closing thoughts.
    #[serde(default)]
    pub notes: String,
    /// RFC 3339 instant of the last save. Not used by any business logic.
    #[serde(default)]
    pub timestamp: String,
}

/// Raw user input for a day's entry, before cleaning and validation.
///
/// A draft becomes a [`JournalEntry`] through [`EntryDraft::into_entry`],
/// which trims every field, drops empty list items (gaps in the ten input
/// positions collapse rather than leaving placeholders), caps both lists at
/// ten positions, and rejects drafts with no list content at all.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub gratitudes: Vec<String>,
    pub intentions: Vec<String>,
    pub reflection1: String,
    pub reflection2: String,
    pub notes: String,
}

impl EntryDraft {
    /// Cleans the draft and turns it into an entry for the given date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEntry`] if neither list has a single
    /// non-empty item after cleaning. The rule is deliberate: content in
    /// either list is enough to make the day count.
    pub fn into_entry(
        self,
        date: NaiveDate,
        timestamp: String,
    ) -> Result<JournalEntry, ValidationError> {
        let gratitudes = clean_items(self.gratitudes);
        let intentions = clean_items(self.intentions);

        if gratitudes.is_empty() && intentions.is_empty() {
            return Err(ValidationError::EmptyEntry);
        }

        Ok(JournalEntry {
            date,
            gratitudes,
            intentions,
            reflection1: self.reflection1.trim().to_string(),
            reflection2: self.reflection2.trim().to_string(),
            notes: self.notes.trim().to_string(),
            timestamp,
        })
    }
}

/// Trims items, drops the empty ones, and caps the list at its ten input
/// positions.
fn clean_items(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .take(MAX_LIST_ITEMS)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// The full collection of journal entries, keyed by date.
///
/// Insertion order is preserved but not meaningful; callers needing
/// chronological order use [`EntryList::sorted`]. The list upholds one
/// invariant: no two entries share a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<JournalEntry>,
}

impl EntryList {
    /// Creates an empty entry list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded collection of entries.
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        EntryList { entries }
    }

    /// Inserts the entry, replacing any existing entry with the same date.
    ///
    /// Replacement is whole-entry, never a field-level merge, so saving the
    /// same date twice leaves exactly one entry for that date.
    pub fn upsert(&mut self, entry: JournalEntry) {
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Returns the entry for the given date, if one exists.
    pub fn find(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Returns all entries in chronological order.
    pub fn sorted(&self) -> Vec<&JournalEntry> {
        let mut sorted: Vec<&JournalEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.date);
        sorted
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn draft_with_gratitudes(items: &[&str]) -> EntryDraft {
        EntryDraft {
            gratitudes: items.iter().map(|s| s.to_string()).collect(),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn test_into_entry_trims_and_drops_empty_items() {
        let draft = EntryDraft {
            gratitudes: vec![
                "  morning coffee ".to_string(),
                "".to_string(),
                "   ".to_string(),
                "a quiet walk".to_string(),
            ],
            intentions: vec!["\tfinish the draft\n".to_string()],
            reflection1: "  felt grounded  ".to_string(),
            ..EntryDraft::default()
        };

        let entry = draft
            .into_entry(date("2024-03-01"), "2024-03-01T08:00:00+00:00".to_string())
            .unwrap();

        assert_eq!(entry.gratitudes, vec!["morning coffee", "a quiet walk"]);
        assert_eq!(entry.intentions, vec!["finish the draft"]);
        assert_eq!(entry.reflection1, "felt grounded");
        assert_eq!(entry.reflection2, "");
    }

    #[test]
    fn test_into_entry_caps_lists_at_ten_positions() {
        let items: Vec<String> = (1..=12).map(|i| format!("item {}", i)).collect();
        let draft = EntryDraft {
            gratitudes: items,
            ..EntryDraft::default()
        };

        let entry = draft
            .into_entry(date("2024-03-01"), String::new())
            .unwrap();

        assert_eq!(entry.gratitudes.len(), 10);
        assert_eq!(entry.gratitudes[9], "item 10");
    }

    #[test]
    fn test_into_entry_rejects_empty_draft() {
        let draft = EntryDraft {
            gratitudes: vec!["   ".to_string()],
            intentions: vec!["".to_string()],
            notes: "only free text".to_string(),
            ..EntryDraft::default()
        };

        let result = draft.into_entry(date("2024-03-01"), String::new());
        assert_eq!(result.unwrap_err(), ValidationError::EmptyEntry);
    }

    #[test]
    fn test_into_entry_accepts_intentions_alone() {
        let draft = EntryDraft {
            intentions: vec!["ship the release".to_string()],
            ..EntryDraft::default()
        };

        assert!(draft.into_entry(date("2024-03-01"), String::new()).is_ok());
    }

    #[test]
    fn test_upsert_then_find_round_trips() {
        let mut list = EntryList::new();
        let entry = draft_with_gratitudes(&["sunlight"])
            .into_entry(date("2024-03-01"), String::new())
            .unwrap();

        list.upsert(entry.clone());

        assert_eq!(list.find(date("2024-03-01")), Some(&entry));
        assert_eq!(list.find(date("2024-03-02")), None);
    }

    #[test]
    fn test_upsert_same_date_replaces_in_place() {
        let mut list = EntryList::new();
        list.upsert(
            draft_with_gratitudes(&["first version"])
                .into_entry(date("2024-03-01"), String::new())
                .unwrap(),
        );
        list.upsert(
            draft_with_gratitudes(&["second version"])
                .into_entry(date("2024-03-01"), String::new())
                .unwrap(),
        );

        assert_eq!(list.len(), 1);
        assert_eq!(
            list.find(date("2024-03-01")).unwrap().gratitudes,
            vec!["second version"]
        );
    }

    #[test]
    fn test_sorted_is_chronological_regardless_of_insertion_order() {
        let mut list = EntryList::new();
        for day in ["2024-03-05", "2024-03-01", "2024-03-03"] {
            list.upsert(
                draft_with_gratitudes(&[day])
                    .into_entry(date(day), String::new())
                    .unwrap(),
            );
        }

        let dates: Vec<NaiveDate> = list.sorted().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-03-01"), date("2024-03-03"), date("2024-03-05")]
        );
    }

    #[test]
    fn test_clear_empties_the_list() {
        let mut list = EntryList::new();
        list.upsert(
            draft_with_gratitudes(&["something"])
                .into_entry(date("2024-03-01"), String::new())
                .unwrap(),
        );

        list.clear();

        assert!(list.is_empty());
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = JournalEntry {
            date: date("2024-03-01"),
            gratitudes: vec!["one".to_string()],
            intentions: vec![],
            reflection1: String::new(),
            reflection2: String::new(),
            notes: "done".to_string(),
            timestamp: "2024-03-01T20:15:00+01:00".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2024-03-01\""));

        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
