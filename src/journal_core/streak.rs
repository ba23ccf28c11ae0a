//! Consecutive-day streak calculation.

use super::dates::days_between;
use super::EntryList;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Current and longest consecutive-day streaks derived from the entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    /// Length of the run ending at (or adjacent to) today.
    pub current: u32,
    /// Length of the longest run anywhere in the history.
    pub longest: u32,
}

/// Computes the current and longest streaks as of `today`.
///
/// A pure function of `(entries, today)`. The current streak walks backward
/// one calendar day at a time, starting at `today` when an entry exists for
/// it and at yesterday otherwise — a day that simply has not been journaled
/// *yet* does not break a live streak. The walk has no artificial ceiling;
/// it stops only at the first missing date. The longest streak scans the
/// distinct dates in ascending order and keeps the maximum run of exactly
/// one-day gaps.
pub fn compute_streak(entries: &EntryList, today: NaiveDate) -> Streak {
    let dates: BTreeSet<NaiveDate> = entries.entries().iter().map(|e| e.date).collect();
    if dates.is_empty() {
        return Streak::default();
    }

    let mut cursor = if dates.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut current = 0u32;
    while dates.contains(&cursor) {
        current += 1;
        cursor = cursor - Duration::days(1);
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &date in &dates {
        run = match prev {
            Some(prev) if days_between(prev, date) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    Streak { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::JournalEntry;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn list_of(days: &[&str]) -> EntryList {
        let mut list = EntryList::new();
        for day in days {
            list.upsert(JournalEntry {
                date: date(day),
                gratitudes: vec!["something".to_string()],
                intentions: vec![],
                reflection1: String::new(),
                reflection2: String::new(),
                notes: String::new(),
                timestamp: String::new(),
            });
        }
        list
    }

    #[test]
    fn test_empty_list_has_no_streaks() {
        let streak = compute_streak(&EntryList::new(), date("2024-03-10"));
        assert_eq!(streak, Streak::default());
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let list = list_of(&["2024-03-06", "2024-03-07", "2024-03-08", "2024-03-09"]);
        let streak = compute_streak(&list, date("2024-03-09"));

        assert_eq!(streak.current, 4);
        assert_eq!(streak.longest, 4);
    }

    #[test]
    fn test_missing_today_does_not_break_the_streak() {
        let list = list_of(&["2024-03-07", "2024-03-08"]);
        let streak = compute_streak(&list, date("2024-03-09"));

        assert_eq!(streak.current, 2);
    }

    #[test]
    fn test_two_day_old_history_is_not_current() {
        let list = list_of(&["2024-03-06", "2024-03-07"]);
        let streak = compute_streak(&list, date("2024-03-09"));

        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn test_gap_caps_current_at_the_recent_run() {
        let list = list_of(&[
            "2024-03-01",
            "2024-03-02",
            "2024-03-03",
            // gap on the 4th
            "2024-03-05",
            "2024-03-06",
        ]);
        let streak = compute_streak(&list, date("2024-03-06"));

        assert_eq!(streak.current, 2);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_longest_counts_the_final_run() {
        let list = list_of(&["2024-02-01", "2024-02-02", "2024-03-05", "2024-03-06", "2024-03-07"]);
        let streak = compute_streak(&list, date("2024-03-07"));

        assert_eq!(streak.longest, 3);
        assert_eq!(streak.current, 3);
    }

    #[test]
    fn test_single_entry_today_counts_as_one() {
        let list = list_of(&["2024-03-09"]);
        let streak = compute_streak(&list, date("2024-03-09"));

        assert_eq!(streak, Streak { current: 1, longest: 1 });
    }

    #[test]
    fn test_single_stale_entry_has_longest_one() {
        let list = list_of(&["2024-03-01"]);
        let streak = compute_streak(&list, date("2024-03-09"));

        assert_eq!(streak, Streak { current: 0, longest: 1 });
    }

    #[test]
    fn test_current_streak_spans_month_boundary() {
        let list = list_of(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        let streak = compute_streak(&list, date("2024-03-01"));

        assert_eq!(streak.current, 3);
    }

    #[test]
    fn test_long_unbroken_history_is_not_capped() {
        let mut list = EntryList::new();
        let start = date("2023-01-01");
        for offset in 0..400 {
            list.upsert(JournalEntry {
                date: start + Duration::days(offset),
                gratitudes: vec!["daily".to_string()],
                intentions: vec![],
                reflection1: String::new(),
                reflection2: String::new(),
                notes: String::new(),
                timestamp: String::new(),
            });
        }

        let streak = compute_streak(&list, start + Duration::days(399));
        assert_eq!(streak.current, 400);
        assert_eq!(streak.longest, 400);
    }
}
