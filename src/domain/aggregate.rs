//! Derived views over the entry sequence: recency window and totals

use crate::domain::Entry;
use chrono::NaiveDate;

/// Number of days in the default recency window
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// Bounds of the recency window.
///
/// An entry is recent when `reference - entry.date` is at most `days` whole
/// days. Entries dated after the reference day have a negative difference and
/// pass unless `exclude_future` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    pub days: i64,
    pub exclude_future: bool,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        RecencyWindow {
            days: DEFAULT_RECENT_DAYS,
            exclude_future: false,
        }
    }
}

impl RecencyWindow {
    pub fn contains(&self, entry_date: NaiveDate, reference: NaiveDate) -> bool {
        let diff = (reference - entry_date).num_days();
        if self.exclude_future && diff < 0 {
            return false;
        }
        diff <= self.days
    }
}

/// Entries inside the recency window, oldest first.
///
/// The sort is stable: entries sharing a date keep their insertion order.
pub fn recent_entries(entries: &[Entry], reference: NaiveDate, window: RecencyWindow) -> Vec<Entry> {
    let mut recent: Vec<Entry> = entries
        .iter()
        .filter(|entry| window.contains(entry.date, reference))
        .cloned()
        .collect();
    recent.sort_by_key(|entry| entry.date);
    recent
}

/// All-time calorie sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub intake: f64,
    pub burned: f64,
}

impl Totals {
    /// Share of intake in the combined intake and burned amount
    pub fn intake_share(&self) -> Option<f64> {
        let combined = self.intake + self.burned;
        if combined > 0.0 {
            Some(self.intake / combined)
        } else {
            None
        }
    }
}

/// Sum intake and burned calories over every entry, ignoring the recency window.
pub fn totals(entries: &[Entry]) -> Totals {
    entries.iter().fold(Totals::default(), |acc, entry| Totals {
        intake: acc.intake + entry.calories_intake,
        burned: acc.burned + entry.calories_burned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, intake: f64, burned: f64, description: &str) -> Entry {
        Entry::new(date, intake, burned, description)
    }

    fn descriptions(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_recent_entries_window_is_inclusive() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 2), 1.0, 1.0, "eight days"),
            entry(date(2024, 1, 3), 1.0, 1.0, "seven days"),
            entry(date(2024, 1, 10), 1.0, 1.0, "same day"),
        ];

        let recent = recent_entries(&entries, reference, RecencyWindow::default());
        assert_eq!(descriptions(&recent), vec!["seven days", "same day"]);
    }

    #[test]
    fn test_recent_entries_sorted_ascending() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 9), 1.0, 1.0, "c"),
            entry(date(2024, 1, 5), 1.0, 1.0, "a"),
            entry(date(2024, 1, 7), 1.0, 1.0, "b"),
        ];

        let recent = recent_entries(&entries, reference, RecencyWindow::default());
        assert_eq!(descriptions(&recent), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_recent_entries_equal_dates_keep_insertion_order() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 8), 1.0, 1.0, "second day, first"),
            entry(date(2024, 1, 6), 1.0, 1.0, "first day"),
            entry(date(2024, 1, 8), 1.0, 1.0, "second day, second"),
        ];

        let recent = recent_entries(&entries, reference, RecencyWindow::default());
        assert_eq!(
            descriptions(&recent),
            vec!["first day", "second day, first", "second day, second"]
        );
    }

    #[test]
    fn test_recent_entries_is_idempotent() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 9), 1.0, 1.0, "c"),
            entry(date(2024, 1, 4), 1.0, 1.0, "a"),
            entry(date(2023, 12, 1), 1.0, 1.0, "old"),
            entry(date(2024, 1, 7), 1.0, 1.0, "b"),
        ];

        let once = recent_entries(&entries, reference, RecencyWindow::default());
        let twice = recent_entries(&once, reference, RecencyWindow::default());
        assert_eq!(once, twice);
        assert_eq!(
            once,
            recent_entries(&entries, reference, RecencyWindow::default())
        );
    }

    #[test]
    fn test_recent_entries_includes_future_by_default() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 9), 1.0, 1.0, "past"),
            entry(date(2024, 3, 1), 1.0, 1.0, "far future"),
        ];

        let recent = recent_entries(&entries, reference, RecencyWindow::default());
        assert_eq!(descriptions(&recent), vec!["past", "far future"]);
    }

    #[test]
    fn test_recent_entries_exclude_future() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 9), 1.0, 1.0, "past"),
            entry(date(2024, 1, 10), 1.0, 1.0, "today"),
            entry(date(2024, 1, 11), 1.0, 1.0, "tomorrow"),
        ];
        let window = RecencyWindow {
            exclude_future: true,
            ..RecencyWindow::default()
        };

        let recent = recent_entries(&entries, reference, window);
        assert_eq!(descriptions(&recent), vec!["past", "today"]);
    }

    #[test]
    fn test_recent_entries_custom_window() {
        let reference = date(2024, 1, 10);
        let entries = vec![
            entry(date(2024, 1, 7), 1.0, 1.0, "three days"),
            entry(date(2024, 1, 8), 1.0, 1.0, "two days"),
        ];
        let window = RecencyWindow {
            days: 2,
            exclude_future: false,
        };

        let recent = recent_entries(&entries, reference, window);
        assert_eq!(descriptions(&recent), vec!["two days"]);
    }

    #[test]
    fn test_recent_entries_empty() {
        assert!(recent_entries(&[], date(2024, 1, 1), RecencyWindow::default()).is_empty());
    }

    #[test]
    fn test_totals_ignores_window() {
        let entries = vec![
            entry(date(2024, 1, 1), 2000.0, 500.0, "day1"),
            entry(date(2024, 1, 2), 1800.0, 600.0, "day2"),
            entry(date(2019, 6, 1), 100.0, 50.0, "ancient"),
        ];

        assert_eq!(
            totals(&entries),
            Totals {
                intake: 3900.0,
                burned: 1150.0
            }
        );
    }

    #[test]
    fn test_totals_order_independent() {
        let mut entries = vec![
            entry(date(2024, 1, 1), 2000.0, 500.0, "a"),
            entry(date(2024, 1, 2), 1800.0, 600.0, "b"),
            entry(date(2024, 1, 3), 1500.0, 250.0, "c"),
        ];
        let forward = totals(&entries);
        entries.reverse();
        assert_eq!(totals(&entries), forward);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&[]), Totals::default());
        assert_eq!(Totals::default().intake_share(), None);
    }

    #[test]
    fn test_intake_share() {
        let share = Totals {
            intake: 3000.0,
            burned: 1000.0,
        }
        .intake_share()
        .unwrap();
        assert_eq!(share, 0.75);
    }
}
