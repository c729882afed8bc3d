//! Output formatting utilities

use crate::domain::{Entry, Totals};

/// Format all entries with their positions, in insertion order
pub fn format_entry_list(entries: &[Entry], show_ids: bool) -> String {
    if entries.is_empty() {
        return "No Progress to show!".to_string();
    }

    let mut output = String::new();
    for (position, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {}  {}\n     Calories Intake = {} Calories Burned = {}\n",
            position,
            entry.date.format("%Y-%m-%d"),
            entry.description,
            entry.calories_intake,
            entry.calories_burned
        ));
        if show_ids {
            output.push_str(&format!("     id: {}\n", entry.id));
        }
    }
    output
}

/// Format the recency window as a table, one row per entry
pub fn format_week(entries: &[Entry], days: i64) -> String {
    if entries.is_empty() {
        return format!("No entries in the last {} days", days);
    }

    let mut output = String::from("Weekly Health Trends:\n");
    output.push_str(&format!(
        "{:<10}  {:>10}  {:>10}  {:>10}\n",
        "date", "intake", "burned", "net"
    ));
    for entry in entries {
        output.push_str(&format!(
            "{:<10}  {:>10}  {:>10}  {:>10}\n",
            entry.date.format("%Y-%m-%d").to_string(),
            entry.calories_intake,
            entry.calories_burned,
            entry.net()
        ));
    }
    output
}

/// Format all-time totals and the intake/burned split
pub fn format_totals(totals: &Totals) -> String {
    let mut output = format!(
        "Overall Data:\nIntake: {}\nBurned: {}\n",
        totals.intake, totals.burned
    );
    if let Some(share) = totals.intake_share() {
        output.push_str(&format!(
            "Split: {:.1}% intake / {:.1}% burned\n",
            share * 100.0,
            (1.0 - share) * 100.0
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(day: u32, intake: f64, burned: f64, description: &str) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            intake,
            burned,
            description,
        )
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], false), "No Progress to show!");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![entry(1, 2000.0, 500.0, "day1"), entry(2, 1800.5, 600.0, "day2")];

        let output = format_entry_list(&entries, false);
        assert!(output.contains("  0  2024-01-01  day1"));
        assert!(output.contains("  1  2024-01-02  day2"));
        assert!(output.contains("Calories Intake = 2000 Calories Burned = 500"));
        assert!(output.contains("Calories Intake = 1800.5"));
        assert!(!output.contains("id:"));
    }

    #[test]
    fn test_format_entry_list_with_ids() {
        let entries = vec![entry(1, 1.0, 1.0, "x")];
        let output = format_entry_list(&entries, true);
        assert!(output.contains(&format!("id: {}", entries[0].id)));
    }

    #[test]
    fn test_format_week() {
        assert_eq!(format_week(&[], 7), "No entries in the last 7 days");

        let output = format_week(&[entry(3, 2000.0, 500.0, "x")], 7);
        assert!(output.starts_with("Weekly Health Trends:\n"));
        assert!(output.contains("2024-01-03"));
        assert!(output.contains("1500"));
    }

    #[test]
    fn test_format_totals() {
        let output = format_totals(&Totals {
            intake: 3000.0,
            burned: 1000.0,
        });
        assert_eq!(
            output,
            "Overall Data:\nIntake: 3000\nBurned: 1000\nSplit: 75.0% intake / 25.0% burned\n"
        );

        let empty = format_totals(&Totals::default());
        assert!(!empty.contains("Split"));
    }
}
