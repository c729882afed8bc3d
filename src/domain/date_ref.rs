//! Entry date parsing and resolution

use crate::error::{Result, TrackerError};
use chrono::{Duration, NaiveDate};

/// A date as typed by the user, resolved against a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference (`today`, `yesterday` or `YYYY-MM-DD`)
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateReference::SpecificDate)
                .map_err(|_| TrackerError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::SpecificDate(date) => *date,
        }
    }
}
