//! Calorie entries and form-input validation

use crate::domain::DateReference;
use crate::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(EntryId)
            .map_err(|_| TrackerError::InvalidEntry(format!("Invalid entry id: '{}'", s)))
    }
}

/// One day's recorded calorie intake and burn.
///
/// Serialized with camelCase field names, so a stored sequence reads as
/// `[{"id": ..., "date": "2024-01-01", "caloriesIntake": 2000.0, ...}]`.
/// Records written without an `id` get a fresh one when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: EntryId,
    pub date: NaiveDate,
    pub calories_intake: f64,
    pub calories_burned: f64,
    pub description: String,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        calories_intake: f64,
        calories_burned: f64,
        description: impl Into<String>,
    ) -> Self {
        Entry {
            id: EntryId::new(),
            date,
            calories_intake,
            calories_burned,
            description: description.into(),
        }
    }

    /// Net calories for the day (intake minus burned)
    pub fn net(&self) -> f64 {
        self.calories_intake - self.calories_burned
    }
}

/// Raw form input for an entry, every field still textual
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub calories_intake: String,
    pub calories_burned: String,
    pub description: String,
}

impl EntryDraft {
    /// Pre-fill a draft from an existing entry (the edit form)
    pub fn from_entry(entry: &Entry) -> Self {
        EntryDraft {
            date: entry.date.format("%Y-%m-%d").to_string(),
            calories_intake: entry.calories_intake.to_string(),
            calories_burned: entry.calories_burned.to_string(),
            description: entry.description.clone(),
        }
    }

    /// Check required fields and coerce the numeric fields.
    ///
    /// `today` anchors relative dates such as `yesterday`.
    pub fn validate(&self, today: NaiveDate) -> Result<Entry> {
        let date = require(&self.date, "date")?;
        let date = DateReference::parse(date)?.resolve(today);

        let calories_intake = parse_calories(&self.calories_intake, "calorie intake")?;
        let calories_burned = parse_calories(&self.calories_burned, "calories burned")?;

        let description = require(&self.description, "description")?;

        Ok(Entry::new(
            date,
            calories_intake,
            calories_burned,
            description,
        ))
    }
}

fn require<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidEntry(format!("{} is required", field)));
    }
    Ok(trimmed)
}

fn parse_calories(value: &str, field: &str) -> Result<f64> {
    let raw = require(value, field)?;
    let number: f64 = raw.parse().map_err(|_| {
        TrackerError::InvalidEntry(format!("{} must be a number, got '{}'", field, raw))
    })?;

    if !number.is_finite() || number < 0.0 {
        return Err(TrackerError::InvalidEntry(format!(
            "{} must be a non-negative number, got '{}'",
            field, raw
        )));
    }

    Ok(number)
}
