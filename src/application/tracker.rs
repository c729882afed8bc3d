//! Tracker use cases: entry CRUD and summaries over a tracker root

use crate::application::EntryStore;
use crate::domain::{Entry, EntryDraft, EntryId, Totals};
use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, FileStorage, FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use std::str::FromStr;

/// How the user points at an entry: by position or by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    Position(usize),
    Id(EntryId),
}

impl FromStr for EntryRef {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<usize>() {
            Ok(position) => Ok(EntryRef::Position(position)),
            Err(_) => s.parse::<EntryId>().map(EntryRef::Id),
        }
    }
}

/// Field overrides for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub calories_intake: Option<String>,
    pub calories_burned: Option<String>,
    pub description: Option<String>,
}

impl EntryPatch {
    /// Current entry pre-filled into a draft, with the overrides applied
    fn apply(self, current: &Entry) -> EntryDraft {
        let mut draft = EntryDraft::from_entry(current);
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(intake) = self.calories_intake {
            draft.calories_intake = intake;
        }
        if let Some(burned) = self.calories_burned {
            draft.calories_burned = burned;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        draft
    }
}

/// Service for working with the entries of one tracker root
pub struct TrackerService {
    config: Config,
    store: EntryStore<FileStorage>,
}

impl TrackerService {
    /// Load config and hydrate the entry store of `repository`
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = EntryStore::hydrate(repository.storage(), config.storage_key.clone())?;
        Ok(TrackerService { config, store })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a draft and append it
    pub fn add(&mut self, draft: &EntryDraft, today: NaiveDate) -> Result<Entry> {
        let entry = draft.validate(today)?;
        self.store.add(entry.clone())?;
        Ok(entry)
    }

    /// Apply `patch` to the referenced entry
    pub fn edit(&mut self, target: EntryRef, patch: EntryPatch, today: NaiveDate) -> Result<Entry> {
        let index = self.resolve(target)?;
        let current = self.store.get(index).ok_or_else(|| not_found(target))?;

        let entry = patch.apply(&current).validate(today)?;
        self.store.edit(index, entry)?;

        self.store.get(index).ok_or_else(|| not_found(target))
    }

    pub fn delete(&mut self, target: EntryRef) -> Result<Entry> {
        let index = self.resolve(target)?;
        self.store.delete(index)
    }

    /// All entries in insertion order
    pub fn list(&self) -> Vec<Entry> {
        self.store.entries()
    }

    /// Entries inside the configured recency window, oldest first
    pub fn week(&self, today: NaiveDate) -> Vec<Entry> {
        self.store.recent(today, self.config.recency_window())
    }

    pub fn totals(&self) -> Totals {
        self.store.totals()
    }

    fn resolve(&self, target: EntryRef) -> Result<usize> {
        match target {
            EntryRef::Position(index) if index < self.store.len() => Ok(index),
            EntryRef::Position(_) => Err(not_found(target)),
            EntryRef::Id(id) => self.store.position(id).ok_or_else(|| not_found(target)),
        }
    }
}

fn not_found(target: EntryRef) -> TrackerError {
    let reference = match target {
        EntryRef::Position(index) => format!("no entry at position {}", index),
        EntryRef::Id(id) => format!("no entry with id {}", id),
    };
    TrackerError::EntryNotFound(reference)
}
