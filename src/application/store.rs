//! Entry store: the owned entry sequence mirrored to a storage slot

use crate::domain::{recent_entries, totals, Entry, EntryId, RecencyWindow, Totals};
use crate::error::{Result, TrackerError};
use crate::infrastructure::KeyValueStorage;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Owns the ordered entry sequence.
///
/// Every mutation rewrites the whole sequence into the storage slot before
/// returning. Callers only ever see copies of the entries.
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    entries: Vec<Entry>,
}

impl<S: KeyValueStorage> EntryStore<S> {
    /// Load the sequence stored under `key`, or start empty when the slot is unset.
    ///
    /// Stored records without an id are assigned one and written back, so ids
    /// stay stable across loads.
    pub fn hydrate(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let (entries, missing_ids) = match storage.get(&key)? {
            Some(raw) => parse_entries(&raw)?,
            None => {
                debug!(key = %key, "storage slot empty, starting with no entries");
                (Vec::new(), 0)
            }
        };
        info!(key = %key, count = entries.len(), "hydrated entries");

        let store = EntryStore {
            storage,
            key,
            entries,
        };
        if missing_ids > 0 {
            debug!(missing_ids, "assigned ids to stored entries");
            store.persist()?;
        }
        Ok(store)
    }

    /// Serialize the full sequence and overwrite the storage slot
    pub fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.entries)?;
        self.storage.set(&self.key, &serialized)?;
        debug!(key = %self.key, count = self.entries.len(), "persisted entries");
        Ok(())
    }

    /// Copy of the current sequence, in insertion order
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Entry> {
        self.entries.get(index).cloned()
    }

    /// Current position of the entry with `id`
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Append an entry
    pub fn add(&mut self, entry: Entry) -> Result<EntryId> {
        let id = entry.id;
        self.entries.push(entry);
        self.persist()?;
        info!(%id, position = self.entries.len() - 1, "added entry");
        Ok(id)
    }

    /// Replace the entry at `index`; the replaced entry's id is kept
    pub fn edit(&mut self, index: usize, mut entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or_else(|| position_not_found(index))?;
        entry.id = slot.id;
        *slot = entry;
        self.persist()?;
        info!(position = index, "edited entry");
        Ok(())
    }

    pub fn edit_by_id(&mut self, id: EntryId, entry: Entry) -> Result<()> {
        let index = self.position(id).ok_or_else(|| id_not_found(id))?;
        self.edit(index, entry)
    }

    /// Remove the entry at `index`, shifting later entries down by one
    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(position_not_found(index));
        }
        let removed = self.entries.remove(index);
        self.persist()?;
        info!(id = %removed.id, position = index, "deleted entry");
        Ok(removed)
    }

    pub fn delete_by_id(&mut self, id: EntryId) -> Result<Entry> {
        let index = self.position(id).ok_or_else(|| id_not_found(id))?;
        self.delete(index)
    }

    /// Entries inside `window` relative to `reference`, oldest first
    pub fn recent(&self, reference: NaiveDate, window: RecencyWindow) -> Vec<Entry> {
        recent_entries(&self.entries, reference, window)
    }

    /// All-time totals
    pub fn totals(&self) -> Totals {
        totals(&self.entries)
    }
}

fn parse_entries(raw: &str) -> Result<(Vec<Entry>, usize)> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse stored entries: {}", e)))?;

    let missing_ids = values.iter().filter(|value| value.get("id").is_none()).count();

    let entries = serde_json::from_value(serde_json::Value::Array(values))
        .map_err(|e| TrackerError::Storage(format!("Invalid stored entry: {}", e)))?;

    Ok((entries, missing_ids))
}

fn position_not_found(index: usize) -> TrackerError {
    TrackerError::EntryNotFound(format!("no entry at position {}", index))
}

fn id_not_found(id: EntryId) -> TrackerError {
    TrackerError::EntryNotFound(format!("no entry with id {}", id))
}
