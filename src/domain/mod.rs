//! Domain layer - Entries and the views derived from them

pub mod aggregate;
pub mod date_ref;
pub mod entry;

pub use aggregate::{recent_entries, totals, RecencyWindow, Totals};
pub use date_ref::DateReference;
pub use entry::{Entry, EntryDraft, EntryId};
