//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod store;
pub mod tracker;

pub use manage_config::ConfigService;
pub use store::EntryStore;
pub use tracker::{EntryPatch, EntryRef, TrackerService};
