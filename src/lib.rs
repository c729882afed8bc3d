//! caltrack - Terminal calorie tracker
//!
//! Records daily calorie intake and burn entries, keeps them in a key-value
//! storage slot under `.caltrack/`, and summarises the recent days and the
//! all-time totals.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::TrackerError;
