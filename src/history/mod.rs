//! Lookup history.
//!
//! An ordered, size-bounded, deduplicated collection of past lookups,
//! persisted wholesale to the durable key/value store after every mutation
//! and loaded once at startup.

mod store;
mod types;

pub use store::HistoryStore;
pub use types::HistoryEntry;
