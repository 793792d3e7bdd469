//! History data structures.

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN;
use crate::lookup::LookupResult;

/// A persisted record of a past lookup.
///
/// Within the collection, `ip` is unique (the newest occurrence wins) and
/// entries are ordered newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The looked-up address; unique key within the collection
    pub ip: String,
    /// Display summary (`"<city>, <country>"`) derived once at insertion
    pub location_summary: String,
    /// Insertion time in milliseconds since the epoch
    pub timestamp_ms: i64,
    /// The complete lookup result, kept for replay without re-querying
    pub result: LookupResult,
}

impl HistoryEntry {
    /// Derives the stored location summary from a lookup result.
    pub(crate) fn summarize(result: &LookupResult) -> String {
        format!(
            "{}, {}",
            result.city.as_deref().unwrap_or(UNKNOWN),
            result.country.as_deref().unwrap_or(UNKNOWN)
        )
    }
}
