//! Bounded, deduplicated lookup history.

use chrono::Utc;
use log::warn;

use crate::config::{HISTORY_CAPACITY, HISTORY_STORAGE_KEY};
use crate::lookup::LookupResult;
use crate::storage::{KeyValueStore, StorageError};

use super::types::HistoryEntry;

/// Ordered, size-bounded, deduplicated collection of past lookups.
///
/// The in-memory collection is the source of truth for reads; every
/// mutation rewrites the serialized collection wholesale under one storage
/// key. Storage failures are logged and swallowed so that history
/// book-keeping never breaks a successful lookup.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    store: KeyValueStore,
}

impl HistoryStore {
    /// Loads the history from durable storage.
    ///
    /// Deserialization failures (corrupt blob, unreadable file) yield an
    /// empty collection rather than an error.
    pub fn load(store: KeyValueStore) -> Self {
        let entries = match Self::read_entries(&store) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to load lookup history, starting empty: {e}");
                Vec::new()
            }
        };
        Self { entries, store }
    }

    fn read_entries(store: &KeyValueStore) -> Result<Vec<HistoryEntry>, StorageError> {
        match store.get(HISTORY_STORAGE_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(StorageError::Deserialize),
            None => Ok(Vec::new()),
        }
    }

    /// Records a successful lookup at the front of the history.
    ///
    /// Any existing entry for the same address is removed first, the
    /// location summary and timestamp are derived here, and the collection
    /// is truncated to its capacity before being persisted. Never fails.
    pub fn add(&mut self, result: &LookupResult) {
        self.entries.retain(|entry| entry.ip != result.ip);
        self.entries.insert(
            0,
            HistoryEntry {
                ip: result.ip.clone(),
                location_summary: HistoryEntry::summarize(result),
                timestamp_ms: Utc::now().timestamp_millis(),
                result: result.clone(),
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist();
    }

    /// All entries, newest-first.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Looks up the entry recorded for `ip`, if any.
    pub fn find_by_ip(&self, ip: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.ip == ip)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the collection and persists the empty state.
    ///
    /// Confirmation is the caller's responsibility; this store performs
    /// none of its own.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.entries) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize lookup history: {e}");
                return;
            }
        };
        if let Err(e) = self.store.put(HISTORY_STORAGE_KEY, &blob) {
            warn!("Failed to persist lookup history: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HISTORY_STORAGE_KEY;
    use tempfile::TempDir;

    fn result(ip: &str) -> LookupResult {
        LookupResult {
            ip: ip.to_string(),
            city: Some("Springfield".to_string()),
            region: None,
            country: Some("US".to_string()),
            coordinates: None,
            organization: None,
            timezone: None,
        }
    }

    fn open_store(dir: &TempDir) -> HistoryStore {
        HistoryStore::load(KeyValueStore::open(dir.path()).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let dir = TempDir::new().unwrap();
        let history = open_store(&dir);
        assert!(history.is_empty());
        assert!(history.all().is_empty());
    }

    #[test]
    fn test_add_inserts_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut history = open_store(&dir);

        history.add(&result("1.1.1.1"));
        history.add(&result("2.2.2.2"));

        let ips: Vec<&str> = history.all().iter().map(|e| e.ip.as_str()).collect();
        assert_eq!(ips, vec!["2.2.2.2", "1.1.1.1"]);
    }

    #[test]
    fn test_add_deduplicates_and_moves_to_front() {
        let dir = TempDir::new().unwrap();
        let mut history = open_store(&dir);

        history.add(&result("1.1.1.1"));
        history.add(&result("2.2.2.2"));
        let first_ts = history.find_by_ip("1.1.1.1").unwrap().timestamp_ms;

        let mut updated = result("1.1.1.1");
        updated.city = Some("Shelbyville".to_string());
        history.add(&updated);

        assert_eq!(history.len(), 2);
        let front = &history.all()[0];
        assert_eq!(front.ip, "1.1.1.1");
        assert_eq!(front.result.city.as_deref(), Some("Shelbyville"));
        assert!(front.timestamp_ms >= first_ts);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let dir = TempDir::new().unwrap();
        let mut history = open_store(&dir);

        for i in 0..HISTORY_CAPACITY {
            history.add(&result(&format!("10.0.0.{i}")));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        history.add(&result("10.0.1.1"));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.all()[0].ip, "10.0.1.1");
        // The oldest entry (the first one added) is the one evicted
        assert!(history.find_by_ip("10.0.0.0").is_none());
        assert!(history.find_by_ip("10.0.0.1").is_some());
    }

    #[test]
    fn test_persists_across_reload() {
        let dir = TempDir::new().unwrap();
        {
            let mut history = open_store(&dir);
            history.add(&result("1.1.1.1"));
            history.add(&result("2.2.2.2"));
        }

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.all()[0].ip, "2.2.2.2");
        assert_eq!(
            reloaded.find_by_ip("1.1.1.1").unwrap().location_summary,
            "Springfield, US"
        );
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let dir = TempDir::new().unwrap();
        {
            let mut history = open_store(&dir);
            history.add(&result("1.1.1.1"));
            history.clear();
            assert!(history.all().is_empty());
        }

        let reloaded = open_store(&dir);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_corrupt_blob_yields_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();
        store.put(HISTORY_STORAGE_KEY, "{not json").unwrap();

        let history = HistoryStore::load(store);
        assert!(history.is_empty());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_invariants_hold_for_any_add_sequence(
            octets in prop::collection::vec(0u8..=60, 1..120)
        ) {
            let dir = TempDir::new().unwrap();
            let mut history = open_store(&dir);

            for octet in octets {
                history.add(&result(&format!("192.0.2.{octet}")));
            }

            // Unique ips
            let mut ips: Vec<&str> = history.all().iter().map(|e| e.ip.as_str()).collect();
            let total = ips.len();
            ips.sort_unstable();
            ips.dedup();
            prop_assert_eq!(ips.len(), total);

            // Bounded size
            prop_assert!(history.len() <= HISTORY_CAPACITY);

            // Descending timestamps
            for pair in history.all().windows(2) {
                prop_assert!(pair[0].timestamp_ms >= pair[1].timestamp_ms);
            }
        }
    }
}
