//! Cache Store Module
//!
//! In-memory store for serialized revenue summaries with TTL expiration
//! and LRU eviction at capacity.

use std::collections::{HashMap, VecDeque};

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{DashboardError, Result};

// == Public Constants ==
/// Maximum allowed key length in bytes.
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed serialized payload size in bytes.
pub const MAX_VALUE_SIZE: usize = 64 * 1024;

// == Cache Store ==
/// Bounded key-value store for cached revenue summaries.
///
/// A miss is not an error here: `lookup` returns `None` for absent or
/// expired keys and the layer falls through to the revenue source.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Access order, front = most recently used
    access_order: VecDeque<String>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            access_order: VecDeque::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Insert ==
    /// Stores a serialized payload under the given key with a TTL.
    ///
    /// If the key already exists, the payload is overwritten and the TTL
    /// is reset. If the cache is at capacity, the least recently used
    /// entry is evicted first.
    pub fn insert(&mut self, key: String, value: String, ttl_seconds: u64) -> Result<()> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(DashboardError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(DashboardError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the oldest entry
        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.access_order.pop_back() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            } else {
                return Err(DashboardError::CacheFull(
                    "Cache is full and eviction failed".to_string(),
                ));
            }
        }

        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.insert(key.clone(), entry);
        self.touch(&key);

        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Lookup ==
    /// Retrieves a payload by key.
    ///
    /// Returns `None` for absent keys and for expired entries; expired
    /// entries are removed on the way out. Hits refresh the access
    /// order.
    pub fn lookup(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.access_order.retain(|k| k != key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            self.touch(key);
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.access_order.retain(|k| k != &key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    fn touch(&mut self, key: &str) {
        self.access_order.retain(|k| k != key);
        self.access_order.push_front(key.to_string());
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    const TEST_TTL: u64 = 300;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = CacheStore::new(100);

        store
            .insert("revenue:tenant-a:prop-001".to_string(), "{}".to_string(), TEST_TTL)
            .unwrap();

        assert_eq!(store.lookup("revenue:tenant-a:prop-001"), Some("{}".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_absent() {
        let mut store = CacheStore::new(100);

        assert_eq!(store.lookup("revenue:tenant-a:prop-404"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_overwrite_resets_value() {
        let mut store = CacheStore::new(100);

        store
            .insert("key".to_string(), "first".to_string(), TEST_TTL)
            .unwrap();
        store
            .insert("key".to_string(), "second".to_string(), TEST_TTL)
            .unwrap();

        assert_eq!(store.lookup("key"), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(100);

        store
            .insert("key".to_string(), "value".to_string(), 1)
            .unwrap();

        assert!(store.lookup("key").is_some());

        sleep(Duration::from_millis(1100));

        assert_eq!(store.lookup("key"), None);
        assert_eq!(store.len(), 0, "Expired entry should be removed on lookup");
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = CacheStore::new(3);

        store.insert("key1".to_string(), "v1".to_string(), TEST_TTL).unwrap();
        store.insert("key2".to_string(), "v2".to_string(), TEST_TTL).unwrap();
        store.insert("key3".to_string(), "v3".to_string(), TEST_TTL).unwrap();

        // Cache is full, inserting key4 evicts key1 (oldest)
        store.insert("key4".to_string(), "v4".to_string(), TEST_TTL).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.lookup("key1"), None);
        assert!(store.lookup("key2").is_some());
        assert!(store.lookup("key3").is_some());
        assert!(store.lookup("key4").is_some());
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_lru_touch_on_lookup() {
        let mut store = CacheStore::new(3);

        store.insert("key1".to_string(), "v1".to_string(), TEST_TTL).unwrap();
        store.insert("key2".to_string(), "v2".to_string(), TEST_TTL).unwrap();
        store.insert("key3".to_string(), "v3".to_string(), TEST_TTL).unwrap();

        // Access key1 to make it most recently used
        store.lookup("key1").unwrap();

        // Inserting key4 now evicts key2 (oldest)
        store.insert("key4".to_string(), "v4".to_string(), TEST_TTL).unwrap();

        assert!(store.lookup("key1").is_some());
        assert_eq!(store.lookup("key2"), None);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(100);

        store.insert("key".to_string(), "value".to_string(), TEST_TTL).unwrap();
        store.lookup("key"); // hit
        store.lookup("absent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(100);

        store.insert("short".to_string(), "v".to_string(), 1).unwrap();
        store.insert("long".to_string(), "v".to_string(), 10).unwrap();

        sleep(Duration::from_millis(1100));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.lookup("long").is_some());
    }

    #[test]
    fn test_store_key_too_long() {
        let mut store = CacheStore::new(100);
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = store.insert(long_key, "value".to_string(), TEST_TTL);
        assert!(matches!(result, Err(DashboardError::InvalidRequest(_))));
    }

    #[test]
    fn test_store_value_too_large() {
        let mut store = CacheStore::new(100);
        let large_value = "x".repeat(MAX_VALUE_SIZE + 1);

        let result = store.insert("key".to_string(), large_value, TEST_TTL);
        assert!(matches!(result, Err(DashboardError::InvalidRequest(_))));
    }
}
