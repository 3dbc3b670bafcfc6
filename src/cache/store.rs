//! Cache Store Module
//!
//! Single-threaded cache engine combining a HashMap index with a recency list.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, RecencyList};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::value::{CacheValue, Mutation};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const MAX_PREALLOCATED: usize = 1024;

// == Cache Store ==
/// Bounded key-value storage with LRU eviction.
///
/// Every live key appears exactly once in `index`, mapped to the handle of
/// its entry in `entries`. Both structures always hold the same number of
/// items, never more than `capacity`.
#[derive(Debug)]
pub(crate) struct CacheStore {
    /// Key -> handle into `entries`
    index: HashMap<String, usize>,
    /// Entries ordered most to least recently used
    entries: RecencyList<CacheEntry>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::Config`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::from_config(&CacheConfig::with_capacity(capacity))
    }

    /// Creates a new CacheStore from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        debug!(capacity = config.capacity, "Cache store initialized");
        let reserved = config.capacity.min(MAX_PREALLOCATED);
        Ok(Self {
            index: HashMap::with_capacity(reserved),
            entries: RecencyList::with_capacity(reserved),
            capacity: config.capacity,
        })
    }

    // == Get ==
    /// Returns the value for `key`, promoting it to most recently used.
    ///
    /// A miss leaves the store untouched.
    pub fn get(&mut self, key: &str) -> Option<&CacheValue> {
        let Some(&idx) = self.index.get(key) else {
            trace!(key, "Cache miss");
            return None;
        };
        trace!(key, "Cache hit");
        self.entries.move_to_front(idx);
        self.entries.get(idx).map(|entry| &entry.value)
    }

    // == Put ==
    /// Stores `value` under `key`.
    ///
    /// An existing key is overwritten in place. A new key at capacity first
    /// evicts the least recently used entry, which is returned.
    pub fn put(&mut self, key: String, value: CacheValue) -> Option<CacheEntry> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(idx) {
                entry.value = value;
            }
            self.entries.move_to_front(idx);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let idx = self.entries.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, idx);
        evicted
    }

    // == Increment / Decrement ==
    /// Adds `delta` to the numeric value under `key` and returns the result.
    pub fn increment(&mut self, key: &str, delta: i64) -> Result<CacheValue> {
        self.mutate(key, Mutation::Increment(delta))
    }

    /// Subtracts `delta` from the numeric value under `key` and returns the result.
    pub fn decrement(&mut self, key: &str, delta: i64) -> Result<CacheValue> {
        self.mutate(key, Mutation::Decrement(delta))
    }

    /// Applies `mutation` and promotes the entry, or fails leaving state unchanged.
    fn mutate(&mut self, key: &str, mutation: Mutation) -> Result<CacheValue> {
        let idx = *self
            .index
            .get(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        let entry = self
            .entries
            .get_mut(idx)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        let updated = entry.value.apply(key, mutation)?;
        entry.value = updated.clone();
        self.entries.move_to_front(idx);
        trace!(key, ?mutation, "Cache value mutated");
        Ok(updated)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<CacheValue> {
        let idx = self.index.remove(key)?;
        self.entries.remove(idx).map(|entry| entry.value)
    }

    // == Peek ==
    /// Returns the value for `key` without changing recency.
    pub fn peek(&self, key: &str) -> Option<&CacheValue> {
        let &idx = self.index.get(key)?;
        self.entries.get(idx).map(|entry| &entry.value)
    }

    /// Checks for `key` without changing recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) -> Option<CacheEntry> {
        let evicted = self.entries.pop_back()?;
        self.index.remove(&evicted.key);
        Some(evicted)
    }

    /// Verifies that index and recency list agree. Test support.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.entries.len(), "index/list size mismatch");
        assert!(self.entries.len() <= self.capacity, "capacity exceeded");
        for (key, &idx) in &self.index {
            let entry = self.entries.get(idx).expect("index points at empty slot");
            assert_eq!(&entry.key, key, "index points at wrong entry");
        }
        assert_eq!(self.entries.iter().count(), self.entries.len());
    }
}
