//! Thread-safe cache facade.
//!
//! Wraps a [`CacheStore`] in a single `parking_lot::Mutex`. Each public method
//! takes the lock exactly once and never calls another public method while
//! holding it.

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::value::CacheValue;

/// Bounded, thread-safe key-value cache with LRU eviction.
///
/// Share between threads with `Arc<LruCache>`.
///
/// # Example
/// ```
/// use recency_cache::{CacheValue, LruCache};
///
/// let cache = LruCache::new(2).unwrap();
/// cache.put("hits", 1);
/// cache.increment("hits", 4).unwrap();
/// assert_eq!(cache.get("hits"), Some(CacheValue::Integer(5)));
/// assert_eq!(cache.get("absent"), None);
/// ```
#[derive(Debug)]
pub struct LruCache {
    store: Mutex<CacheStore>,
}

impl LruCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::Config`](crate::CacheError::Config) when
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let store = CacheStore::new(capacity)?;
        Ok(Self {
            store: Mutex::new(store),
        })
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let store = CacheStore::from_config(config)?;
        Ok(Self {
            store: Mutex::new(store),
        })
    }

    /// Returns a copy of the value for `key` and marks it most recently used.
    ///
    /// `None` is an ordinary miss and leaves the cache unchanged.
    pub fn get(&self, key: &str) -> Option<CacheValue> {
        self.store.lock().get(key).cloned()
    }

    /// Stores `value` under `key`, evicting the least recently used entry if
    /// a new key would exceed capacity.
    pub fn put(&self, key: impl Into<String>, value: impl Into<CacheValue>) {
        let evicted = self.store.lock().put(key.into(), value.into());
        if let Some(entry) = evicted {
            debug!(key = %entry.key, "Entry evicted to make room");
        }
    }

    /// Adds `delta` to a numeric value, returning the updated value.
    ///
    /// Fails with `NotFound` for an absent key, `TypeMismatch` for an opaque
    /// value and `Overflow` when an integer would leave the i64 range. A
    /// failed call changes nothing.
    pub fn increment(&self, key: &str, delta: i64) -> Result<CacheValue> {
        self.store.lock().increment(key, delta)
    }

    /// Subtracts `delta` from a numeric value, returning the updated value.
    ///
    /// Fails under the same conditions as [`increment`](Self::increment).
    pub fn decrement(&self, key: &str, delta: i64) -> Result<CacheValue> {
        self.store.lock().decrement(key, delta)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&self, key: &str) -> Option<CacheValue> {
        self.store.lock().remove(key)
    }

    /// Returns a copy of the value for `key` without touching recency.
    pub fn peek(&self, key: &str) -> Option<CacheValue> {
        self.store.lock().peek(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    /// Snapshot of live keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.store.lock().keys()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.lock().capacity()
    }

    pub fn clear(&self) {
        self.store.lock().clear();
    }
}
