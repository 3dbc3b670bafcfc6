//! Cache Module
//!
//! Provides bounded in-memory caching with LRU eviction.

mod concurrent;
mod entry;
mod lru;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use concurrent::LruCache;
pub(crate) use entry::CacheEntry;
pub(crate) use lru::RecencyList;
pub(crate) use store::CacheStore;
