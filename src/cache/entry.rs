//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use crate::value::CacheValue;

// == Cache Entry ==
/// A key and its value, as stored in the recency list.
///
/// The key is kept alongside the value so that evicting the list tail can
/// also drop the matching index slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CacheEntry {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: CacheValue,
}

impl CacheEntry {
    pub fn new(key: String, value: CacheValue) -> Self {
        Self { key, value }
    }
}
