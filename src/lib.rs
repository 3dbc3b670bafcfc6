//! Recency Cache - A bounded in-memory key-value cache
//!
//! Provides least-recently-used eviction under a single coarse lock, with
//! typed increment/decrement of numeric values.

pub mod cache;
pub mod config;
pub mod error;
pub mod value;

pub use cache::LruCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use value::{CacheValue, ValueKind};
