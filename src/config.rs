//! Configuration Module
//!
//! Construction parameters for the cache, deserializable from a caller's own
//! configuration source.

use serde::Deserialize;
use tracing::warn;

use crate::error::{CacheError, Result};

/// Default capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a config with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the parameters describe a usable cache.
    ///
    /// A capacity of zero is rejected rather than clamped.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            warn!(capacity = self.capacity, "Rejecting cache configuration");
            return Err(CacheError::Config(format!(
                "capacity must be at least 1, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
