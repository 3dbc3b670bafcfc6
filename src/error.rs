//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::value::ValueKind;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// A miss on `get` is not an error and never produces one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    /// Invalid construction parameters
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Mutation target key is absent
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Mutation target holds a non-numeric value
    #[error("Value for key {key} is not numeric (found {found})")]
    TypeMismatch { key: String, found: ValueKind },

    /// Integer mutation would leave the i64 range
    #[error("Applying delta {delta} to key {key} overflows")]
    Overflow { key: String, delta: i64 },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
