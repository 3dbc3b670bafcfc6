//! Cache Value Module
//!
//! Defines the closed set of payloads a cache slot can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Value Kind ==
/// Discriminant of a [`CacheValue`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

// == Cache Value ==
/// A value stored in the cache.
///
/// Only `Integer` and `Float` take part in increment/decrement; `Opaque`
/// payloads are stored and returned untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CacheValue {
    /// Signed 64-bit integer
    Integer(i64),
    /// Double-precision float
    Float(f64),
    /// Any non-numeric payload
    Opaque(String),
}

/// A numeric mutation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    Increment(i64),
    Decrement(i64),
}

impl Mutation {
    fn delta(self) -> i64 {
        match self {
            Mutation::Increment(delta) | Mutation::Decrement(delta) => delta,
        }
    }
}

impl CacheValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            CacheValue::Integer(_) => ValueKind::Integer,
            CacheValue::Float(_) => ValueKind::Float,
            CacheValue::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns true for `Integer` and `Float`.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CacheValue::Opaque(_))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CacheValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            CacheValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&str> {
        match self {
            CacheValue::Opaque(v) => Some(v),
            _ => None,
        }
    }

    // == Apply Mutation ==
    /// Computes the value after `mutation`, preserving the numeric kind.
    ///
    /// Does not modify `self`; the caller commits the result only on success.
    /// `key` is carried into errors for diagnostics.
    pub(crate) fn apply(&self, key: &str, mutation: Mutation) -> Result<CacheValue> {
        match (self, mutation) {
            (CacheValue::Integer(v), Mutation::Increment(delta)) => v
                .checked_add(delta)
                .map(CacheValue::Integer)
                .ok_or_else(|| overflow(key, mutation)),
            (CacheValue::Integer(v), Mutation::Decrement(delta)) => v
                .checked_sub(delta)
                .map(CacheValue::Integer)
                .ok_or_else(|| overflow(key, mutation)),
            (CacheValue::Float(v), Mutation::Increment(delta)) => {
                Ok(CacheValue::Float(v + delta as f64))
            }
            (CacheValue::Float(v), Mutation::Decrement(delta)) => {
                Ok(CacheValue::Float(v - delta as f64))
            }
            (CacheValue::Opaque(_), _) => Err(CacheError::TypeMismatch {
                key: key.to_string(),
                found: ValueKind::Opaque,
            }),
        }
    }
}

fn overflow(key: &str, mutation: Mutation) -> CacheError {
    CacheError::Overflow {
        key: key.to_string(),
        delta: mutation.delta(),
    }
}

impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Integer(v) => write!(f, "{}", v),
            CacheValue::Float(v) => write!(f, "{}", v),
            CacheValue::Opaque(v) => f.write_str(v),
        }
    }
}

// == Conversions ==
impl From<i64> for CacheValue {
    fn from(v: i64) -> Self {
        CacheValue::Integer(v)
    }
}

impl From<i32> for CacheValue {
    fn from(v: i32) -> Self {
        CacheValue::Integer(i64::from(v))
    }
}

impl From<f64> for CacheValue {
    fn from(v: f64) -> Self {
        CacheValue::Float(v)
    }
}

impl From<&str> for CacheValue {
    fn from(v: &str) -> Self {
        CacheValue::Opaque(v.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(v: String) -> Self {
        CacheValue::Opaque(v)
    }
}
