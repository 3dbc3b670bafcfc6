//! Property-Based Tests for Cache Module
//!
//! Uses proptest to drive `CacheStore` against a straightforward reference
//! model: a `VecDeque` of (key, value) pairs, front = most recently used.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::cache::CacheStore;
use crate::error::CacheError;
use crate::value::{CacheValue, ValueKind};

// == Reference Model ==
/// Obviously-correct O(n) LRU used as the oracle.
#[derive(Debug)]
struct Model {
    order: VecDeque<(String, CacheValue)>,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            capacity,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|(k, _)| k == key)
    }

    fn touch(&mut self, pos: usize) {
        if let Some(item) = self.order.remove(pos) {
            self.order.push_front(item);
        }
    }

    fn get(&mut self, key: &str) -> Option<CacheValue> {
        let pos = self.position(key)?;
        self.touch(pos);
        self.order.front().map(|(_, v)| v.clone())
    }

    fn put(&mut self, key: String, value: CacheValue) -> Option<String> {
        if let Some(pos) = self.position(&key) {
            self.order[pos].1 = value;
            self.touch(pos);
            return None;
        }
        let evicted = if self.order.len() >= self.capacity {
            self.order.pop_back().map(|(k, _)| k)
        } else {
            None
        };
        self.order.push_front((key, value));
        evicted
    }

    fn keys(&self) -> Vec<String> {
        self.order.iter().map(|(k, _)| k.clone()).collect()
    }
}

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = CacheValue> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(CacheValue::Integer),
        (-1.0e6f64..1.0e6).prop_map(CacheValue::Float),
        "[a-z ]{0,16}".prop_map(CacheValue::Opaque),
    ]
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: CacheValue },
    Get { key: String },
    Increment { key: String, delta: i64 },
    Decrement { key: String, delta: i64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        (key_strategy(), -1000i64..1000).prop_map(|(key, delta)| CacheOp::Increment { key, delta }),
        (key_strategy(), -1000i64..1000).prop_map(|(key, delta)| CacheOp::Decrement { key, delta }),
    ]
}

fn expected_mutation(model: &mut Model, key: &str, delta: i64) -> Result<CacheValue, CacheError> {
    let pos = model
        .position(key)
        .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
    let next = match &model.order[pos].1 {
        CacheValue::Integer(v) => CacheValue::Integer(v + delta),
        CacheValue::Float(v) => CacheValue::Float(v + delta as f64),
        CacheValue::Opaque(_) => {
            return Err(CacheError::TypeMismatch {
                key: key.to_string(),
                found: ValueKind::Opaque,
            })
        }
    };
    model.order[pos].1 = next.clone();
    model.touch(pos);
    Ok(next)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any operation sequence leaves the store agreeing with the model on
    // contents and recency order, with index and list consistent.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    let evicted = store.put(key.clone(), value.clone()).map(|e| e.key);
                    prop_assert_eq!(evicted, model.put(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key).cloned(), model.get(&key));
                }
                CacheOp::Increment { key, delta } => {
                    prop_assert_eq!(store.increment(&key, delta), expected_mutation(&mut model, &key, delta));
                }
                CacheOp::Decrement { key, delta } => {
                    prop_assert_eq!(store.decrement(&key, delta), expected_mutation(&mut model, &key, -delta));
                }
            }
            store.assert_consistent();
            prop_assert_eq!(store.keys(), model.keys());
            prop_assert!(store.len() <= capacity);
        }
    }

    // Put followed immediately by get returns what was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(4).unwrap();
        store.put(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(&value));
    }

    // Inserting a new key at capacity evicts exactly the current tail.
    #[test]
    fn prop_eviction_removes_only_tail(
        keys in prop::collection::hash_set(key_strategy(), 2..10)
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len() - 1;
        let mut store = CacheStore::new(capacity).unwrap();

        for key in &keys[..capacity] {
            store.put(key.clone(), CacheValue::Integer(0));
        }
        let tail = store.keys().last().cloned();
        let survivors: Vec<String> = store.keys().into_iter().take(capacity - 1).collect();

        let evicted = store.put(keys[capacity].clone(), CacheValue::Integer(1));
        prop_assert_eq!(evicted.map(|e| e.key), tail);
        prop_assert_eq!(store.len(), capacity);
        for key in survivors {
            prop_assert!(store.contains(&key));
        }
    }

    // Numeric mutation never changes the value's kind.
    #[test]
    fn prop_mutation_preserves_kind(
        value in prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(CacheValue::Integer),
            (-1.0e6f64..1.0e6).prop_map(CacheValue::Float),
        ],
        deltas in prop::collection::vec(-1000i64..1000, 1..20)
    ) {
        let mut store = CacheStore::new(1).unwrap();
        let kind = value.kind();
        store.put("n".to_string(), value);

        for delta in deltas {
            let updated = if delta % 2 == 0 {
                store.increment("n", delta).unwrap()
            } else {
                store.decrement("n", delta).unwrap()
            };
            prop_assert_eq!(updated.kind(), kind);
        }
    }

    // A miss changes neither membership nor recency.
    #[test]
    fn prop_miss_is_idempotent(
        keys in prop::collection::vec(key_strategy(), 1..10),
        probe in "[g-z]{1,3}"
    ) {
        let mut store = CacheStore::new(8).unwrap();
        for key in keys {
            store.put(key, CacheValue::Integer(1));
        }
        let before = store.keys();

        prop_assert!(store.get(&probe).is_none());
        prop_assert_eq!(store.keys(), before);
    }
}
