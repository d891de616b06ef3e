//! Insertion-ordered hash storage and hash-key derivation.
//!
//! A Skrip hash remembers the order its distinct keys first appeared in:
//! iteration follows that order, re-assigning an existing key keeps its
//! position, and inserting a new key appends. The order is maintained
//! explicitly as a key list next to the pair map.
//!
//! Keys are indexed by [`HashKey`], a `(kind tag, 64-bit digest)` pair so
//! structurally equal keys collide regardless of value identity. String
//! digests use FNV-1a, which is stable across builds and platforms.

use std::fmt;

use rustc_hash::FxHashMap;

use super::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over raw bytes.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Kind tag of a hashable value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HashKeyTag {
    Integer,
    Float,
    Boolean,
    Str,
}

/// Derived index of a hashable value: kind tag plus 64-bit digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct HashKey {
    pub tag: HashKeyTag,
    pub digest: u64,
}

impl Value {
    /// Derive the hash-key of this value, or `None` when the value kind
    /// cannot be used as a hash key.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Int(value) => Some(HashKey {
                tag: HashKeyTag::Integer,
                // Bit-preserving i64 -> u64 reinterpretation.
                digest: u64::from_ne_bytes(value.to_ne_bytes()),
            }),
            Value::Float(value) => Some(HashKey {
                tag: HashKeyTag::Float,
                digest: value.to_bits(),
            }),
            Value::Bool(value) => Some(HashKey {
                tag: HashKeyTag::Boolean,
                digest: u64::from(*value),
            }),
            Value::Str(value) => Some(HashKey {
                tag: HashKeyTag::Str,
                digest: fnv1a_64(value.as_bytes()),
            }),
            _ => None,
        }
    }
}

/// One stored entry: the original key value plus the mapped value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Insertion-ordered hash: explicit key order plus a pair map.
#[derive(Clone, Debug, Default)]
pub struct HashValue {
    order: Vec<HashKey>,
    pairs: FxHashMap<HashKey, HashPair>,
}

impl HashValue {
    pub fn new() -> Self {
        HashValue::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Upsert: a new key appends to the order, an existing key keeps its
    /// position and only the pair is replaced.
    pub fn insert(&mut self, hash_key: HashKey, pair: HashPair) {
        if self.pairs.insert(hash_key, pair).is_none() {
            self.order.push(hash_key);
        }
    }

    pub fn get(&self, hash_key: &HashKey) -> Option<&HashPair> {
        self.pairs.get(hash_key)
    }

    /// Pairs in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HashPair> + '_ {
        self.order.iter().filter_map(|key| self.pairs.get(key))
    }

    /// Merge `other` into a copy of `self`: the left order is preserved
    /// and keys absent on the left append in the right's insertion order.
    /// Keys present on both sides take the right's value in place.
    #[must_use]
    pub fn merged(&self, other: &HashValue) -> HashValue {
        let mut result = self.clone();
        for key in &other.order {
            if let Some(pair) = other.pairs.get(key) {
                result.insert(*key, pair.clone());
            }
        }
        result
    }

    /// Structural equality: same cardinality, and every left pair has a
    /// right pair under the same hash-key whose key and value have the
    /// same canonical string form.
    pub fn structural_eq(&self, other: &HashValue) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.order.iter().all(|key| {
            match (self.pairs.get(key), other.pairs.get(key)) {
                (Some(left), Some(right)) => {
                    left.key.inspect() == right.key.inspect()
                        && left.value.inspect() == right.value.inspect()
                }
                _ => false,
            }
        })
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.pairs == other.pairs
    }
}

impl fmt::Display for HashValue {
    /// `{k: v, ...}` with the rendered entries sorted lexicographically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<String> = self
            .iter()
            .map(|pair| format!("{}: {}", pair.key.inspect(), pair.value.inspect()))
            .collect();
        entries.sort();

        write!(f, "{{{}}}", entries.join(", "))
    }
}
