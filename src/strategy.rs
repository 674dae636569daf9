//! HashStrategy: the pluggable hash capability and bucket normalization.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

/// A caller-supplied hash function mapping a key to a signed 64-bit hash.
///
/// The table normalizes the result into bucket range itself; strategies may
/// return any `i64`, negative values included. A strategy must be
/// deterministic for the lifetime of the table, otherwise entries become
/// unreachable through `get`.
pub trait HashStrategy {
    fn hash_key(&self, key: &str) -> i64;
}

/// Any `Fn(&str) -> i64` closure is a strategy.
impl<F> HashStrategy for F
where
    F: Fn(&str) -> i64,
{
    fn hash_key(&self, key: &str) -> i64 {
        self(key)
    }
}

/// Sum of the key's byte values. Weak but cheap and easy to reason about;
/// useful for tests and small fixed keysets.
#[derive(Copy, Clone, Debug, Default)]
pub struct ByteSum;

impl HashStrategy for ByteSum {
    fn hash_key(&self, key: &str) -> i64 {
        key.bytes().map(i64::from).sum()
    }
}

/// Strategy backed by the standard library's `RandomState`. Each instance
/// hashes differently across program runs.
#[derive(Clone, Debug, Default)]
pub struct StdRandom(RandomState);

impl StdRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashStrategy for StdRandom {
    fn hash_key(&self, key: &str) -> i64 {
        self.0.hash_one(key) as i64
    }
}

/// Normalize a raw hash into `[0, capacity)`. `unsigned_abs` avoids the
/// overflow of `abs()` on `i64::MIN`.
pub(crate) fn bucket_index(hash: i64, capacity: usize) -> usize {
    (hash.unsigned_abs() % capacity as u64) as usize
}
