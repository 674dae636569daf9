//! ChainHashMap: fixed bucket array with tail-appended collision chains.

use crate::cursor::{Cursor, Iter};
use crate::strategy::{bucket_index, HashStrategy};
use slotmap::{DefaultKey, SlotMap};

/// One chain entry. Owns its key; `next` links to the following node in the
/// same bucket, so each node belongs to exactly one bucket.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: Box<str>,
    pub(crate) value: i64,
    pub(crate) next: Option<DefaultKey>,
}

/// Construction failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NewError {
    /// Capacity must be a positive number of buckets.
    ZeroCapacity,
    /// The bucket array could not be reserved.
    AllocationFailed,
}

/// Insertion failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PutError {
    /// No hash strategy has been attached yet.
    NoStrategy,
}

/// Lookup failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GetError {
    /// No hash strategy has been attached yet.
    NoStrategy,
    /// No entry with the given key exists. Distinct from a stored value of
    /// zero, which `get` reports as `Ok(0)`.
    KeyNotFound,
}

/// A fixed-capacity map from string keys to `i64` values.
///
/// Collisions chain off a fixed array of bucket heads; the chain nodes
/// themselves live in a slotmap arena and link to each other by key. The
/// table owns every node and each node owns its key string.
pub struct ChainHashMap {
    buckets: Box<[Option<DefaultKey>]>,
    nodes: SlotMap<DefaultKey, Node>,
    strategy: Option<Box<dyn HashStrategy>>,
    len: usize,
}

impl ChainHashMap {
    /// Create an empty table with `capacity` buckets and no hash strategy.
    /// Key operations fail with `NoStrategy` until one is attached.
    pub fn new(capacity: usize) -> Result<Self, NewError> {
        if capacity == 0 {
            return Err(NewError::ZeroCapacity);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| NewError::AllocationFailed)?;
        buckets.resize_with(capacity, || None);
        Ok(Self {
            buckets: buckets.into_boxed_slice(),
            nodes: SlotMap::with_key(),
            strategy: None,
            len: 0,
        })
    }

    /// Create a table with a strategy already attached.
    pub fn with_strategy<H>(capacity: usize, strategy: H) -> Result<Self, NewError>
    where
        H: HashStrategy + 'static,
    {
        let mut table = Self::new(capacity)?;
        table.set_hash_strategy(strategy);
        Ok(table)
    }

    /// Attach (or replace) the hash strategy. Replacing the strategy on a
    /// populated table leaves existing entries where their old hashes put
    /// them, so `get` may no longer find them; iteration still visits all.
    pub fn set_hash_strategy<H>(&mut self, strategy: H) -> &mut Self
    where
        H: HashStrategy + 'static,
    {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries. Duplicate-key puts each count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_of(&self, key: &str) -> Option<usize> {
        let strategy = self.strategy.as_deref()?;
        Some(bucket_index(strategy.hash_key(key), self.buckets.len()))
    }

    /// Insert an entry, appending at the tail of its bucket's chain.
    ///
    /// No duplicate check is made: putting the same key twice stores two
    /// independent nodes, both visited by iteration, and `get` returns the
    /// earliest-inserted one. Appending at the tail is O(chain length) and
    /// keeps iteration in insertion order within a bucket.
    pub fn put(&mut self, key: &str, value: i64) -> Result<(), PutError> {
        let idx = self.bucket_of(key).ok_or(PutError::NoStrategy)?;
        let node = self.nodes.insert(Node {
            key: key.into(),
            value,
            next: None,
        });
        match self.buckets[idx] {
            None => self.buckets[idx] = Some(node),
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.nodes[tail].next {
                    tail = next;
                }
                self.nodes[tail].next = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Look up a key, scanning its bucket's chain in order.
    ///
    /// For a duplicated key this returns the value of the *oldest* entry,
    /// since puts append at the tail and the scan stops at the first match.
    pub fn get(&self, key: &str) -> Result<i64, GetError> {
        let idx = self.bucket_of(key).ok_or(GetError::NoStrategy)?;
        let mut cursor = self.buckets[idx];
        while let Some(k) = cursor {
            let node = &self.nodes[k];
            if &*node.key == key {
                return Ok(node.value);
            }
            cursor = node.next;
        }
        Err(GetError::KeyNotFound)
    }

    /// Remove every entry. Capacity and the attached strategy are kept, so
    /// the table is immediately usable again.
    pub fn clear(&mut self) {
        // Arena clear frees nodes in a loop; chains are never walked, so no
        // teardown recursion regardless of chain length.
        self.nodes.clear();
        for head in self.buckets.iter_mut() {
            *head = None;
        }
        self.len = 0;
    }

    /// Position a cursor on the first entry in bucket order, or exhausted
    /// if the table is empty.
    pub fn first(&self) -> Cursor<'_> {
        Cursor::first(self)
    }

    /// Iterate all entries as `(&str, i64)` pairs, bucket order then chain
    /// order. Deterministic for a fixed capacity, strategy, and insertion
    /// sequence.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub(crate) fn bucket_head(&self, index: usize) -> Option<DefaultKey> {
        self.buckets[index]
    }

    pub(crate) fn node(&self, key: DefaultKey) -> &Node {
        &self.nodes[key]
    }
}

impl std::fmt::Debug for ChainHashMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainHashMap")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("strategy", &self.strategy.is_some())
            .finish()
    }
}
