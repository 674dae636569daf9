//! chain-hashmap: a fixed-capacity, single-threaded map from string keys
//! to `i64` values, resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a minimal associative container for embedding in low-level
//!   programs; no resizing, no rebalancing, no concurrency.
//! - Layers:
//!   - HashStrategy: the caller-supplied hash capability. The table is
//!     unusable for key operations until one is attached.
//!   - ChainHashMap: a boxed slice of bucket heads fixed at construction,
//!     with chain nodes stored in a slotmap arena and linked by key.
//!   - Cursor/Iter: a forward-only traversal in bucket-index order, then
//!     chain order within a bucket.
//!
//! Constraints
//! - Capacity is fixed for the table's lifetime. Lookup and insert degrade
//!   linearly with load; there is no amortized-O(1) guarantee.
//! - `put` never checks for an existing entry: inserting the same key twice
//!   stores two nodes, and `get` returns the earliest-inserted one. This is
//!   documented behavior, not an upsert.
//! - Single-threaded: no atomics, no locking.
//!
//! Hash width
//! - Strategies return `i64`. The bucket index is
//!   `unsigned_abs(hash) % capacity`, so negative hashes (including
//!   `i64::MIN`) always land in range.
//!
//! Notes and non-goals
//! - No removal of individual keys; `clear` empties the whole table while
//!   keeping its capacity.
//! - No load-factor tracking or growth; callers choose capacity up front.
//! - Node storage lives in a `SlotMap`, so clearing and dropping the table
//!   free chains iteratively rather than by walking `next` links.
//! - Iteration borrows the table, so mutating during a traversal is a
//!   compile error rather than a documented precondition.

mod cursor;
mod strategy;
mod table;
mod table_proptest;

// Public surface
pub use cursor::{Cursor, Exhausted, Iter};
pub use strategy::{ByteSum, HashStrategy, StdRandom};
pub use table::{ChainHashMap, GetError, NewError, PutError};
