//! Cursor and Iter: forward-only traversal over a table's entries.

use crate::table::ChainHashMap;
use slotmap::DefaultKey;

/// Accessor called on an exhausted cursor.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Exhausted;

/// A forward-only position in a table's entries: bucket-index ascending,
/// then chain order within a bucket (oldest insertion first, since puts
/// append at the tail).
///
/// The cursor borrows the table for its whole lifetime, so the table cannot
/// be mutated or dropped while a cursor is live. A traversal is restarted
/// from scratch by calling [`ChainHashMap::first`] again.
pub struct Cursor<'a> {
    table: &'a ChainHashMap,
    bucket: usize,
    node: Option<DefaultKey>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn first(table: &'a ChainHashMap) -> Self {
        let mut cursor = Cursor {
            table,
            bucket: 0,
            node: None,
        };
        cursor.node = cursor.seek_from(0);
        cursor
    }

    // Scan buckets from `start` for the next non-empty head, leaving
    // `bucket` either on that head's index or at capacity when none remain.
    fn seek_from(&mut self, start: usize) -> Option<DefaultKey> {
        self.bucket = start;
        while self.bucket < self.table.capacity() {
            if let Some(head) = self.table.bucket_head(self.bucket) {
                return Some(head);
            }
            self.bucket += 1;
        }
        None
    }

    /// True once traversal has moved past the last entry.
    pub fn is_done(&self) -> bool {
        self.node.is_none()
    }

    /// Step to the next entry: the chain's next node if any, otherwise the
    /// head of the next non-empty bucket. A no-op once exhausted.
    pub fn advance(&mut self) {
        let Some(current) = self.node else { return };
        self.node = match self.table.node(current).next {
            Some(next) => Some(next),
            None => self.seek_from(self.bucket + 1),
        };
    }

    /// The key under the cursor, or `Exhausted` past the end.
    pub fn key(&self) -> Result<&'a str, Exhausted> {
        let node = self.node.ok_or(Exhausted)?;
        Ok(&self.table.node(node).key)
    }

    /// The value under the cursor, or `Exhausted` past the end.
    pub fn value(&self) -> Result<i64, Exhausted> {
        let node = self.node.ok_or(Exhausted)?;
        Ok(self.table.node(node).value)
    }
}

/// Iterator over `(&str, i64)` pairs in cursor order.
pub struct Iter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(table: &'a ChainHashMap) -> Self {
        Iter {
            cursor: Cursor::first(table),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor.key().ok()?;
        let value = self.cursor.value().ok()?;
        self.cursor.advance();
        Some((key, value))
    }
}

impl<'a> IntoIterator for &'a ChainHashMap {
    type Item = (&'a str, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
