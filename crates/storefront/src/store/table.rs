//! Insertion-ordered keyed collection.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A keyed collection that iterates in insertion order.
///
/// Rows live in a `BTreeMap` keyed by a monotonically increasing sequence
/// number, with a side index from entity key to sequence. Point lookups and
/// removals are `O(log n)`; scans walk rows oldest first. Replacing an
/// existing key keeps the row's original position.
#[derive(Debug)]
pub struct Table<K, V> {
    rows: BTreeMap<u64, V>,
    index: HashMap<K, u64>,
    next_seq: u64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq + Hash, V> Table<K, V> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, replacing any row with the same key in place.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(seq) = self.index.get(&key) {
            self.rows.insert(*seq, value);
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(key, seq);
        self.rows.insert(seq, value);
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|seq| self.rows.get(seq))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).and_then(|seq| self.rows.get_mut(seq))
    }

    /// Remove a row, returning it if it existed.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let seq = self.index.remove(key)?;
        self.rows.remove(&seq)
    }

    /// Remove every row for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&V) -> bool) {
        self.rows.retain(|_, value| keep(value));
        let rows = &self.rows;
        self.index.retain(|_, seq| rows.contains_key(seq));
    }

    /// Rows in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.values()
    }

    /// Mutable rows in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.rows.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
