//! Insertion-ordered associative container.
//!
//! ## Architecture
//!
//! `OrderedMap` combines two structures:
//!
//! - **Slab**: entry storage, each entry linked to its neighbours in
//!   arrival order
//! - **HashMap**: key to slab key mapping for O(1) lookup and removal
//!
//! ## Ordering
//!
//! ```text
//! head (first inserted) <-> entry2 <-> entry3 <-> tail (last inserted)
//! ```
//!
//! - A new key is appended at the tail
//! - Updating an existing key replaces its value in place (no move)
//! - Removing a key unlinks its entry; the others keep their order
//! - A removed key inserted again counts as a fresh arrival
//!
//! Absence is always `None`, never an error.
//!
//! ## Example
//!
//! ```
//! use hotel_desk::index::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! assert_eq!(map.put("b", 1), None);
//! assert_eq!(map.put("a", 2), None);
//! assert_eq!(map.put("b", 3), Some(1));
//!
//! assert_eq!(map.keys(), vec!["b", "a"]);
//! assert_eq!(map.values(), vec![3, 2]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

use slab::Slab;

use crate::index::EntryNode;

/// Ordered key/value mapping keyed by value equality.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    /// Entry storage
    /// Key: slab index, Value: EntryNode
    entries: Slab<EntryNode<K, V>>,

    /// Key to slab index
    index: HashMap<K, usize>,

    /// Oldest entry (slab key)
    head: Option<usize>,

    /// Newest entry (slab key)
    tail: Option<usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Slab::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pre-allocated entry slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    // ========================================================================
    // Ordered Access
    // ========================================================================

    /// Borrowing iterator over `(key, value)` in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: &self.entries,
            cursor: self.head,
            remaining: self.entries.len(),
        }
    }

    /// Key of the oldest entry
    pub fn first_key(&self) -> Option<&K> {
        self.head.map(|slot| &self.entries[slot].key)
    }

    /// Snapshot of the keys in insertion order.
    ///
    /// The returned vector is independent of the map; later mutation of
    /// the map does not affect it.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of the values in insertion order, aligned with [`keys`](Self::keys).
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Linear scan for a value
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    // ========================================================================
    // List Maintenance
    // ========================================================================

    /// Append an already-stored entry at the tail
    fn link_back(&mut self, slot: usize) {
        let old_tail = self.tail;
        {
            let node = &mut self.entries[slot];
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(tail) => self.entries[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Detach an entry from its neighbours without freeing it
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = {
            let node = &self.entries[slot];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.entries[slot];
        node.prev = None;
        node.next = None;
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    // ========================================================================
    // Entry Management
    // ========================================================================

    /// Insert or update.
    ///
    /// A new key is appended after every existing entry and `None` is
    /// returned. An existing key keeps its position; its previous value is
    /// returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(self.entries[slot].replace(value));
        }

        let slot = self.entries.insert(EntryNode::new(key.clone(), value));
        self.index.insert(key, slot);
        self.link_back(slot);
        None
    }

    /// Value for `key`, if present
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let &slot = self.index.get(key)?;
        self.entries.get(slot).map(|node| &node.value)
    }

    /// Mutable value for `key`, if present
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let &slot = self.index.get(key)?;
        self.entries.get_mut(slot).map(|node| &mut node.value)
    }

    /// Value for `key`, inserting `make()` at the tail first if absent
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.insert(EntryNode::new(key.clone(), make()));
                self.index.insert(key, slot);
                self.link_back(slot);
                slot
            }
        };
        &mut self.entries[slot].value
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = self.index.remove(key)?;
        self.unlink(slot);
        Some(self.entries.remove(slot).value)
    }

    /// Check if `key` is present
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Insertion-order iterator returned by [`OrderedMap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    entries: &'a Slab<EntryNode<K, V>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.entries.get(slot)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

// ============================================================================
// Unit Tests
// ============================================================================
