//! Entry node for slab-based ordered storage.
//!
//! ## Design
//!
//! `EntryNode` wraps a key/value pair with doubly-linked list pointers so
//! that the owning [`OrderedMap`](crate::index::OrderedMap) can walk its
//! entries in arrival order and unlink any one of them in O(1).
//!
//! ## Linked List
//!
//! Entries form a single list ordered by first insertion:
//! - `next`: slab key of the entry inserted after this one
//! - `prev`: slab key of the entry inserted before this one
//!
//! The pointers are slab keys (`usize`), not references.

/// Map entry stored in the slab.
#[derive(Debug, Clone)]
pub struct EntryNode<K, V> {
    /// The entry key
    pub key: K,

    /// The entry value
    pub value: V,

    /// Next entry in insertion order (slab key)
    /// None if this is the tail (newest entry)
    pub next: Option<usize>,

    /// Previous entry in insertion order (slab key)
    /// None if this is the head (oldest entry)
    pub prev: Option<usize>,
}

impl<K, V> EntryNode<K, V> {
    /// Create a new, unlinked entry node
    ///
    /// # Example
    ///
    /// ```
    /// use hotel_desk::index::EntryNode;
    ///
    /// let node = EntryNode::new("a", 1);
    ///
    /// assert!(node.next.is_none());
    /// assert!(node.prev.is_none());
    /// ```
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (no neighbours)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Replace the value, returning the previous one
    #[inline]
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
