//! Associative container used for every hotel index.
//!
//! ## Components
//!
//! - [`EntryNode`]: key/value pair with linked-list pointers
//! - [`OrderedMap`]: slab-backed map iterating in first-insertion order
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | put | O(1) average |
//! | get / contains_key | O(1) average |
//! | remove | O(1) average |
//! | contains_value | O(n) |
//! | keys / values snapshot | O(n) |

pub mod node;
pub mod ordered_map;

pub use node::EntryNode;
pub use ordered_map::{Iter, OrderedMap};
