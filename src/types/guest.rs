//! Guest identity and the name-keyed guest registry.
//!
//! A guest is identified by name alone. Two people sharing a name share
//! one `Guest`; checking either of them out clears the single room
//! reference.

use crate::index::OrderedMap;
use crate::types::RoomId;

/// Every guest the hotel has seen, keyed by name, in first-seen order
pub type GuestRegistry = OrderedMap<String, Guest>;

/// A named occupant, primary or extra, of at most one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: String,

    /// Room the guest currently stays in (id only, the room owns occupancy)
    room: Option<RoomId>,
}

impl Guest {
    /// Create a guest that is not checked in
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current room, `None` when not checked in
    #[inline]
    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    #[inline]
    pub fn is_checked_in(&self) -> bool {
        self.room.is_some()
    }

    pub(crate) fn set_room(&mut self, room: Option<RoomId>) {
        self.room = room;
    }
}
