//! Core data types for the hotel.
//!
//! ## Types
//!
//! - [`Room`]: rentable unit with its occupancy state machine
//! - [`Guest`]: named occupant, back-referencing its room by id
//! - [`GuestRegistry`]: name-keyed guest index
//! - [`RoomRecord`]: SSZ snapshot row of a room
//! - [`InventoryReceipt`]: save summary with state root
//!
//! ## Ownership
//!
//! Rooms refer to guests by name and guests refer to rooms by id, so there
//! is no reference cycle between them.

mod guest;
mod receipt;
mod room;
pub mod record;

pub use guest::{Guest, GuestRegistry};
pub use receipt::InventoryReceipt;
pub use record::RoomRecord;
pub use room::{FloorNumber, Room, RoomId};
