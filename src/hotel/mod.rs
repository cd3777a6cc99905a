//! Hotel aggregate and its supporting pieces.
//!
//! ## Components
//!
//! - [`Hotel`]: owns rooms and guests, provisions rooms, runs rentals
//! - [`RoomIdAllocator`]: per-hotel room id issuance
//! - [`RoomView`], [`PriceEntry`], [`FloorView`]: read-only projections
//!
//! ## Room Ids
//!
//! | Floor | Rooms |
//! |-------|-------|
//! | 0 | 001, 002, ... |
//! | 1 | 101, 102, ... |
//! | n | 100n + 1, ... |

pub mod allocator;
pub mod inventory;
pub mod view;

pub use allocator::{RoomIdAllocator, ROOMS_PER_FLOOR_LIMIT};
pub use inventory::Hotel;
pub use view::{format_room_id, FloorView, PriceEntry, RoomView};
