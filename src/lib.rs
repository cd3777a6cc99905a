//! # Hotel Desk
//!
//! In-memory room inventory for a single hotel.
//!
//! ## Architecture
//!
//! - **Index**: insertion-ordered map with O(1) lookup, used for every index
//! - **Types**: Room state machine, Guest, SSZ records and save receipts
//! - **Hotel**: owns rooms and guests, provisions floors, runs rentals
//! - **Desk**: interactive command loop over a console
//!
//! ## Design Principles
//!
//! 1. **Determinism**: iteration follows insertion order; saves hash the
//!    same inventory to the same state root
//! 2. **No Floating Point**: prices and charges are integers
//! 3. **Injected Time**: "today" comes from a [`Clock`], never a global
//! 4. **Synchronous Execution**: a single operator mutates the hotel

// ============================================================================
// Module declarations
// ============================================================================

/// Calendar source for check-in and billing
pub mod clock;

/// Startup provisioning parameters
pub mod config;

/// Interactive command layer
pub mod desk;

pub mod error;

/// Hotel aggregate, id allocation and projections
pub mod hotel;

/// Insertion-ordered associative container
pub mod index;

/// Core data types: Room, Guest, RoomRecord, InventoryReceipt
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::HotelConfig;
pub use error::{HotelError, HotelResult};
pub use hotel::{FloorView, Hotel, PriceEntry, RoomView};
pub use index::OrderedMap;
pub use types::{FloorNumber, Guest, InventoryReceipt, Room, RoomId};
