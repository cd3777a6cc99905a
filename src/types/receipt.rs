//! Save receipt summarizing the inventory at a point in time.
//!
//! The receipt is produced in memory; nothing is written to disk.

use std::fmt;

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::record::date_from_day_number;

/// Summary returned by [`Hotel::save`](crate::Hotel::save).
///
/// ## State Root
///
/// SHA-256 over the SSZ encoding of every room record in flat-index order.
/// Two hotels with the same rooms in the same states share a state root.
///
/// ## Example
///
/// ```
/// use hotel_desk::types::InventoryReceipt;
///
/// let receipt = InventoryReceipt::with_computed_root(1, 6, 2, 3, b"rooms", 739_000);
/// assert_eq!(receipt.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct InventoryReceipt {
    /// Save sequence number on this hotel, starting at 1
    pub sequence: u64,

    pub rooms_total: u64,

    pub rooms_occupied: u64,

    /// Guests ever registered (guests are never removed)
    pub guests_registered: u64,

    /// Hash of the room records (32 bytes)
    pub state_root: [u8; 32],

    /// Save date as days from the common era
    pub day: u64,
}

impl InventoryReceipt {
    pub fn new(
        sequence: u64,
        rooms_total: u64,
        rooms_occupied: u64,
        guests_registered: u64,
        state_root: [u8; 32],
        day: u64,
    ) -> Self {
        Self {
            sequence,
            rooms_total,
            rooms_occupied,
            guests_registered,
            state_root,
            day,
        }
    }

    /// Create a receipt hashing `state_data` into the state root
    pub fn with_computed_root(
        sequence: u64,
        rooms_total: u64,
        rooms_occupied: u64,
        guests_registered: u64,
        state_data: &[u8],
        day: u64,
    ) -> Self {
        let state_root = Self::compute_hash(state_data);
        Self::new(sequence, rooms_total, rooms_occupied, guests_registered, state_root, day)
    }

    /// SHA-256 of `data`
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Check if the hotel had no rooms when saved
    pub fn is_empty(&self) -> bool {
        self.rooms_total == 0
    }

    /// Occupied rooms / total rooms, `None` for an empty hotel
    pub fn occupancy_rate(&self) -> Option<f64> {
        if self.rooms_total == 0 {
            None
        } else {
            Some(self.rooms_occupied as f64 / self.rooms_total as f64)
        }
    }
}

impl fmt::Display for InventoryReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Save #{}", self.sequence)?;
        if let Some(date) = date_from_day_number(self.day) {
            writeln!(f, "Date: {date}")?;
        }
        writeln!(f, "Rooms: {} ({} occupied)", self.rooms_total, self.rooms_occupied)?;
        writeln!(f, "Guests: {}", self.guests_registered)?;
        write!(f, "State root: {}", self.state_root_hex())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
