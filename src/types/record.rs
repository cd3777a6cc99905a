//! Snapshot row for a single room.
//!
//! ## SSZ Serialization
//!
//! `RoomRecord` derives `SimpleSerialize` from ssz_rs so every room encodes
//! to the same bytes on every run. The inventory state root is a hash over
//! these encodings, in flat-index order.
//!
//! ## Layout
//!
//! Fixed-size container, 49 bytes:
//! - room_id, floor, capacity, price: 4 × u64
//! - occupied: bool (1 byte)
//! - occupants, check_in_day: 2 × u64

use chrono::{Datelike, NaiveDate};
use ssz_rs::prelude::*;

use crate::error::{HotelError, HotelResult};
use crate::types::{FloorNumber, Room};

/// Encoded state of one room.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct RoomRecord {
    pub room_id: u64,

    /// Floor the room is indexed under
    pub floor: u64,

    pub capacity: u64,

    /// Per-night rate
    pub price: u64,

    pub occupied: bool,

    /// Primary plus extra guests
    pub occupants: u64,

    /// Check-in date as days from 0001-01-01 (CE day 1), 0 when vacant
    pub check_in_day: u64,
}

impl RoomRecord {
    /// Capture `room` as indexed under `floor`
    pub fn from_room(room: &Room, floor: FloorNumber) -> Self {
        let check_in_day = if room.is_occupied() {
            room.check_in_date().map(day_number).unwrap_or(0)
        } else {
            0
        };

        Self {
            room_id: u64::from(room.room_id()),
            floor: u64::from(floor),
            capacity: u64::from(room.capacity()),
            price: u64::from(room.price()),
            occupied: room.is_occupied(),
            occupants: room.occupant_count() as u64,
            check_in_day,
        }
    }

    /// SSZ bytes of this record
    pub fn encode(&self) -> HotelResult<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| HotelError::Encoding(format!("{e:?}")))
    }
}

/// Days since the common era for `date`, 0 for dates before it
pub fn day_number(date: NaiveDate) -> u64 {
    u64::try_from(date.num_days_from_ce()).unwrap_or(0)
}

/// Inverse of [`day_number`]; day 0 means "no date"
pub fn date_from_day_number(day: u64) -> Option<NaiveDate> {
    if day == 0 {
        return None;
    }
    i32::try_from(day)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}
