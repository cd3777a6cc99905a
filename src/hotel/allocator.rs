//! Room id issuance.
//!
//! Ids follow the floor scheme `100 * floor + position + 1`. Each hotel
//! owns one allocator, and an id is never handed out twice by it.

use std::collections::HashSet;

use crate::error::{HotelError, HotelResult};
use crate::types::{FloorNumber, RoomId};

/// Rooms a floor can hold before its ids run into the next floor
pub const ROOMS_PER_FLOOR_LIMIT: u32 = 99;

/// Tracks every room id issued by one hotel.
#[derive(Debug, Clone, Default)]
pub struct RoomIdAllocator {
    issued: HashSet<RoomId>,
}

impl RoomIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the room at zero-based `position` on `floor`.
    ///
    /// Positions at or above [`ROOMS_PER_FLOOR_LIMIT`] are not rejected and
    /// produce ids that belong to a higher floor.
    ///
    /// # Errors
    ///
    /// [`HotelError::InvalidArgument`] if the id does not fit a `RoomId`.
    pub fn room_id(floor: FloorNumber, position: u32) -> HotelResult<RoomId> {
        floor
            .checked_mul(100)
            .and_then(|base| base.checked_add(position))
            .and_then(|id| id.checked_add(1))
            .ok_or_else(|| {
                HotelError::InvalidArgument(format!(
                    "room {position} on floor {floor} is out of range"
                ))
            })
    }

    #[inline]
    pub fn is_issued(&self, id: RoomId) -> bool {
        self.issued.contains(&id)
    }

    /// Fail if `id` was already issued, without issuing it
    pub fn check(&self, id: RoomId) -> HotelResult<()> {
        if self.is_issued(id) {
            Err(HotelError::DuplicateIdentifier(id))
        } else {
            Ok(())
        }
    }

    /// Record `id` as issued
    pub fn issue(&mut self, id: RoomId) -> HotelResult<RoomId> {
        if self.issued.insert(id) {
            Ok(id)
        } else {
            Err(HotelError::DuplicateIdentifier(id))
        }
    }

    /// Number of ids issued so far
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
