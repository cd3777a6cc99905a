//! Error kinds raised by the hotel core.
//!
//! Every variant is recoverable: the desk layer prints the message and
//! keeps accepting commands.

use thiserror::Error;

use crate::types::RoomId;

/// Errors returned by room, guest and hotel operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelError {
    /// Non-positive counts, missing floor, zero capacity
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Room id already issued by this hotel
    #[error("room id {0} already exists")]
    DuplicateIdentifier(RoomId),

    /// Rent attempted on an occupied room
    #[error("room {0} is already occupied")]
    AlreadyOccupied(RoomId),

    /// Unknown room id
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// Extra guest beyond `capacity - 1`
    #[error("room {room_id} is full ({extra_capacity} extra guests allowed)")]
    CapacityExceeded {
        room_id: RoomId,
        extra_capacity: usize,
    },

    /// No vacant room for an unaddressed rent request
    #[error("no free room found")]
    NoVacancy,

    /// Check-out or extra-guest add on a vacant room
    #[error("room {0} is not occupied")]
    NotOccupied(RoomId),

    /// Snapshot encoding failed
    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}

/// Result alias for core operations
pub type HotelResult<T> = Result<T, HotelError>;
