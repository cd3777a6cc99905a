//! Read-only projections of the inventory.
//!
//! These are plain values detached from the hotel; printing them does not
//! touch hotel state.

use std::fmt;

use chrono::NaiveDate;

use crate::types::{FloorNumber, Room, RoomId};

/// Room id as printed: at least three digits (`001`, `101`)
pub fn format_room_id(id: RoomId) -> String {
    format!("{id:03}")
}

/// Detail of a single room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub room_id: RoomId,
    pub capacity: u32,
    pub price: u32,
    pub occupied: bool,
    pub guest: Option<String>,
    pub extra_guests: Vec<String>,
    pub check_in_date: Option<NaiveDate>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.room_id(),
            capacity: room.capacity(),
            price: room.price(),
            occupied: room.is_occupied(),
            guest: room.guest().map(str::to_string),
            extra_guests: room.extra_guests().to_vec(),
            check_in_date: room.check_in_date(),
        }
    }
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RoomID: {}", format_room_id(self.room_id))?;
        writeln!(f, "Price: {}", self.price)?;
        write!(f, "Occupied: {}", self.occupied)?;

        if let (true, Some(guest)) = (self.occupied, &self.guest) {
            if self.extra_guests.is_empty() {
                write!(f, "\nGuest : {guest}")?;
            } else {
                write!(f, "\nGuests : {guest}")?;
                for extra in &self.extra_guests {
                    write!(f, ", {extra}")?;
                }
            }
        }
        Ok(())
    }
}

/// One line of the price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEntry {
    pub room_id: RoomId,
    pub price: u32,
}

impl fmt::Display for PriceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomID: {} Price: {}", format_room_id(self.room_id), self.price)
    }
}

/// Room ids on one floor, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorView {
    pub floor: FloorNumber,
    pub room_ids: Vec<RoomId>,
}

impl fmt::Display for FloorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.room_ids {
            write!(f, "{} |", format_room_id(*id))?;
        }
        Ok(())
    }
}
