//! Rentable room and its occupancy state machine.
//!
//! ## States
//!
//! ```text
//!            rent(guest)
//!  Vacant ───────────────▶ Occupied ──┐ add_guest (≤ capacity - 1 times)
//!    ▲                        │  ◀────┘
//!    └────── check_out ───────┘
//! ```
//!
//! There is no terminal state; a room cycles indefinitely.
//!
//! ## Billing
//!
//! `check_out` charges `price` per whole calendar day between the
//! check-in date and today. A same-day check-out costs nothing. A check-in
//! date moved into the future yields a negative charge.

use chrono::NaiveDate;

use crate::clock::days_between;
use crate::error::{HotelError, HotelResult};
use crate::types::{Guest, GuestRegistry};

/// Room identifier: `100 * floor + position`
pub type RoomId = u32;

/// Floor number (hundreds digit of its room ids)
pub type FloorNumber = u32;

/// A priced, capacity-bounded rentable unit.
///
/// Guests are referenced by name; the [`GuestRegistry`] owns them.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hotel_desk::types::{Guest, Room};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let mut room = Room::new(101, 2, 100);
/// let mut alice = Guest::new("Alice");
///
/// room.rent(&mut alice, today).unwrap();
/// assert!(room.is_occupied());
/// assert_eq!(alice.room(), Some(101));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_id: RoomId,

    /// Maximum occupants including the primary guest
    capacity: u32,

    /// Per-night rate
    price: u32,

    occupied: bool,

    /// Primary occupant name
    guest: Option<String>,

    /// Additional occupant names, at most `capacity - 1`
    extra_guests: Vec<String>,

    /// Start of the current stay
    check_in_date: Option<NaiveDate>,
}

impl Room {
    /// Create a vacant room
    pub fn new(room_id: RoomId, capacity: u32, price: u32) -> Self {
        Self {
            room_id,
            capacity,
            price,
            occupied: false,
            guest: None,
            extra_guests: Vec::new(),
            check_in_date: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Primary guest name
    #[inline]
    pub fn guest(&self) -> Option<&str> {
        self.guest.as_deref()
    }

    #[inline]
    pub fn extra_guests(&self) -> &[String] {
        &self.extra_guests
    }

    #[inline]
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.check_in_date
    }

    /// Number of extra guests the room accepts besides the primary guest
    #[inline]
    pub fn extra_capacity(&self) -> usize {
        self.capacity.saturating_sub(1) as usize
    }

    /// Primary plus extra guests currently in the room
    pub fn occupant_count(&self) -> usize {
        usize::from(self.guest.is_some()) + self.extra_guests.len()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Vacant → Occupied.
    ///
    /// Links `guest` to this room and starts the stay on `today`.
    ///
    /// # Errors
    ///
    /// [`HotelError::AlreadyOccupied`] if the room is occupied; nothing
    /// changes in that case.
    pub fn rent(&mut self, guest: &mut Guest, today: NaiveDate) -> HotelResult<()> {
        if self.occupied {
            return Err(HotelError::AlreadyOccupied(self.room_id));
        }

        guest.set_room(Some(self.room_id));
        self.guest = Some(guest.name().to_string());
        self.check_in_date = Some(today);
        self.occupied = true;
        Ok(())
    }

    /// Add an extra occupant to an occupied room.
    ///
    /// The check-in date and primary guest are untouched.
    ///
    /// # Errors
    ///
    /// - [`HotelError::NotOccupied`] if the room is vacant
    /// - [`HotelError::CapacityExceeded`] once `capacity - 1` extras are in
    pub fn add_guest(&mut self, guest: &mut Guest) -> HotelResult<()> {
        if !self.occupied {
            return Err(HotelError::NotOccupied(self.room_id));
        }
        if self.extra_guests.len() >= self.extra_capacity() {
            return Err(HotelError::CapacityExceeded {
                room_id: self.room_id,
                extra_capacity: self.extra_capacity(),
            });
        }

        self.extra_guests.push(guest.name().to_string());
        guest.set_room(Some(self.room_id));
        Ok(())
    }

    /// Occupied → Vacant, returning the stay charge.
    ///
    /// Clears the room reference of the primary guest and of every extra
    /// guest found in `guests`.
    ///
    /// # Errors
    ///
    /// [`HotelError::NotOccupied`] if the room is vacant.
    pub fn check_out(&mut self, guests: &mut GuestRegistry, today: NaiveDate) -> HotelResult<i64> {
        if !self.occupied {
            return Err(HotelError::NotOccupied(self.room_id));
        }

        let released = self.guest.take().into_iter().chain(self.extra_guests.drain(..));
        for name in released {
            if let Some(guest) = guests.get_mut(name.as_str()) {
                guest.set_room(None);
            }
        }
        self.occupied = false;

        Ok(self.charge_until(today))
    }

    /// Charge for the current stay if it ended on `today`
    pub fn charge_until(&self, today: NaiveDate) -> i64 {
        self.check_in_date
            .map(|start| days_between(start, today).saturating_mul(i64::from(self.price)))
            .unwrap_or(0)
    }

    /// Override the stay start date (not checked against occupancy)
    pub fn set_check_in_date(&mut self, date: NaiveDate) {
        self.check_in_date = Some(date);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
