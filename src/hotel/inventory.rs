//! Hotel aggregate: room storage, indices and rental orchestration.
//!
//! ## Architecture
//!
//! - **Slab**: owns every `Room` (with the floor it was placed on)
//! - **rooms**: `OrderedMap<RoomId, slot>`, the flat index, in creation order
//! - **floors**: `OrderedMap<FloorNumber, OrderedMap<RoomId, slot>>`, the
//!   same rooms grouped by floor
//! - **guests**: `GuestRegistry`, every guest ever named
//!
//! Both room indices point at the same slab slots, so a change made through
//! one is seen through the other. Rooms are never removed.
//!
//! ## Example
//!
//! ```
//! use hotel_desk::Hotel;
//!
//! let mut hotel = Hotel::new();
//! hotel.generate_rooms(2, 3, 4, 100).unwrap();
//!
//! hotel.check_in(101, "Alice", &["Bob"]).unwrap();
//! assert!(hotel.room(101).unwrap().is_occupied());
//!
//! let charge = hotel.check_out(101).unwrap();
//! assert_eq!(charge, 0);
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;
use slab::Slab;
use tracing::{debug, info, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::HotelConfig;
use crate::error::{HotelError, HotelResult};
use crate::hotel::{FloorView, PriceEntry, RoomIdAllocator, RoomView};
use crate::index::OrderedMap;
use crate::types::{
    FloorNumber, Guest, GuestRegistry, InventoryReceipt, Room, RoomId, RoomRecord,
};
use crate::types::record::day_number;

/// A room together with the floor it is indexed under
#[derive(Debug, Clone)]
struct Placement {
    floor: FloorNumber,
    room: Room,
}

/// Single-hotel inventory.
#[derive(Debug, Clone)]
pub struct Hotel<C = SystemClock> {
    /// Room storage
    placements: Slab<Placement>,

    /// Room id → slab key, in creation order
    rooms: OrderedMap<RoomId, usize>,

    /// Floor → (room id → slab key)
    floors: OrderedMap<FloorNumber, OrderedMap<RoomId, usize>>,

    guests: GuestRegistry,

    allocator: RoomIdAllocator,

    clock: C,

    /// Number of saves taken
    saves: u64,
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

impl Hotel<SystemClock> {
    /// Empty hotel on the system calendar
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Hotel on the system calendar, provisioned from `config`
    pub fn from_config(config: &HotelConfig) -> HotelResult<Self> {
        let mut hotel = Self::new();
        hotel.provision(config)?;
        Ok(hotel)
    }
}

impl<C: Clock> Hotel<C> {
    /// Empty hotel reading "today" from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            placements: Slab::new(),
            rooms: OrderedMap::new(),
            floors: OrderedMap::new(),
            guests: GuestRegistry::new(),
            allocator: RoomIdAllocator::new(),
            clock,
            saves: 0,
        }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ========================================================================
    // Size and Lookup
    // ========================================================================

    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.placements.iter().filter(|(_, p)| p.room.is_occupied()).count()
    }

    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        let &slot = self.rooms.get(&room_id)?;
        self.placements.get(slot).map(|p| &p.room)
    }

    /// Floor a room is indexed under
    pub fn floor_of(&self, room_id: RoomId) -> Option<FloorNumber> {
        let &slot = self.rooms.get(&room_id)?;
        self.placements.get(slot).map(|p| p.floor)
    }

    pub fn guest(&self, name: &str) -> Option<&Guest> {
        self.guests.get(name)
    }

    #[inline]
    pub fn guests(&self) -> &GuestRegistry {
        &self.guests
    }

    /// Room ids in flat-index order
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys()
    }

    /// Floor numbers in floor-index order
    pub fn floor_numbers(&self) -> Vec<FloorNumber> {
        self.floors.keys()
    }

    /// Room ids on `floor`, `None` for an unknown floor
    pub fn floor_rooms(&self, floor: FloorNumber) -> Option<Vec<RoomId>> {
        self.floors.get(&floor).map(OrderedMap::keys)
    }

    // ========================================================================
    // Provisioning
    // ========================================================================

    /// Provision the rooms described by `config`
    pub fn provision(&mut self, config: &HotelConfig) -> HotelResult<Vec<RoomId>> {
        config.validate()?;
        self.generate_rooms(config.floors, config.rooms_per_floor, config.capacity, config.price)
    }

    /// Add `floor_count` floors of `rooms_per_floor` identical rooms.
    ///
    /// New floors are numbered from the current floor count upward, so
    /// repeated calls stack floors instead of overwriting them. Room ids
    /// are `100 * floor + position + 1`.
    ///
    /// Either every room is created or none is.
    ///
    /// # Errors
    ///
    /// - [`HotelError::InvalidArgument`] for a zero count or zero capacity
    /// - [`HotelError::DuplicateIdentifier`] if an id was issued before
    #[instrument(skip(self))]
    pub fn generate_rooms(
        &mut self,
        floor_count: u32,
        rooms_per_floor: u32,
        capacity: u32,
        price: u32,
    ) -> HotelResult<Vec<RoomId>> {
        if floor_count == 0 || rooms_per_floor == 0 {
            return Err(HotelError::InvalidArgument(
                "floors and rooms per floor must be positive".into(),
            ));
        }
        validate_capacity(capacity)?;

        let start_floor = floor_number(self.floors.len())?;
        let end_floor = start_floor.checked_add(floor_count).ok_or_else(|| {
            HotelError::InvalidArgument(format!("{floor_count} floors exceed the floor range"))
        })?;

        // Plan every id first so a collision leaves the hotel untouched
        let mut plan = Vec::with_capacity(floor_count as usize * rooms_per_floor as usize);
        let mut planned = HashSet::with_capacity(plan.capacity());
        for floor in start_floor..end_floor {
            for position in 0..rooms_per_floor {
                let room_id = RoomIdAllocator::room_id(floor, position)?;
                self.allocator.check(room_id)?;
                if !planned.insert(room_id) {
                    return Err(HotelError::DuplicateIdentifier(room_id));
                }
                plan.push((floor, room_id));
            }
        }

        for &(floor, room_id) in &plan {
            self.allocator.issue(room_id)?;
            self.place(floor, Room::new(room_id, capacity, price));
        }

        info!(
            floors = floor_count,
            first_floor = start_floor,
            rooms = plan.len(),
            "generated rooms"
        );
        Ok(plan.into_iter().map(|(_, room_id)| room_id).collect())
    }

    /// Add one room at the end of `floor`, creating the floor if needed.
    ///
    /// The id is `100 * floor + rooms_on_floor + 1`.
    ///
    /// # Errors
    ///
    /// - [`HotelError::InvalidArgument`] if `floor` is `None` or capacity is zero
    /// - [`HotelError::DuplicateIdentifier`] if the computed id was issued before
    #[instrument(skip(self))]
    pub fn add_room(
        &mut self,
        floor: Option<FloorNumber>,
        capacity: u32,
        price: u32,
    ) -> HotelResult<RoomId> {
        let floor = floor.ok_or_else(|| HotelError::InvalidArgument("floor must be given".into()))?;
        validate_capacity(capacity)?;

        let on_floor = self.floors.get(&floor).map_or(0, OrderedMap::len);
        let position = u32::try_from(on_floor)
            .map_err(|_| HotelError::InvalidArgument(format!("floor {floor} is full")))?;
        let room_id = RoomIdAllocator::room_id(floor, position)?;
        self.allocator.issue(room_id)?;

        self.place(floor, Room::new(room_id, capacity, price));
        info!(room_id, floor, "added room");
        Ok(room_id)
    }

    /// Store a room and index it under both the flat and the floor index
    fn place(&mut self, floor: FloorNumber, room: Room) -> usize {
        let room_id = room.room_id();
        let slot = self.placements.insert(Placement { floor, room });

        self.rooms.put(room_id, slot);
        self.floors
            .get_or_insert_with(floor, OrderedMap::new)
            .put(room_id, slot);
        slot
    }

    // ========================================================================
    // Guests
    // ========================================================================

    /// Existing guest called `name`, or a new one registered under it
    pub fn register_guest(&mut self, name: &str) -> &mut Guest {
        resolve_guest(&mut self.guests, name)
    }

    // ========================================================================
    // Rental
    // ========================================================================

    /// Rent the first vacant room, in flat-index order, to `guest`.
    ///
    /// # Errors
    ///
    /// [`HotelError::NoVacancy`] if every room is occupied. Nothing changes.
    pub fn rent_room(&mut self, guest: &str) -> HotelResult<RoomId> {
        let vacant = self
            .rooms
            .iter()
            .map(|(_, &slot)| slot)
            .find(|&slot| {
                self.placements
                    .get(slot)
                    .is_some_and(|p| !p.room.is_occupied())
            });

        match vacant {
            Some(slot) => self.rent_into(guest, Some(slot)),
            None => {
                warn!(guest, "no free room found");
                Err(HotelError::NoVacancy)
            }
        }
    }

    /// Rent room `room_id` to `guest`.
    ///
    /// # Errors
    ///
    /// - [`HotelError::NotFound`] for an unknown id
    /// - [`HotelError::AlreadyOccupied`] if the room is taken
    pub fn rent_room_by_id(&mut self, guest: &str, room_id: RoomId) -> HotelResult<()> {
        let slot = self.slot(room_id)?;
        self.rent_into(guest, Some(slot)).map(|_| ())
    }

    /// Rent an already resolved room
    fn rent_into(&mut self, guest: &str, slot: Option<usize>) -> HotelResult<RoomId> {
        let placement = slot
            .and_then(|slot| self.placements.get_mut(slot))
            .ok_or_else(|| HotelError::InvalidArgument("room must be given".into()))?;
        let room = &mut placement.room;
        if room.is_occupied() {
            return Err(HotelError::AlreadyOccupied(room.room_id()));
        }

        let today = self.clock.today();
        let guest = resolve_guest(&mut self.guests, guest);
        room.rent(guest, today)?;

        info!(room_id = room.room_id(), guest = guest.name(), %today, "room rented");
        Ok(room.room_id())
    }

    /// Add `guest` as an extra occupant of room `room_id`.
    ///
    /// # Errors
    ///
    /// - [`HotelError::NotFound`] for an unknown id
    /// - [`HotelError::NotOccupied`] if the room is vacant
    /// - [`HotelError::CapacityExceeded`] if the room is full
    pub fn add_guest(&mut self, room_id: RoomId, guest: &str) -> HotelResult<()> {
        let slot = self.slot(room_id)?;
        let guest = resolve_guest(&mut self.guests, guest);
        let room = &mut self.placements[slot].room;
        room.add_guest(guest)?;

        debug!(room_id, guest = guest.name(), "extra guest added");
        Ok(())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Check `primary` into room `room_id`, then each of `extras`.
    ///
    /// Guests are registered as they are named; a failure part-way does not
    /// unregister guests or remove extras already added.
    ///
    /// # Errors
    ///
    /// [`HotelError::NotFound`], [`HotelError::AlreadyOccupied`] or
    /// [`HotelError::CapacityExceeded`], from whichever step failed.
    #[instrument(skip(self, extras), fields(extra_guests = extras.len()))]
    pub fn check_in<S: AsRef<str>>(
        &mut self,
        room_id: RoomId,
        primary: &str,
        extras: &[S],
    ) -> HotelResult<()> {
        self.register_guest(primary);
        self.rent_room_by_id(primary, room_id)?;

        for extra in extras {
            self.add_guest(room_id, extra.as_ref())?;
        }

        info!(room_id, guest = primary, "checked in");
        Ok(())
    }

    /// Vacate room `room_id` and return the stay charge.
    ///
    /// # Errors
    ///
    /// - [`HotelError::NotFound`] for an unknown id
    /// - [`HotelError::NotOccupied`] if the room is already vacant
    #[instrument(skip(self))]
    pub fn check_out(&mut self, room_id: RoomId) -> HotelResult<i64> {
        let slot = self.slot(room_id)?;
        let today = self.clock.today();
        let charge = self.placements[slot].room.check_out(&mut self.guests, today)?;

        info!(room_id, charge, "checked out");
        Ok(charge)
    }

    /// Override the check-in date of room `room_id`
    pub fn change_time(&mut self, date: NaiveDate, room_id: RoomId) -> HotelResult<()> {
        let slot = self.slot(room_id)?;
        self.placements[slot].room.set_check_in_date(date);

        debug!(room_id, %date, "check-in date changed");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Detail of room `room_id`
    pub fn view(&self, room_id: RoomId) -> HotelResult<RoomView> {
        self.room(room_id)
            .map(RoomView::from)
            .ok_or(HotelError::NotFound(room_id))
    }

    /// Every room, in flat-index order
    pub fn list(&self) -> Vec<RoomView> {
        self.rooms_in_order().map(RoomView::from).collect()
    }

    /// Id and price of every room, in flat-index order
    pub fn prices(&self) -> Vec<PriceEntry> {
        self.rooms_in_order()
            .map(|room| PriceEntry {
                room_id: room.room_id(),
                price: room.price(),
            })
            .collect()
    }

    /// Room ids grouped by floor, floors in the order they were created
    pub fn floor_plan(&self) -> Vec<FloorView> {
        self.floors
            .iter()
            .map(|(&floor, rooms)| FloorView {
                floor,
                room_ids: rooms.keys(),
            })
            .collect()
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// SHA-256 over the SSZ record of every room, in flat-index order
    pub fn state_root(&self) -> HotelResult<[u8; 32]> {
        Ok(InventoryReceipt::compute_hash(&self.encode_rooms()?))
    }

    /// Take an in-memory snapshot of the inventory
    pub fn save(&mut self) -> HotelResult<InventoryReceipt> {
        let state = self.encode_rooms()?;
        self.saves += 1;

        let receipt = InventoryReceipt::with_computed_root(
            self.saves,
            self.room_count() as u64,
            self.occupied_count() as u64,
            self.guest_count() as u64,
            &state,
            day_number(self.clock.today()),
        );
        info!(sequence = receipt.sequence, root = %receipt.state_root_hex(), "inventory saved");
        Ok(receipt)
    }

    fn encode_rooms(&self) -> HotelResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.rooms.len() * 49);
        for (_, &slot) in &self.rooms {
            let placement = &self.placements[slot];
            bytes.extend(RoomRecord::from_room(&placement.room, placement.floor).encode()?);
        }
        Ok(bytes)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn slot(&self, room_id: RoomId) -> HotelResult<usize> {
        self.rooms
            .get(&room_id)
            .copied()
            .ok_or(HotelError::NotFound(room_id))
    }

    fn rooms_in_order(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms
            .iter()
            .filter_map(|(_, &slot)| self.placements.get(slot).map(|p| &p.room))
    }
}

fn resolve_guest<'a>(guests: &'a mut GuestRegistry, name: &str) -> &'a mut Guest {
    if !guests.contains_key(name) {
        debug!(guest = name, "registering guest");
    }
    guests.get_or_insert_with(name.to_string(), || Guest::new(name))
}

fn validate_capacity(capacity: u32) -> HotelResult<()> {
    if capacity == 0 {
        return Err(HotelError::InvalidArgument("capacity must be positive".into()));
    }
    Ok(())
}

fn floor_number(count: usize) -> HotelResult<FloorNumber> {
    FloorNumber::try_from(count)
        .map_err(|_| HotelError::InvalidArgument("too many floors".into()))
}

// ============================================================================
// Unit Tests
// ============================================================================
