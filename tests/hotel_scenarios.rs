//! End-to-end scenarios against the public hotel API.

use chrono::{Days, NaiveDate};
use hotel_desk::{Clock, FixedClock, Hotel, HotelError, OrderedMap};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn hotel() -> Hotel<FixedClock> {
    Hotel::with_clock(FixedClock::new(today()))
}

// ============================================================================
// Provisioning
// ============================================================================

#[test]
fn test_generated_ids_follow_floor_scheme() {
    let mut hotel = hotel();

    let ids = hotel.generate_rooms(3, 4, 2, 90).unwrap();

    assert_eq!(ids.len(), 12);
    for floor in 0..3u32 {
        let expected: Vec<u32> = (0..4).map(|i| 100 * floor + i + 1).collect();
        assert_eq!(hotel.floor_rooms(floor), Some(expected));
    }
}

#[test]
fn test_second_generation_appends_floors() {
    let mut hotel = hotel();
    hotel.generate_rooms(1, 2, 4, 100).unwrap();

    // One floor exists, so the next two floors are 1 and 2
    let ids = hotel.generate_rooms(2, 3, 4, 100).unwrap();

    assert_eq!(ids, vec![101, 102, 103, 201, 202, 203]);
    assert_eq!(hotel.room_ids(), vec![1, 2, 101, 102, 103, 201, 202, 203]);
    assert_eq!(hotel.floor_numbers(), vec![0, 1, 2]);
}

// ============================================================================
// Rental
// ============================================================================

#[test]
fn test_rent_sets_check_in_date_and_blocks_second_rent() {
    let mut hotel = hotel();
    hotel.generate_rooms(2, 3, 4, 100).unwrap();

    hotel.rent_room_by_id("Alice", 101).unwrap();
    let before = hotel.view(101).unwrap();
    assert!(before.occupied);
    assert_eq!(before.check_in_date, Some(today()));

    assert_eq!(
        hotel.rent_room_by_id("Bob", 101),
        Err(HotelError::AlreadyOccupied(101))
    );
    assert_eq!(hotel.view(101).unwrap(), before);
}

#[test]
fn test_extra_guests_up_to_capacity() {
    let mut hotel = hotel();
    hotel.generate_rooms(2, 3, 4, 100).unwrap();
    hotel.rent_room_by_id("Alice", 101).unwrap();

    // Capacity 4 leaves three extra slots
    for name in ["Bob", "Carol", "Dave"] {
        hotel.add_guest(101, name).unwrap();
    }
    let err = hotel.add_guest(101, "Eve").unwrap_err();

    assert_eq!(
        err,
        HotelError::CapacityExceeded { room_id: 101, extra_capacity: 3 }
    );
    assert_eq!(hotel.room(101).unwrap().extra_guests(), ["Bob", "Carol", "Dave"]);
}

#[test]
fn test_third_extra_guest_rejected_at_capacity_three() {
    let mut hotel = hotel();
    hotel.generate_rooms(2, 3, 3, 100).unwrap();
    hotel.rent_room_by_id("Alice", 101).unwrap();

    hotel.add_guest(101, "Bob").unwrap();
    hotel.add_guest(101, "Carol").unwrap();

    assert!(matches!(
        hotel.add_guest(101, "Dave"),
        Err(HotelError::CapacityExceeded { room_id: 101, .. })
    ));
    assert_eq!(hotel.room(101).unwrap().extra_guests(), ["Bob", "Carol"]);
}

#[test]
fn test_rent_unknown_room_on_empty_inventory() {
    let mut hotel = hotel();

    assert_eq!(hotel.rent_room_by_id("Alice", 999), Err(HotelError::NotFound(999)));
    assert_eq!(hotel.rent_room("Alice"), Err(HotelError::NoVacancy));
}

// ============================================================================
// Billing
// ============================================================================

#[test]
fn test_five_day_stay_charges_five_nights() {
    let mut hotel = hotel();
    hotel.generate_rooms(2, 3, 4, 100).unwrap();
    hotel.rent_room_by_id("Alice", 101).unwrap();

    let five_days_ago = today().checked_sub_days(Days::new(5)).unwrap();
    hotel.change_time(five_days_ago, 101).unwrap();

    assert_eq!(hotel.check_out(101).unwrap(), 500);
}

#[test]
fn test_same_day_checkout_is_free() {
    let mut hotel = hotel();
    hotel.generate_rooms(1, 1, 2, 250).unwrap();
    hotel.check_in(1, "Alice", &["Bob"]).unwrap();

    assert_eq!(hotel.check_out(1).unwrap(), 0);
    assert!(!hotel.guest("Bob").unwrap().is_checked_in());
}

#[test]
fn test_clock_drives_charge() {
    let mut hotel = hotel();
    hotel.generate_rooms(1, 2, 2, 80).unwrap();
    hotel.check_in(2, "Alice", &[] as &[&str]).unwrap();

    hotel.clock().advance(4);
    assert_eq!(hotel.clock().today(), today() + Days::new(4));

    assert_eq!(hotel.check_out(2).unwrap(), 320);
    assert_eq!(hotel.check_out(2), Err(HotelError::NotOccupied(2)));
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_container_update_and_remove() {
    let mut map = OrderedMap::new();
    map.put("a", 1);
    map.put("b", 2);
    map.put("a", 3);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&3));
    assert_eq!(map.keys(), vec!["a", "b"]);

    assert_eq!(map.remove("a"), Some(3));
    assert_eq!(map.get("a"), None);
    assert_eq!(map.keys(), vec!["b"]);
}

// ============================================================================
// Save
// ============================================================================

#[test]
fn test_identical_hotels_share_state_root() {
    let build = || {
        let mut hotel = hotel();
        hotel.generate_rooms(2, 5, 3, 110).unwrap();
        hotel.check_in(103, "Alice", &["Bob"]).unwrap();
        hotel
    };

    let mut first = build();
    let second = build();
    assert_eq!(first.state_root().unwrap(), second.state_root().unwrap());

    let receipt = first.save().unwrap();
    assert_eq!(receipt.rooms_total, 10);
    assert_eq!(receipt.rooms_occupied, 1);
    assert_eq!(receipt.guests_registered, 2);
    assert!(receipt.to_string().contains("Date: 2024-03-15"));
}
