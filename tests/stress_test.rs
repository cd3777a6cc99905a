//! Randomized workload tests for the hotel inventory.
//!
//! These tests verify:
//! 1. Both room indices stay consistent under a long mixed workload
//! 2. Room and guest links agree after every operation
//! 3. Determinism is preserved across runs
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::{Days, NaiveDate};
use hotel_desk::{Clock, FixedClock, Hotel, HotelError, RoomId};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Operations per randomized run
const OPERATION_COUNT: usize = 20_000;

const FLOORS: u32 = 6;
const ROOMS_PER_FLOOR: u32 = 12;
const CAPACITY: u32 = 4;
const PRICE: u32 = 120;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn new_hotel() -> Hotel<FixedClock> {
    let mut hotel = Hotel::with_clock(FixedClock::new(start_date()));
    hotel
        .generate_rooms(FLOORS, ROOMS_PER_FLOOR, CAPACITY, PRICE)
        .unwrap();
    hotel
}

/// Check structural invariants through the public API.
fn assert_invariants(hotel: &Hotel<FixedClock>) {
    let ids = hotel.room_ids();
    let unique: HashSet<RoomId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate room id in flat index");

    let mut on_floors = 0;
    for floor in hotel.floor_numbers() {
        for id in hotel.floor_rooms(floor).unwrap() {
            assert!(unique.contains(&id), "room {id} missing from flat index");
            assert_eq!(hotel.floor_of(id), Some(floor));
            on_floors += 1;
        }
    }
    assert_eq!(on_floors, ids.len(), "floor index and flat index disagree");

    for &id in &ids {
        let room = hotel.room(id).unwrap();
        assert_eq!(room.is_occupied(), room.guest().is_some());
        assert!(room.occupant_count() <= room.capacity() as usize);
        if !room.is_occupied() {
            assert!(room.extra_guests().is_empty());
        }

        for name in room.guest().into_iter().chain(room.extra_guests().iter().map(String::as_str)) {
            let guest = hotel.guest(name).expect("occupant is registered");
            assert_eq!(guest.room(), Some(id), "guest {name} does not point back");
        }
    }

    for (name, guest) in hotel.guests() {
        if let Some(id) = guest.room() {
            let room = hotel.room(id).unwrap();
            let listed = room.guest() == Some(name.as_str())
                || room.extra_guests().iter().any(|extra| extra == name);
            assert!(listed, "guest {name} points at room {id} but is not in it");
        }
    }
}

/// Run a seeded mixed workload and return the final state root and the
/// sum of all checkout charges.
///
/// Guest names are never reused, so every guest's room link is exact.
fn run_sequence(seed: u64, count: usize, check_every: usize) -> ([u8; 32], i64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut hotel = new_hotel();
    let ids = hotel.room_ids();
    let mut occupied: HashMap<RoomId, usize> = HashMap::new();
    let mut revenue = 0i64;
    let mut next_guest = 0usize;
    let mut fresh_name = || {
        next_guest += 1;
        format!("guest-{next_guest}")
    };

    for step in 0..count {
        let room_id = ids[rng.gen_range(0..ids.len())];

        match rng.gen_range(0..100) {
            0..=24 => match hotel.rent_room(&fresh_name()) {
                Ok(id) => {
                    assert!(occupied.insert(id, 1).is_none());
                }
                Err(e) => {
                    assert_eq!(e, HotelError::NoVacancy);
                    assert_eq!(occupied.len(), ids.len());
                }
            },
            25..=49 => {
                let extras: Vec<String> = (0..rng.gen_range(0..=4)).map(|_| fresh_name()).collect();
                let primary = fresh_name();
                match hotel.check_in(room_id, &primary, extras.as_slice()) {
                    Ok(()) => {
                        assert!(occupied.insert(room_id, 1 + extras.len()).is_none());
                    }
                    Err(HotelError::AlreadyOccupied(id)) => {
                        assert_eq!(id, room_id);
                        assert!(occupied.contains_key(&room_id));
                    }
                    Err(HotelError::CapacityExceeded { room_id: id, extra_capacity }) => {
                        assert_eq!(id, room_id);
                        assert_eq!(extra_capacity, (CAPACITY - 1) as usize);
                        assert!(extras.len() > extra_capacity);
                        occupied.insert(room_id, CAPACITY as usize);
                    }
                    Err(e) => panic!("unexpected check-in error: {e}"),
                }
            }
            50..=59 => match hotel.add_guest(room_id, &fresh_name()) {
                Ok(()) => {
                    let occupants = occupied.get_mut(&room_id).expect("room was occupied");
                    *occupants += 1;
                }
                Err(HotelError::NotOccupied(_)) => assert!(!occupied.contains_key(&room_id)),
                Err(HotelError::CapacityExceeded { .. }) => {
                    assert_eq!(occupied.get(&room_id), Some(&(CAPACITY as usize)));
                }
                Err(e) => panic!("unexpected add-guest error: {e}"),
            },
            60..=84 => match hotel.check_out(room_id) {
                Ok(charge) => {
                    assert!(charge >= 0);
                    assert_eq!(charge % i64::from(PRICE), 0);
                    assert!(occupied.remove(&room_id).is_some());
                    revenue += charge;
                }
                Err(e) => {
                    assert_eq!(e, HotelError::NotOccupied(room_id));
                    assert!(!occupied.contains_key(&room_id));
                }
            },
            85..=89 => {
                let back = rng.gen_range(0..=7);
                let today = hotel.clock().today();
                let date = today.checked_sub_days(Days::new(back)).unwrap();
                hotel.change_time(date, room_id).unwrap();
            }
            _ => hotel.clock().advance(rng.gen_range(1..=3)),
        }

        if let Some(&occupants) = occupied.get(&room_id) {
            assert_eq!(hotel.room(room_id).unwrap().occupant_count(), occupants);
        }
        if step % check_every == 0 {
            assert_invariants(&hotel);
            assert_eq!(hotel.occupied_count(), occupied.len());
        }
    }

    assert_invariants(&hotel);
    (hotel.state_root().unwrap(), revenue)
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn stress_mixed_workload() {
    println!("\n=== STRESS TEST: Mixed Workload ===\n");

    let start = Instant::now();
    let (root, revenue) = run_sequence(42, OPERATION_COUNT, 97);
    let elapsed = start.elapsed();

    println!("  Operations:   {:>12}", OPERATION_COUNT);
    println!("  Revenue:      {:>12}", revenue);
    println!("  Elapsed time: {:>12.2?}", elapsed);
    println!("  State root:   {}", hex::encode(root));

    assert!(revenue > 0);
}

#[test]
fn verify_determinism() {
    const SEED: u64 = 7;
    const TEST_COUNT: usize = 2_000;

    let first = run_sequence(SEED, TEST_COUNT, TEST_COUNT);
    let second = run_sequence(SEED, TEST_COUNT, TEST_COUNT);
    assert_eq!(first, second, "same seed must give the same inventory");

    let other = run_sequence(SEED + 1, TEST_COUNT, TEST_COUNT);
    assert_ne!(first.0, other.0, "different workloads should diverge");
}

#[test]
fn stress_full_house() {
    let mut hotel = new_hotel();
    let total = hotel.room_count();

    for i in 0..total {
        hotel.rent_room(&format!("guest-{i}")).unwrap();
    }
    assert_eq!(hotel.occupied_count(), total);
    assert_eq!(hotel.rent_room("late"), Err(HotelError::NoVacancy));
    assert!(hotel.guest("late").is_none());

    hotel.clock().advance(2);
    let revenue: i64 = hotel
        .room_ids()
        .into_iter()
        .map(|id| hotel.check_out(id).unwrap())
        .sum();

    assert_eq!(revenue, 2 * i64::from(PRICE) * total as i64);
    assert_eq!(hotel.occupied_count(), 0);
    assert_invariants(&hotel);
}
