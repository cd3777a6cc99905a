//! The front-desk commands.
//!
//! Each command gathers its input through the [`Console`], calls one
//! hotel operation and prints the outcome. Hotel errors are returned to the
//! session, which reports them and carries on.

use crate::clock::Clock;
use crate::desk::{Console, DeskError, Flow};
use crate::hotel::Hotel;
use crate::types::Room;

/// A named desk action.
pub trait Command<C: Clock> {
    /// Name typed at the command prompt
    fn name(&self) -> &'static str;

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError>;
}

/// Register a guest party into a room
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckIn;

/// Vacate a room and print the charge
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckOut;

/// Show one room
#[derive(Debug, Default, Clone, Copy)]
pub struct View;

/// Show every room
#[derive(Debug, Default, Clone, Copy)]
pub struct List;

/// Show the price list
#[derive(Debug, Default, Clone, Copy)]
pub struct Prices;

/// Show room ids floor by floor
#[derive(Debug, Default, Clone, Copy)]
pub struct Floors;

/// Snapshot the inventory and print the receipt
#[derive(Debug, Default, Clone, Copy)]
pub struct Save;

/// Leave the session
#[derive(Debug, Default, Clone, Copy)]
pub struct Exit;

impl<C: Clock> Command<C> for CheckIn {
    fn name(&self) -> &'static str {
        "checkin"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        console.say("Checking in")?;
        let Some(room_id) = console.read_room_id(hotel)? else {
            return Ok(Flow::Continue);
        };
        console.say(format!("Room number: {room_id}"))?;

        let Some(primary) = console.read_name("Pass guest name: ...")? else {
            return Ok(Flow::Continue);
        };

        let extra_capacity = hotel.room(room_id).map_or(0, Room::extra_capacity);
        let question = format!("How many extra guests? Room capacity: {extra_capacity}...");
        let Some(count) = console.read_count(&question, extra_capacity)? else {
            return Ok(Flow::Continue);
        };

        let mut extras = Vec::with_capacity(count);
        for _ in 0..count {
            match console.read_name("Pass guest name: ...")? {
                Some(name) => extras.push(name),
                None => return Ok(Flow::Continue),
            }
        }

        hotel.check_in(room_id, &primary, extras.as_slice())?;
        for name in std::iter::once(&primary).chain(&extras) {
            console.say(format!("Checking in: {name} in room number: {room_id}"))?;
        }
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for CheckOut {
    fn name(&self) -> &'static str {
        "checkout"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        console.say("Checking out")?;
        let Some(room_id) = console.read_room_id(hotel)? else {
            return Ok(Flow::Continue);
        };

        let charge = hotel.check_out(room_id)?;
        console.say(format!("Checking out from room number: {room_id}"))?;
        console.say(format!("Charge: {charge}"))?;
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for View {
    fn name(&self) -> &'static str {
        "view"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        let Some(room_id) = console.read_room_id(hotel)? else {
            return Ok(Flow::Continue);
        };
        console.say(hotel.view(room_id)?)?;
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        for room in hotel.list() {
            console.say(room)?;
            console.say("")?;
        }
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for Prices {
    fn name(&self) -> &'static str {
        "prices"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        for entry in hotel.prices() {
            console.say(entry)?;
        }
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for Floors {
    fn name(&self) -> &'static str {
        "floors"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        for floor in hotel.floor_plan() {
            console.say(floor)?;
        }
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for Save {
    fn name(&self) -> &'static str {
        "save"
    }

    fn execute(&self, hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        let receipt = hotel.save()?;
        console.say(receipt)?;
        Ok(Flow::Continue)
    }
}

impl<C: Clock> Command<C> for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _hotel: &mut Hotel<C>, console: &mut Console<'_>) -> Result<Flow, DeskError> {
        console.say("Exit")?;
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::HotelError;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn hotel() -> Hotel<FixedClock> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut hotel = Hotel::with_clock(clock);
        hotel.generate_rooms(2, 2, 3, 100).unwrap();
        hotel
    }

    fn execute(
        command: &dyn Command<FixedClock>,
        hotel: &mut Hotel<FixedClock>,
        input: &str,
    ) -> (Result<Flow, DeskError>, String) {
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(input.to_string()), &mut out);
            command.execute(hotel, &mut console)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_checkin_dialog() {
        let mut hotel = hotel();

        let (result, out) = execute(&CheckIn, &mut hotel, "101\nAlice\n2\nBob\nCarol\n");

        assert!(matches!(result, Ok(Flow::Continue)));
        assert!(out.contains("Room number: 101"));
        assert!(out.contains("How many extra guests? Room capacity: 2..."));
        assert!(out.contains("Checking in: Carol in room number: 101"));
        assert_eq!(hotel.room(101).unwrap().extra_guests(), ["Bob", "Carol"]);
    }

    #[test]
    fn test_checkin_occupied_room_reports_error() {
        let mut hotel = hotel();
        hotel.check_in(101, "Alice", &[] as &[&str]).unwrap();

        let (result, _) = execute(&CheckIn, &mut hotel, "101\nBob\n0\n");

        assert!(matches!(
            result,
            Err(DeskError::Hotel(HotelError::AlreadyOccupied(101)))
        ));
        assert!(hotel.guest("Bob").is_some());
    }

    #[test]
    fn test_checkin_cancelled() {
        let mut hotel = hotel();

        let (result, _) = execute(&CheckIn, &mut hotel, "exit\n");

        assert!(matches!(result, Ok(Flow::Continue)));
        assert_eq!(hotel.occupied_count(), 0);
    }

    #[test]
    fn test_checkout_prints_charge() {
        let mut hotel = hotel();
        hotel.check_in(2, "Alice", &[] as &[&str]).unwrap();
        hotel.clock().advance(2);

        let (result, out) = execute(&CheckOut, &mut hotel, "2\n");

        assert!(result.is_ok());
        assert!(out.contains("Checking out from room number: 2"));
        assert!(out.contains("Charge: 200"));
    }

    #[test]
    fn test_checkout_vacant_room() {
        let mut hotel = hotel();

        let (result, _) = execute(&CheckOut, &mut hotel, "1\n");
        assert!(matches!(
            result,
            Err(DeskError::Hotel(HotelError::NotOccupied(1)))
        ));
    }

    #[test]
    fn test_view_and_list() {
        let mut hotel = hotel();

        let (_, out) = execute(&View, &mut hotel, "102\n");
        assert!(out.contains("RoomID: 102\nPrice: 100\nOccupied: false"));

        let (_, out) = execute(&List, &mut hotel, "");
        assert_eq!(out.matches("RoomID:").count(), 4);
    }

    #[test]
    fn test_prices_floors_save_exit() {
        let mut hotel = hotel();

        let (_, out) = execute(&Prices, &mut hotel, "");
        assert!(out.starts_with("RoomID: 001 Price: 100\n"));

        let (_, out) = execute(&Floors, &mut hotel, "");
        assert_eq!(out, "001 |002 |\n101 |102 |\n");

        let (_, out) = execute(&Save, &mut hotel, "");
        assert!(out.contains("Save #1"));
        assert!(out.contains("Rooms: 4 (0 occupied)"));

        let (result, out) = execute(&Exit, &mut hotel, "");
        assert!(matches!(result, Ok(Flow::Exit)));
        assert_eq!(out, "Exit\n");
    }
}
