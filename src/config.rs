//! Startup provisioning parameters.

use crate::error::{HotelError, HotelResult};
use crate::hotel::ROOMS_PER_FLOOR_LIMIT;

/// Default number of floors provisioned at startup
pub const DEFAULT_FLOORS: u32 = 10;

/// Default rooms on each floor
pub const DEFAULT_ROOMS_PER_FLOOR: u32 = 10;

/// Default room capacity (primary guest + 3 extras)
pub const DEFAULT_CAPACITY: u32 = 4;

/// Default per-night rate
pub const DEFAULT_PRICE: u32 = 100;

/// Shape of the inventory a hotel starts with.
///
/// # Example
///
/// ```
/// use hotel_desk::HotelConfig;
///
/// let config = HotelConfig { floors: 2, rooms_per_floor: 3, ..HotelConfig::default() };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.room_total(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelConfig {
    pub floors: u32,
    pub rooms_per_floor: u32,
    pub capacity: u32,
    pub price: u32,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            rooms_per_floor: DEFAULT_ROOMS_PER_FLOOR,
            capacity: DEFAULT_CAPACITY,
            price: DEFAULT_PRICE,
        }
    }
}

impl HotelConfig {
    /// Reject shapes the id scheme or the room model cannot express
    pub fn validate(&self) -> HotelResult<()> {
        if self.floors == 0 {
            return Err(HotelError::InvalidArgument("floors must be positive".into()));
        }
        if self.rooms_per_floor == 0 {
            return Err(HotelError::InvalidArgument(
                "rooms per floor must be positive".into(),
            ));
        }
        if self.rooms_per_floor > ROOMS_PER_FLOOR_LIMIT {
            return Err(HotelError::InvalidArgument(format!(
                "at most {ROOMS_PER_FLOOR_LIMIT} rooms per floor"
            )));
        }
        if self.capacity == 0 {
            return Err(HotelError::InvalidArgument("capacity must be positive".into()));
        }
        Ok(())
    }

    /// Rooms this configuration provisions
    pub fn room_total(&self) -> u64 {
        u64::from(self.floors) * u64::from(self.rooms_per_floor)
    }
}
