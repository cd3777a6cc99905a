//! Hotel Desk - Binary Entry Point
//!
//! Provisions a hotel and runs the front-desk command loop on stdin/stdout.
//! Logs go to stderr so they never mix with the dialog.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_desk::config::{DEFAULT_CAPACITY, DEFAULT_FLOORS, DEFAULT_PRICE, DEFAULT_ROOMS_PER_FLOOR};
use hotel_desk::desk::{CommandRegistry, Console, Session};
use hotel_desk::{Hotel, HotelConfig};

#[derive(Parser)]
#[command(name = "hotel-desk")]
#[command(about = "Front desk for an in-memory hotel inventory")]
#[command(version)]
struct Cli {
    /// Floors provisioned at startup
    #[arg(long, default_value_t = DEFAULT_FLOORS)]
    floors: u32,

    /// Rooms on each floor
    #[arg(long, default_value_t = DEFAULT_ROOMS_PER_FLOOR)]
    rooms_per_floor: u32,

    /// Guests per room, primary included
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: u32,

    /// Per-night rate of every room
    #[arg(long, default_value_t = DEFAULT_PRICE)]
    price: u32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = HotelConfig {
        floors: cli.floors,
        rooms_per_floor: cli.rooms_per_floor,
        capacity: cli.capacity,
        price: cli.price,
    };
    let hotel = Hotel::from_config(&config).context("failed to provision hotel")?;
    info!(rooms = hotel.room_count(), floors = hotel.floor_count(), "hotel ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(hotel, CommandRegistry::standard(), console);
    session.run().context("front desk session failed")?;

    Ok(())
}
