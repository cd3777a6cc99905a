//! Interactive front desk.
//!
//! A [`Session`] reads a command name, builds the command from the
//! [`CommandRegistry`] and runs it against the hotel. Commands talk to the
//! operator through a [`Console`].

use std::io;

use thiserror::Error;

use crate::error::HotelError;

pub mod commands;
pub mod console;
pub mod registry;
pub mod session;

pub use commands::Command;
pub use console::Console;
pub use registry::{CommandFactory, CommandRegistry};
pub use session::Session;

/// What the session does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Errors surfaced by the desk layer
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("no such command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Hotel(#[from] HotelError),
}
