//! Command loop.

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::desk::{CommandRegistry, Console, DeskError, Flow};
use crate::hotel::Hotel;

/// One operator session over a hotel.
pub struct Session<'io, C: Clock> {
    hotel: Hotel<C>,
    registry: CommandRegistry<C>,
    console: Console<'io>,
}

impl<'io, C: Clock> Session<'io, C> {
    pub fn new(hotel: Hotel<C>, registry: CommandRegistry<C>, console: Console<'io>) -> Self {
        Self {
            hotel,
            registry,
            console,
        }
    }

    #[inline]
    pub fn hotel(&self) -> &Hotel<C> {
        &self.hotel
    }

    /// End the session and hand the hotel back
    pub fn into_hotel(self) -> Hotel<C> {
        self.hotel
    }

    /// Read and run commands until `exit` or end of input.
    ///
    /// Hotel errors and unknown commands are reported to the operator and
    /// the loop carries on. Only console I/O failures end it early.
    pub fn run(&mut self) -> Result<(), DeskError> {
        let prompt = format!(
            "Please enter the command - valid commands are: {}",
            self.registry.names().join(", ")
        );

        loop {
            let Some(name) = self.console.prompt(&prompt)? else {
                info!("input closed");
                return Ok(());
            };
            if name.is_empty() {
                continue;
            }

            let command = match self.registry.create(&name) {
                Ok(command) => command,
                Err(DeskError::UnknownCommand(name)) => {
                    debug!(command = %name, "unknown command");
                    self.console.say("No such command, please try again...")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match command.execute(&mut self.hotel, &mut self.console) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(DeskError::Hotel(e)) => {
                    warn!(command = command.name(), error = %e, "command failed");
                    self.console.say(&e)?;
                    self.console.say("Please try again...")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
