//! Line-oriented console used by the desk commands.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::clock::Clock;
use crate::hotel::Hotel;
use crate::types::RoomId;

/// Words that abandon a dialog
const CANCEL_WORDS: [&str; 2] = ["cancel", "exit"];

/// Prompting reader/writer pair.
///
/// All `read_*` helpers return `Ok(None)` when the input ends or the
/// operator cancels.
pub struct Console<'io> {
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
}

impl<'io> Console<'io> {
    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + 'io,
        W: Write + 'io,
    {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Write one line
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Show `message` and read one trimmed line, `None` at end of input
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a non-empty name, asking again on blank lines
    pub fn read_name(&mut self, message: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(message)? {
                None => return Ok(None),
                Some(name) if name.is_empty() => continue,
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    /// Read the id of a room that exists in `hotel`, asking until one is given
    pub fn read_room_id<C: Clock>(&mut self, hotel: &Hotel<C>) -> io::Result<Option<RoomId>> {
        loop {
            let Some(answer) = self.prompt("Pass room number: ...")? else {
                return Ok(None);
            };
            if CANCEL_WORDS.contains(&answer.as_str()) {
                return Ok(None);
            }

            match answer.parse::<RoomId>() {
                Ok(room_id) if hotel.room(room_id).is_some() => return Ok(Some(room_id)),
                Ok(_) => self.say("Room not found.")?,
                Err(_) => self.say("Invalid room number")?,
            }
            self.say("Try again ...")?;
        }
    }

    /// Read a count in `0..=max`
    pub fn read_count(&mut self, message: &str, max: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt(message)? else {
                return Ok(None);
            };

            match answer.parse::<usize>() {
                Ok(count) if count <= max => return Ok(Some(count)),
                Ok(_) => self.say(format!("At most {max} extra guests"))?,
                Err(_) => self.say("Invalid number")?,
            }
        }
    }
}
