//! Line-by-line script execution against a session
//!
//! The runner owns a session and an output sink. Commands that report
//! something write their answer to the sink; malformed lines write a
//! diagnostic there instead and execution carries on, so one bad line never
//! poisons the rest of a script.

use std::io::{BufRead, Write};

use crate::engine::session::Session;
use crate::io::commands::{Command, parse_command};
use crate::io::error::{Result, ScriptError};

/// Executes script lines and collects their output
pub struct ScriptRunner<W: Write> {
    session: Session,
    output: W,
}

impl<W: Write> ScriptRunner<W> {
    /// Create a runner with a fresh session writing to `output`
    pub fn new(output: W) -> Self {
        Self {
            session: Session::new(),
            output,
        }
    }

    /// Execute one script line
    ///
    /// Blank lines are skipped; lines that fail to parse write a diagnostic
    /// to the output and leave the session untouched. Returns `false` once
    /// the script asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to the output fails.
    pub fn run_line(&mut self, line: &str) -> Result<bool> {
        match parse_command(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(true),
            Err(diagnostic) => {
                writeln!(self.output, "{diagnostic}")?;
                Ok(true)
            }
        }
    }

    /// Execute every line from a reader until quit or end of input
    ///
    /// # Errors
    ///
    /// Returns an error when reading a line or writing to the output fails.
    pub fn run_script(&mut self, reader: impl BufRead) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(|source| ScriptError::Io {
                operation: "read",
                source,
            })?;
            if !self.run_line(&line)? {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Color {
                coord,
                color,
                intensity,
            } => {
                self.session.set_tile(coord, color, intensity);
            }
            Command::TurnOff { coord } => {
                self.session.turn_off(coord);
            }
            Command::AddRule { result, terms } => {
                self.session.add_rule(result, terms);
            }
            Command::Query { coord } => {
                if let Some((color, intensity)) = self.session.query(coord) {
                    writeln!(self.output, "{color} {intensity}")?;
                }
            }
            Command::ListRules => {
                writeln!(self.output, "(")?;
                for rule in self.session.rules().rules() {
                    writeln!(self.output, "{rule}")?;
                }
                writeln!(self.output, ")")?;
            }
            Command::BlockSum { coord, mode } => {
                let sum = self.session.block_intensity(coord, mode);
                writeln!(self.output, "{sum}")?;
            }
            Command::Propagate { coord } => {
                self.session.propagate(coord);
            }
            Command::PropagateBlock { coord } => {
                self.session.propagate_block(coord);
            }
            Command::Reorder => {
                self.session.reorder_rules();
            }
            Command::PathCost { start, end } => {
                let cost = self.session.min_intensity_path(start, end).unwrap_or(-1);
                writeln!(self.output, "{cost}")?;
            }
            Command::Perimeter { coord } => {
                let perimeter = self.session.block_perimeter(coord);
                writeln!(self.output, "{perimeter}")?;
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// The session state accumulated so far
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Flush the output and hand back the session and sink
    ///
    /// # Errors
    ///
    /// Returns an error when flushing the output fails.
    pub fn finish(mut self) -> Result<(Session, W)> {
        self.output.flush()?;
        Ok((self.session, self.output))
    }
}
