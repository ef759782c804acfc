//! # Console
//!
//! Line-oriented terminal I/O for the till.
//!
//! The console is generic over its three streams so the command loop can run
//! against real stdio or against in-memory buffers in tests.
//!
//! ```text
//! input (BufRead) ──► prompt / ask ──► validator (cashdesk-core)
//!                                         │
//!                     ◄── retry reason ───┘  written to `err`, ask again
//!
//! say  ──► out (prompts, receipts, reports)
//! warn ──► err (errors, warnings)
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use cashdesk_core::ValidationError;

use crate::error::{AppError, AppResult};

/// A console over the process's stdin, stdout and stderr.
pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

/// Input source plus separate normal and error output streams.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    /// Writes one line to normal output.
    pub fn say(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Writes pre-rendered text (receipts, reports) to normal output as is.
    pub fn print(&mut self, text: &str) -> AppResult<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Writes one line to the error stream.
    pub fn warn(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.err, "{message}")?;
        self.err.flush()?;
        Ok(())
    }

    /// Reads one line without the trailing line break.
    ///
    /// ## Errors
    /// `InputClosed` at end of input.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Shows `label` on normal output and reads the answer.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Prompts until `parse` accepts the answer.
    ///
    /// Each rejection is reported on the error stream before asking again.
    /// Only end of input or a console failure stops the loop.
    pub fn ask<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, ValidationError>,
    ) -> AppResult<T> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.warn(format_args!("Error: {reason}. Try again."))?,
            }
        }
    }

    /// Gives back the underlying streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}
