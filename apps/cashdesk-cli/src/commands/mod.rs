//! # Commands Module
//!
//! The command loop and the commands it dispatches to.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (command loop)
//! ├── catalog.rs  ◄─── Catalog file loading
//! ├── shift.rs    ◄─── Open / close shift
//! └── sale.rs     ◄─── Interactive sale and payment
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Loop                                         │
//! │                                                                         │
//! │  "Command: " ──► read line ──► Command::parse                           │
//! │                                    │                                    │
//! │      open ──► shift::open_shift    │    unknown ──► message, loop       │
//! │      close ─► shift::close_shift   │                                    │
//! │      sale ──► sale::make_sale      │                                    │
//! │      exit ──► refused while a shift is open, else end session           │
//! │                                                                         │
//! │  Command result                                                         │
//! │  ──────────────                                                         │
//! │  Ok                  ──► next command                                   │
//! │  Core error          ──► "Error: ..." on stderr, next command           │
//! │  InputClosed         ──► end session (warn if a shift is still open)    │
//! │  I/O error           ──► returned to the caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod sale;
pub mod shift;

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::state::Till;

/// A top-level console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenShift,
    CloseShift,
    MakeSale,
    Exit,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::OpenShift,
        Command::CloseShift,
        Command::MakeSale,
        Command::Exit,
    ];

    /// The word typed to run this command.
    pub const fn token(&self) -> &'static str {
        match self {
            Command::OpenShift => "open",
            Command::CloseShift => "close",
            Command::MakeSale => "sale",
            Command::Exit => "exit",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Command::OpenShift => "open a shift",
            Command::CloseShift => "close the shift and print its report",
            Command::MakeSale => "ring up a sale",
            Command::Exit => "quit (only with no shift open)",
        }
    }

    /// Matches a typed line against the command tokens exactly.
    pub fn parse(input: &str) -> Option<Self> {
        Command::ALL.into_iter().find(|cmd| cmd.token() == input)
    }
}

/// The startup banner listing every command.
pub fn welcome_text() -> String {
    let mut text = String::from("Cash register ready. Commands:\n");
    for cmd in Command::ALL {
        text.push_str(&format!("  {:<6} {}\n", cmd.token(), cmd.description()));
    }
    text
}

/// Runs commands until `exit` or end of input.
///
/// ## Errors
/// Only console I/O failures end the session with an error.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    till: &mut Till,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    loop {
        let line = match console.prompt("Command: ") {
            Ok(line) => line,
            Err(AppError::InputClosed) => return end_of_input(till, console),
            Err(err) => return Err(err),
        };

        let Some(command) = Command::parse(&line) else {
            console.say("Unknown command, try again.")?;
            continue;
        };

        let result = match command {
            Command::OpenShift => shift::open_shift(till, console),
            Command::CloseShift => shift::close_shift(till, console),
            Command::MakeSale => sale::make_sale(till, console).map(|outcome| {
                info!(?outcome, "Sale finished");
            }),
            Command::Exit => {
                if till.shifts.is_open() {
                    console.warn("Close the shift before exiting.")?;
                    continue;
                }
                console.say("Session closed.")?;
                info!("Session closed");
                return Ok(());
            }
        };

        match result {
            Ok(()) => {}
            // The next prompt sees the closed input and ends the session.
            Err(AppError::InputClosed) => {}
            Err(err) if err.is_recoverable() => console.warn(format_args!("Error: {err}"))?,
            Err(err) => return Err(err),
        }
    }
}

fn end_of_input<R: BufRead, W: Write, E: Write>(
    till: &Till,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    if let Some(shift) = till.shifts.current() {
        warn!(
            cashier = %shift.cashier_name(),
            receipts = shift.receipts().len(),
            "Input closed with a shift open; shift discarded"
        );
        console.warn(format_args!(
            "Input closed while {}'s shift was open; the shift was not reported.",
            shift.cashier_name()
        ))?;
    }
    info!("Input closed, session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::scripted;
    use cashdesk_core::{Catalog, Money, PaymentKind};

    fn till() -> Till {
        Till::new(Catalog::parse("Milk,1234567890123,2.50").catalog)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("open"), Some(Command::OpenShift));
        assert_eq!(Command::parse("sale"), Some(Command::MakeSale));
        assert_eq!(Command::parse(" sale"), None);
        assert_eq!(Command::parse("close "), None);
        assert_eq!(Command::parse("EXIT"), None);
        assert_eq!(Command::parse("op"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_padded_command_is_unknown() {
        let mut till = till();
        let mut console = scripted(&[" open", "exit "]);

        run_session(&mut till, &mut console).unwrap();

        assert!(!till.shifts.is_open());
        assert_eq!(
            console.output().matches("Unknown command, try again.").count(),
            2
        );
        assert!(!console.output().contains("Session closed."));
    }

    #[test]
    fn test_welcome_lists_every_command() {
        let text = welcome_text();
        for cmd in Command::ALL {
            assert!(text.contains(cmd.token()));
        }
    }

    #[test]
    fn test_full_session() {
        let mut till = till();
        let mut console = scripted(&[
            "open", "Anna", "100.00",
            "sale", "Milk", "1", "done", "cash", "5.00",
            "sale", "1234567890123", "2", "done", "card",
            "close",
            "exit",
        ]);

        run_session(&mut till, &mut console).unwrap();

        assert!(!till.shifts.is_open());
        let output = console.output();
        assert!(output.contains("Receipt #1\n"));
        assert!(output.contains("Receipt #2\n"));
        assert!(output.contains("Cash sales:                 2.50\n"));
        assert!(output.contains("Card sales:                 5.00\n"));
        assert!(output.contains("Drawer cash:              102.50\n"));
        assert!(output.ends_with("Session closed.\n"));
        assert!(console.errors().is_empty());
    }

    #[test]
    fn test_exit_refused_while_shift_open() {
        let mut till = till();
        let mut console = scripted(&["open", "Anna", "10", "exit", "close", "exit"]);

        run_session(&mut till, &mut console).unwrap();

        assert!(console.errors().contains("Close the shift before exiting."));
        assert!(console.output().contains("SHIFT REPORT"));
        assert!(console.output().ends_with("Session closed.\n"));
    }

    #[test]
    fn test_unknown_command_and_state_errors_continue() {
        let mut till = till();
        let mut console = scripted(&["hello", "sale", "close", "open", "Anna", "0", "open"]);

        run_session(&mut till, &mut console).unwrap();

        assert!(console.output().contains("Unknown command, try again."));
        let errors = console.errors();
        assert_eq!(errors.matches("Error: No shift is open").count(), 2);
        assert!(errors.contains("Error: A shift is already open"));
        assert!(errors.contains("shift was not reported"));

        let shift = till.shifts.current().unwrap();
        assert_eq!(shift.cashier_name(), "Anna");
        assert_eq!(shift.opening_cash(), Money::zero());
    }

    #[test]
    fn test_end_of_input_mid_sale_ends_session() {
        let mut till = till();
        let mut console = scripted(&["open", "Anna", "10", "sale", "Milk", "1"]);

        run_session(&mut till, &mut console).unwrap();

        let shift = till.shifts.current().unwrap();
        assert!(shift.receipts().is_empty());
        assert!(shift.total_for(PaymentKind::Cash).is_zero());
    }

    #[test]
    fn test_end_of_input_without_shift_is_quiet() {
        let mut till = till();
        let mut console = scripted(&[]);

        run_session(&mut till, &mut console).unwrap();
        assert!(console.errors().is_empty());
    }
}
