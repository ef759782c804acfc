//! # Shift Commands
//!
//! ```text
//!   CLOSED ── open ──► OPEN ── close ──► CLOSED (report printed)
//!     │                  │
//!     └─ close: refused  └─ open: refused
//! ```

use std::io::{BufRead, Write};

use cashdesk_core::report::{format_timestamp, render_shift_report};
use cashdesk_core::validation::{parse_amount, validate_cashier_name};
use cashdesk_core::CoreError;
use chrono::Local;

use crate::console::Console;
use crate::error::AppResult;
use crate::state::Till;

/// Opens a shift after asking for the cashier and the opening cash.
///
/// Refused before any prompt if a shift is already open.
pub fn open_shift<R: BufRead, W: Write, E: Write>(
    till: &mut Till,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    if till.shifts.is_open() {
        return Err(CoreError::ShiftAlreadyOpen.into());
    }

    let cashier = console.ask("Cashier name: ", validate_cashier_name)?;
    let opening_cash = console.ask("Opening cash: ", |input| {
        parse_amount(input, "opening cash")
    })?;

    let shift = till.shifts.open(cashier, opening_cash, Local::now())?;
    console.say(format_args!(
        "Shift opened by {} at {} with {} in the drawer",
        shift.cashier_name(),
        format_timestamp(shift.opened_at()),
        shift.opening_cash()
    ))?;
    Ok(())
}

/// Closes the running shift and prints its report.
pub fn close_shift<R: BufRead, W: Write, E: Write>(
    till: &mut Till,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    let shift = till.shifts.close(Local::now())?;
    console.print(&render_shift_report(&shift))?;
    Ok(())
}
