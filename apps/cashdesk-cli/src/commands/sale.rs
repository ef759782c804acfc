//! # Sale Command
//!
//! The interactive sale: items, payment, settlement, receipt.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Sale Flow                                       │
//! │                                                                         │
//! │  1. Items ───────────────────────────────────────────────────────────►  │
//! │     query ──► Catalog::find ──► quantity ──► SaleDraft::add_item        │
//! │     (not found / bad quantity: ask again, "done" ends the list)         │
//! │                                                                         │
//! │  2. No items? ──► "sale cancelled", nothing recorded                    │
//! │                                                                         │
//! │  3. Payment ─────────────────────────────────────────────────────────►  │
//! │     token ──► PaymentKind                                               │
//! │       takes_tender:  amount ──► Tender::counted                         │
//! │                      short? ask for payment again                       │
//! │                      change > drawer? needs "ok"                        │
//! │       otherwise:     Tender::exact                                      │
//! │     "cancel" ──► nothing recorded                                       │
//! │                                                                         │
//! │  4. ShiftManager::settle ──► Receipt ──► render_receipt                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use cashdesk_core::report::render_receipt;
use cashdesk_core::sale::{SaleDraft, Tender};
use cashdesk_core::validation::{parse_amount, parse_quantity};
use cashdesk_core::{Catalog, CoreError, Money, PaymentKind};
use chrono::Local;
use tracing::debug;

use crate::console::Console;
use crate::error::AppResult;
use crate::state::Till;

/// Ends item entry.
pub const DONE_TOKEN: &str = "done";

/// Abandons the sale at payment selection.
pub const CANCEL_TOKEN: &str = "cancel";

/// Confirms a cash payment whose change exceeds the drawer.
pub const OVERRIDE_TOKEN: &str = "ok";

/// How a sale ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleOutcome {
    /// Settled against the shift and the receipt printed.
    Completed { receipt_number: u32, total: Money },
    /// No items were entered.
    Empty,
    /// Payment was cancelled.
    Cancelled,
}

/// Runs one sale against the open shift.
///
/// Only a completed sale changes the shift. End of input at any prompt
/// abandons the sale.
///
/// ## Errors
/// - `NoOpenShift` before anything is asked
/// - `InputClosed` if input ends mid-sale
pub fn make_sale<R: BufRead, W: Write, E: Write>(
    till: &mut Till,
    console: &mut Console<R, W, E>,
) -> AppResult<SaleOutcome> {
    let drawer_cash = till
        .shifts
        .current()
        .ok_or(CoreError::NoOpenShift)?
        .drawer_cash();

    let draft = collect_items(&till.catalog, console)?;
    if draft.is_empty() {
        console.say("No items entered, sale cancelled.")?;
        return Ok(SaleOutcome::Empty);
    }
    console.say(format_args!("Sale total: {}", draft.total()))?;

    let Some(tender) = resolve_payment(draft.total(), drawer_cash, console)? else {
        console.say("Sale cancelled.")?;
        return Ok(SaleOutcome::Cancelled);
    };

    let receipt = till.shifts.settle(draft, tender, Local::now())?;
    console.print(&render_receipt(receipt))?;

    Ok(SaleOutcome::Completed {
        receipt_number: receipt.number,
        total: receipt.total,
    })
}

/// Asks for products and quantities until the cashier types `done`.
fn collect_items<R: BufRead, W: Write, E: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W, E>,
) -> AppResult<SaleDraft> {
    let mut draft = SaleDraft::new();

    loop {
        let query = console.prompt("Product name or code (done to finish): ")?;
        if query.trim() == DONE_TOKEN {
            return Ok(draft);
        }

        let Some(product) = catalog.find(&query) else {
            console.warn("Product not found, try again.")?;
            continue;
        };
        console.say(format_args!(
            "Found: {} ({}) - {}",
            product.name, product.code, product.unit_price
        ))?;

        loop {
            let quantity = console.ask("Quantity: ", parse_quantity)?;
            match draft.add_item(product, quantity) {
                Ok(total) => {
                    debug!(code = %product.code, quantity, "Item added");
                    console.say(format_args!("Running total: {total}"))?;
                    break;
                }
                Err(err) => console.warn(format_args!("Error: {err}. Try again."))?,
            }
        }
    }
}

/// Asks how the customer pays until a tender is settled on or the sale is
/// cancelled (`None`).
fn resolve_payment<R: BufRead, W: Write, E: Write>(
    total: Money,
    drawer_cash: Money,
    console: &mut Console<R, W, E>,
) -> AppResult<Option<Tender>> {
    let tokens: Vec<&str> = PaymentKind::ALL
        .iter()
        .map(PaymentKind::token)
        .chain([CANCEL_TOKEN])
        .collect();
    let label = format!("Payment ({}): ", tokens.join(", "));

    loop {
        let answer = console.prompt(&label)?;
        if answer.trim().eq_ignore_ascii_case(CANCEL_TOKEN) {
            return Ok(None);
        }

        let Some(kind) = PaymentKind::from_token(&answer) else {
            console.warn("Unknown payment method, try again.")?;
            continue;
        };
        if !kind.takes_tender() {
            return Ok(Some(Tender::exact(kind, total)));
        }

        let tendered = console.ask("Amount tendered: ", |input| {
            parse_amount(input, "amount tendered")
        })?;
        let tender = match Tender::counted(kind, total, tendered) {
            Ok(tender) => tender,
            Err(err) => {
                console.warn(format_args!("Error: {err}"))?;
                continue;
            }
        };

        if tender.exceeds_drawer(drawer_cash) {
            console.warn(format_args!(
                "Not enough cash in the drawer for change of {} (drawer holds {})",
                tender.change_due, drawer_cash
            ))?;
            let answer = console.prompt(&format!("Type {OVERRIDE_TOKEN} to proceed anyway: "))?;
            if !answer.trim().eq_ignore_ascii_case(OVERRIDE_TOKEN) {
                continue;
            }
        }

        return Ok(Some(tender));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, TestConsole};
    use crate::error::AppError;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = "Milk,1234567890123,2.50\nGold,1111111111111,90000000000000000.00";

    fn till_with_shift(opening_cents: i64) -> Till {
        let mut till = Till::new(Catalog::parse(CATALOG).catalog);
        till.shifts
            .open("Anna", Money::from_cents(opening_cents), Local::now())
            .unwrap();
        till
    }

    fn run(till: &mut Till, lines: &[&str]) -> (AppResult<SaleOutcome>, TestConsole) {
        let mut console = scripted(lines);
        let outcome = make_sale(till, &mut console);
        (outcome, console)
    }

    #[test]
    fn test_cash_sale_with_change() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["Milk", "1", "done", "cash", "5.00"]);

        assert_eq!(
            outcome.unwrap(),
            SaleOutcome::Completed {
                receipt_number: 1,
                total: Money::from_cents(250)
            }
        );

        let shift = till.shifts.current().unwrap();
        assert_eq!(shift.drawer_cash(), Money::from_cents(10250));
        assert_eq!(shift.total_for(PaymentKind::Cash), Money::from_cents(250));
        assert_eq!(shift.receipts()[0].change_due, Money::from_cents(250));

        let output = console.output();
        assert!(output.contains("Found: Milk (1234567890123) - 2.50\n"));
        assert!(output.contains("Running total: 2.50\n"));
        assert!(output.contains("Sale total: 2.50\n"));
        assert!(output.contains("Change:                     2.50\n"));
    }

    #[test]
    fn test_card_sale_by_code() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["1234567890123", "2", "done", "card"]);

        assert_eq!(
            outcome.unwrap(),
            SaleOutcome::Completed {
                receipt_number: 1,
                total: Money::from_cents(500)
            }
        );

        let shift = till.shifts.current().unwrap();
        let receipt = &shift.receipts()[0];
        assert_eq!(receipt.amount_tendered, Money::from_cents(500));
        assert!(receipt.change_due.is_zero());
        assert_eq!(shift.total_for(PaymentKind::Card), Money::from_cents(500));
        assert_eq!(shift.drawer_cash(), Money::from_cents(10000));
        assert!(!console.output().contains("Tendered:"));
    }

    #[test]
    fn test_card_sale_ignores_empty_drawer() {
        let mut till = till_with_shift(0);
        let (outcome, _) = run(&mut till, &["Milk", "3", "done", "Card"]);

        assert!(matches!(outcome.unwrap(), SaleOutcome::Completed { .. }));
        assert!(till.shifts.current().unwrap().drawer_cash().is_zero());
    }

    #[test]
    fn test_no_items_records_nothing() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["done"]);

        assert_eq!(outcome.unwrap(), SaleOutcome::Empty);
        let shift = till.shifts.current().unwrap();
        assert!(shift.receipts().is_empty());
        assert!(shift.grand_total().is_zero());
        assert!(console.output().contains("sale cancelled"));
    }

    #[test]
    fn test_cancel_at_payment_records_nothing() {
        let mut till = till_with_shift(10000);
        let (outcome, _) = run(&mut till, &["Milk", "1", "done", "CANCEL"]);

        assert_eq!(outcome.unwrap(), SaleOutcome::Cancelled);
        let shift = till.shifts.current().unwrap();
        assert!(shift.receipts().is_empty());
        assert_eq!(shift.drawer_cash(), Money::from_cents(10000));
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["milk", "Mil", "123456789012", "done"]);

        assert_eq!(outcome.unwrap(), SaleOutcome::Empty);
        assert_eq!(
            console.errors().matches("Product not found").count(),
            3
        );
    }

    #[test]
    fn test_bad_quantities_reprompt() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["Milk", "two", "0", "-1", "2", "done", "card"]);

        assert_eq!(
            outcome.unwrap(),
            SaleOutcome::Completed {
                receipt_number: 1,
                total: Money::from_cents(500)
            }
        );
        assert_eq!(console.errors().lines().count(), 3);
    }

    #[test]
    fn test_overflowing_quantity_reprompts() {
        let mut till = till_with_shift(10000);
        let (outcome, console) = run(&mut till, &["Gold", "2", "1", "done", "card"]);

        assert_eq!(
            outcome.unwrap(),
            SaleOutcome::Completed {
                receipt_number: 1,
                total: Money::from_cents(9_000_000_000_000_000_000)
            }
        );
        assert!(console.errors().contains("Amount overflow"));
    }

    #[test]
    fn test_insufficient_cash_restarts_payment() {
        let mut till = till_with_shift(10000);
        let (outcome, console) =
            run(&mut till, &["Milk", "1", "done", "cash", "1.00", "bitcoin", "cash", "2.50"]);

        assert!(matches!(outcome.unwrap(), SaleOutcome::Completed { .. }));
        let errors = console.errors();
        assert!(errors.contains("Insufficient payment: total 2.50, tendered 1.00"));
        assert!(errors.contains("Unknown payment method"));

        let shift = till.shifts.current().unwrap();
        assert!(shift.receipts()[0].change_due.is_zero());
        assert_eq!(shift.drawer_cash(), Money::from_cents(10250));
    }

    #[test]
    fn test_change_beyond_drawer_needs_override() {
        let mut till = till_with_shift(0);
        let (outcome, console) = run(
            &mut till,
            &["Milk", "1", "done", "cash", "10", "no", "cash", "10", "OK"],
        );

        assert!(matches!(outcome.unwrap(), SaleOutcome::Completed { .. }));
        assert_eq!(
            console.errors().matches("Not enough cash in the drawer").count(),
            2
        );

        let shift = till.shifts.current().unwrap();
        assert_eq!(shift.receipts().len(), 1);
        assert_eq!(shift.receipts()[0].change_due, Money::from_cents(750));
        assert_eq!(shift.drawer_cash(), Money::from_cents(250));
    }

    #[test]
    fn test_end_of_input_abandons_sale() {
        let mut till = till_with_shift(10000);
        let (outcome, _) = run(&mut till, &["Milk", "1"]);

        assert!(matches!(outcome, Err(AppError::InputClosed)));
        assert!(till.shifts.current().unwrap().receipts().is_empty());
    }

    #[test]
    fn test_sale_needs_open_shift() {
        let mut till = Till::new(Catalog::parse(CATALOG).catalog);
        let (outcome, console) = run(&mut till, &["Milk"]);

        assert!(matches!(
            outcome,
            Err(AppError::Core(CoreError::NoOpenShift))
        ));
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_receipts_are_numbered() {
        let mut till = till_with_shift(10000);
        run(&mut till, &["Milk", "1", "done", "card"]).0.unwrap();
        let (outcome, _) = run(&mut till, &["Milk", "1", "done", "card"]);

        assert!(matches!(
            outcome.unwrap(),
            SaleOutcome::Completed {
                receipt_number: 2,
                ..
            }
        ));
    }
}
