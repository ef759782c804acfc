//! # Report Module
//!
//! Text rendering for the printed receipt and the end-of-shift report.
//!
//! Receipts and shift summaries implement `Display`; the `render_*`
//! helpers return the text as a `String` and the CLI decides where it goes.
//!
//! ## Receipt Layout
//! ```text
//! ============ RECEIPT ============
//! Receipt #1
//! Date: Mon Oct 19 10:00:00 2026
//! Items:
//! Milk         1 x     2.50 =     2.50
//!
//! TOTAL:                      2.50
//! Payment: Cash
//! Tendered:                   5.00
//! Change:                     2.50
//! =================================
//! ```

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::money::Money;
use crate::types::{PaymentKind, Receipt, Shift};

/// Width of the label/amount rows.
pub const REPORT_WIDTH: usize = 32;

/// Longest product name printed on a receipt line.
pub const RECEIPT_NAME_CHARS: usize = 20;

/// `ctime`-style stamp, e.g. `Mon Oct 19 10:00:00 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

// =============================================================================
// Shift Summary
// =============================================================================

/// Figures shown on the end-of-shift report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftSummary {
    pub cashier_name: String,
    pub opened_at: DateTime<Local>,
    pub closed_at: Option<DateTime<Local>>,
    pub opening_cash: Money,
    /// One entry per payment kind, in [`PaymentKind::ALL`] order.
    pub totals: Vec<(PaymentKind, Money)>,
    pub grand_total: Money,
    /// Opening cash plus sales that went into the drawer.
    pub expected_cash: Money,
    pub drawer_cash: Money,
    pub receipt_count: usize,
}

impl From<&Shift> for ShiftSummary {
    fn from(shift: &Shift) -> Self {
        ShiftSummary {
            cashier_name: shift.cashier_name().to_string(),
            opened_at: shift.opened_at(),
            closed_at: shift.closed_at(),
            opening_cash: shift.opening_cash(),
            totals: PaymentKind::ALL
                .into_iter()
                .map(|kind| (kind, shift.total_for(kind)))
                .collect(),
            grand_total: shift.grand_total(),
            expected_cash: shift.expected_cash(),
            drawer_cash: shift.drawer_cash(),
            receipt_count: shift.receipts().len(),
        }
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// A receipt laid out for printing.
///
/// Tendered amount and change are only printed for payment kinds that take
/// a tender.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptText<'a>(pub &'a Receipt);

impl fmt::Display for ReceiptText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let receipt = self.0;

        writeln!(f, "============ RECEIPT ============")?;
        writeln!(f, "Receipt #{}", receipt.number)?;
        writeln!(f, "Date: {}", format_timestamp(receipt.created_at))?;
        writeln!(f, "Items:")?;

        for item in &receipt.items {
            let name: String = item.product.name.chars().take(RECEIPT_NAME_CHARS).collect();
            writeln!(
                f,
                "{:<10}{:>4} x {:>8} = {:>8}",
                name,
                item.quantity,
                item.product.unit_price,
                item.subtotal()
            )?;
        }

        writeln!(f)?;
        write_amount_row(f, "TOTAL:", receipt.total)?;
        writeln!(f, "Payment: {}", receipt.payment_kind.label())?;

        if receipt.payment_kind.takes_tender() {
            write_amount_row(f, "Tendered:", receipt.amount_tendered)?;
            write_amount_row(f, "Change:", receipt.change_due)?;
        }

        writeln!(f, "=================================")
    }
}

/// The end-of-shift report.
impl fmt::Display for ShiftSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========= SHIFT REPORT =========")?;
        writeln!(f, "Cashier: {}", self.cashier_name)?;
        writeln!(f, "Opened: {}", format_timestamp(self.opened_at))?;
        match self.closed_at {
            Some(at) => writeln!(f, "Closed: {}", format_timestamp(at))?,
            None => writeln!(f, "Closed: -")?,
        }
        write_amount_row(f, "Opening cash:", self.opening_cash)?;

        for (kind, total) in &self.totals {
            write_amount_row(f, &format!("{} sales:", kind.label()), *total)?;
        }

        write_amount_row(f, "Total sales:", self.grand_total)?;
        write_amount_row(f, "Expected cash:", self.expected_cash)?;
        write_amount_row(f, "Drawer cash:", self.drawer_cash)?;
        writeln!(f, "Receipts: {}", self.receipt_count)?;
        writeln!(f, "================================")
    }
}

/// Renders the customer receipt.
pub fn render_receipt(receipt: &Receipt) -> String {
    ReceiptText(receipt).to_string()
}

/// Renders the end-of-shift report.
pub fn render_shift_report(shift: &Shift) -> String {
    ShiftSummary::from(shift).to_string()
}

/// Renders precomputed shift figures.
pub fn render_summary(summary: &ShiftSummary) -> String {
    summary.to_string()
}

/// Formats a timestamp the way receipts and reports print it.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// One `label ... amount` line, the amount right-aligned to [`REPORT_WIDTH`].
fn write_amount_row(f: &mut fmt::Formatter<'_>, label: &str, amount: Money) -> fmt::Result {
    let width = REPORT_WIDTH.saturating_sub(label.chars().count());
    writeln!(f, "{label}{amount:>width$}")
}

// =============================================================================
// Unit Tests
// =============================================================================
