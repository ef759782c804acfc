//! # Shift Module
//!
//! Owns the till's single shift and every change made to it.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            open(name, cash)                                             │
//! │   ┌────────┐ ─────────────────────► ┌────────┐                          │
//! │   │ CLOSED │                        │  OPEN  │ ◄──┐ settle(sale)        │
//! │   └────────┘ ◄───────────────────── └────────┘ ───┘                     │
//! │        ▲          close() → Shift                                       │
//! │        │                                                                │
//! │    initial                                                              │
//! │                                                                         │
//! │  open  while OPEN   → ShiftAlreadyOpen, nothing changes                 │
//! │  close while CLOSED → NoOpenShift                                       │
//! │  settle while CLOSED → NoOpenShift                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers pass timestamps in, so the manager never reads the clock.

use chrono::{DateTime, Local};
use tracing::info;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::sale::{SaleDraft, Tender};
use crate::types::{Receipt, Shift};

/// Holder of the till's shift state.
///
/// There is exactly one of these per till. The command loop owns it and
/// lends it to each operation.
#[derive(Debug, Default)]
pub struct ShiftManager {
    current: Option<Shift>,
}

impl ShiftManager {
    /// A manager with no shift open.
    pub fn new() -> Self {
        ShiftManager::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The running shift, if any.
    pub fn current(&self) -> Option<&Shift> {
        self.current.as_ref()
    }

    /// Starts a shift.
    ///
    /// The drawer starts at `opening_cash`, every payment total at zero and
    /// the receipt list empty.
    ///
    /// ## Errors
    /// - `ShiftAlreadyOpen` if a shift is running; it is left untouched
    /// - a validation error for a negative `opening_cash`
    pub fn open(
        &mut self,
        cashier_name: impl Into<String>,
        opening_cash: Money,
        at: DateTime<Local>,
    ) -> CoreResult<&Shift> {
        if self.current.is_some() {
            return Err(CoreError::ShiftAlreadyOpen);
        }
        if opening_cash.is_negative() {
            return Err(ValidationError::Negative {
                field: "opening cash".to_string(),
            }
            .into());
        }

        let shift = Shift::new(cashier_name.into(), opening_cash, at);
        info!(
            cashier = %shift.cashier_name,
            opening_cash = %opening_cash,
            "Shift opened"
        );

        Ok(self.current.insert(shift))
    }

    /// Ends the running shift and hands it back for reporting.
    ///
    /// ## Errors
    /// `NoOpenShift` if there is nothing to close.
    pub fn close(&mut self, at: DateTime<Local>) -> CoreResult<Shift> {
        let mut shift = self.current.take().ok_or(CoreError::NoOpenShift)?;
        shift.closed_at = Some(at);

        info!(
            cashier = %shift.cashier_name,
            receipts = shift.receipts.len(),
            drawer_cash = %shift.drawer_cash,
            "Shift closed"
        );

        Ok(shift)
    }

    /// Records a paid sale against the running shift.
    ///
    /// The total goes to the tender kind's running total; kinds that credit
    /// the drawer also add the total to `drawer_cash`. Change handed back is
    /// not taken out of the drawer figure.
    ///
    /// ## Errors
    /// - `NoOpenShift`
    /// - `EmptySale` for a draft without items
    /// - `AmountOverflow` if a shift figure, the all-kinds grand total
    ///   included, would overflow; the shift is left unchanged
    pub fn settle(
        &mut self,
        draft: SaleDraft,
        tender: Tender,
        at: DateTime<Local>,
    ) -> CoreResult<&Receipt> {
        let shift = self.current.as_mut().ok_or(CoreError::NoOpenShift)?;
        if draft.is_empty() {
            return Err(CoreError::EmptySale);
        }

        let (items, total) = draft.into_parts();
        let kind = tender.kind;

        shift
            .grand_total()
            .checked_add(total)
            .ok_or(CoreError::AmountOverflow {
                context: "shift total",
            })?;

        let kind_total = shift
            .total_for(kind)
            .checked_add(total)
            .ok_or(CoreError::AmountOverflow {
                context: "payment total",
            })?;
        let drawer_cash = if kind.credits_drawer() {
            shift
                .drawer_cash
                .checked_add(total)
                .ok_or(CoreError::AmountOverflow {
                    context: "drawer cash",
                })?
        } else {
            shift.drawer_cash
        };

        shift.totals_by_payment.insert(kind, kind_total);
        shift.drawer_cash = drawer_cash;

        let receipt = Receipt {
            id: Uuid::new_v4(),
            number: shift.receipts.len() as u32 + 1,
            items,
            payment_kind: kind,
            total,
            amount_tendered: tender.amount_tendered,
            change_due: tender.change_due,
            created_at: at,
        };
        info!(
            receipt_id = %receipt.id,
            number = receipt.number,
            payment = kind.token(),
            total = %total,
            "Sale settled"
        );

        shift.receipts.push(receipt);
        let last = shift.receipts.len() - 1;
        Ok(&shift.receipts[last])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
