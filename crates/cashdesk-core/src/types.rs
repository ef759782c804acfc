//! # Domain Types
//!
//! Core domain types used throughout the till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  product (copy) │──►│  id (UUID)      │       │
//! │  │  code (EAN-13)  │   │  quantity       │   │  number         │       │
//! │  │  unit_price     │   └─────────────────┘   │  items, total   │       │
//! │  └─────────────────┘                         │  payment_kind   │       │
//! │                                              └────────┬────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐            │                │
//! │  │  PaymentKind    │   │     Shift       │◄───────────┘                │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Cash           │   │  drawer_cash    │                             │
//! │  │  Card           │   │  totals, receipts                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Receipts carry a UUID (`id`) for logs and a human-readable, per-shift
//! `number` for the printed slip.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Built only by the catalog loader, which guarantees a 13-digit `code` and
/// a non-negative `unit_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// 13-digit barcode. Uniqueness is not enforced.
    pub code: String,

    /// Price of one unit.
    pub unit_price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// A line on a receipt.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    /// Line total (unit price × quantity), `None` on overflow.
    pub fn checked_subtotal(&self) -> Option<Money> {
        self.product
            .unit_price
            .checked_multiply_quantity(self.quantity)
    }

    /// Line total (unit price × quantity).
    ///
    /// Items only enter a sale after their subtotal was checked, so this
    /// cannot overflow for lines taken from a [`Receipt`].
    pub fn subtotal(&self) -> Money {
        self.checked_subtotal().unwrap_or_default()
    }
}

// =============================================================================
// Payment Kind
// =============================================================================

/// How a sale is paid.
///
/// Settlement never matches on a specific kind. It asks the kind what it
/// does (`takes_tender`, `credits_drawer`), so adding a kind means adding a
/// variant and its answers here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Physical cash, counted into the drawer.
    Cash,
    /// Card on an external terminal.
    Card,
}

impl PaymentKind {
    /// Every kind, in report order.
    pub const ALL: [PaymentKind; 2] = [PaymentKind::Cash, PaymentKind::Card];

    /// Console token that selects this kind.
    pub const fn token(&self) -> &'static str {
        match self {
            PaymentKind::Cash => "cash",
            PaymentKind::Card => "card",
        }
    }

    /// Name printed on receipts and reports.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentKind::Cash => "Cash",
            PaymentKind::Card => "Card",
        }
    }

    /// Whether the customer hands over an amount that may need change.
    pub const fn takes_tender(&self) -> bool {
        match self {
            PaymentKind::Cash => true,
            PaymentKind::Card => false,
        }
    }

    /// Whether the sale total lands in the cash drawer.
    pub const fn credits_drawer(&self) -> bool {
        match self {
            PaymentKind::Cash => true,
            PaymentKind::Card => false,
        }
    }

    /// Resolves a console token, ignoring case and surrounding whitespace.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        PaymentKind::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The immutable record of one completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    /// 1-based position within the shift.
    pub number: u32,
    pub items: Vec<LineItem>,
    pub payment_kind: PaymentKind,
    pub total: Money,
    pub amount_tendered: Money,
    pub change_due: Money,
    pub created_at: DateTime<Local>,
}

// =============================================================================
// Shift
// =============================================================================

/// One cashier's period at the till.
///
/// Only [`crate::shift::ShiftManager`] mutates a shift, so the fields are
/// read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub(crate) cashier_name: String,
    pub(crate) opened_at: DateTime<Local>,
    pub(crate) closed_at: Option<DateTime<Local>>,
    pub(crate) opening_cash: Money,
    pub(crate) drawer_cash: Money,
    pub(crate) totals_by_payment: BTreeMap<PaymentKind, Money>,
    pub(crate) receipts: Vec<Receipt>,
}

impl Shift {
    pub(crate) fn new(cashier_name: String, opening_cash: Money, at: DateTime<Local>) -> Self {
        Shift {
            cashier_name,
            opened_at: at,
            closed_at: None,
            opening_cash,
            drawer_cash: opening_cash,
            totals_by_payment: PaymentKind::ALL
                .into_iter()
                .map(|kind| (kind, Money::zero()))
                .collect(),
            receipts: Vec::new(),
        }
    }

    pub fn cashier_name(&self) -> &str {
        &self.cashier_name
    }

    pub fn opened_at(&self) -> DateTime<Local> {
        self.opened_at
    }

    /// Set once the shift has been closed.
    pub fn closed_at(&self) -> Option<DateTime<Local>> {
        self.closed_at
    }

    pub fn opening_cash(&self) -> Money {
        self.opening_cash
    }

    /// Running drawer figure: opening cash plus every cash sale total.
    pub fn drawer_cash(&self) -> Money {
        self.drawer_cash
    }

    /// Sales total recorded for one payment kind.
    pub fn total_for(&self, kind: PaymentKind) -> Money {
        self.totals_by_payment
            .get(&kind)
            .copied()
            .unwrap_or_default()
    }

    /// Sum over all payment kinds.
    ///
    /// Settlement refuses any sale that would take this past the largest
    /// representable amount, so the sum cannot overflow.
    pub fn grand_total(&self) -> Money {
        self.totals_by_payment.values().copied().sum()
    }

    /// Opening cash plus the totals of every kind that credits the drawer.
    ///
    /// The same figure as `drawer_cash`, whose every increase is checked.
    pub fn expected_cash(&self) -> Money {
        self.opening_cash
            + PaymentKind::ALL
                .into_iter()
                .filter(PaymentKind::credits_drawer)
                .map(|kind| self.total_for(kind))
                .sum::<Money>()
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
