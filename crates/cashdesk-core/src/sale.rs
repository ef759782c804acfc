//! # Sale Module
//!
//! The pure half of a sale: accumulating line items and resolving payment.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SaleDraft::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_item(product, qty) ──► running total      (repeat)                 │
//! │       │                                                                 │
//! │       ├── no items? ──► dropped, nothing recorded                       │
//! │       ▼                                                                 │
//! │  Tender::exact(kind, total)           kinds without tender (card)       │
//! │  Tender::counted(kind, total, given)  kinds with tender (cash)          │
//! │       │                                                                 │
//! │       ├── given < total ──► InsufficientPayment, choose again           │
//! │       ├── change > drawer ──► needs cashier override                    │
//! │       ▼                                                                 │
//! │  ShiftManager::settle(draft, tender) ──► Receipt                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping a [`SaleDraft`] is how a sale is cancelled: nothing outside the
//! draft has been touched until settlement.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, PaymentKind, Product};

// =============================================================================
// Sale Draft
// =============================================================================

/// Line items collected so far for the sale in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleDraft {
    items: Vec<LineItem>,
    total: Money,
}

impl SaleDraft {
    pub fn new() -> Self {
        SaleDraft::default()
    }

    /// Appends a snapshot of `product` and returns the new running total.
    ///
    /// The same product may appear on several lines; each call adds a line.
    ///
    /// ## Errors
    /// - `quantity` of zero
    /// - a subtotal or running total that would overflow; the draft is left
    ///   unchanged so the cashier can enter a smaller quantity
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CoreResult<Money> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let item = LineItem {
            product: product.clone(),
            quantity,
        };
        let total = item
            .checked_subtotal()
            .and_then(|subtotal| self.total.checked_add(subtotal))
            .ok_or(CoreError::AmountOverflow {
                context: "sale total",
            })?;

        self.items.push(item);
        self.total = total;
        Ok(total)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<LineItem>, Money) {
        (self.items, self.total)
    }
}

// =============================================================================
// Tender
// =============================================================================

/// A resolved payment, ready for settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    pub kind: PaymentKind,
    pub amount_tendered: Money,
    pub change_due: Money,
}

impl Tender {
    /// Payment of exactly the total, no change.
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::money::Money;
    /// use cashdesk_core::sale::Tender;
    /// use cashdesk_core::PaymentKind;
    ///
    /// let tender = Tender::exact(PaymentKind::Card, Money::from_cents(500));
    /// assert_eq!(tender.amount_tendered.cents(), 500);
    /// assert!(tender.change_due.is_zero());
    /// ```
    pub fn exact(kind: PaymentKind, total: Money) -> Self {
        Tender {
            kind,
            amount_tendered: total,
            change_due: Money::zero(),
        }
    }

    /// Payment of a counted amount, with change for anything above the total.
    ///
    /// ## Errors
    /// `InsufficientPayment` when `tendered` is below `total`.
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::money::Money;
    /// use cashdesk_core::sale::Tender;
    /// use cashdesk_core::PaymentKind;
    ///
    /// let total = Money::from_cents(250);
    /// let tender = Tender::counted(PaymentKind::Cash, total, Money::from_cents(500)).unwrap();
    /// assert_eq!(tender.change_due.cents(), 250);
    ///
    /// assert!(Tender::counted(PaymentKind::Cash, total, Money::from_cents(200)).is_err());
    /// ```
    pub fn counted(kind: PaymentKind, total: Money, tendered: Money) -> CoreResult<Self> {
        if tendered < total {
            return Err(CoreError::InsufficientPayment { total, tendered });
        }

        Ok(Tender {
            kind,
            amount_tendered: tendered,
            change_due: tendered - total,
        })
    }

    /// Whether paying out the change would take more than the drawer holds.
    ///
    /// The cashier may still proceed, but only after an explicit override.
    pub fn exceeds_drawer(&self, drawer_cash: Money) -> bool {
        self.change_due > drawer_cash
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
