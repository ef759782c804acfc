//! # cashdesk-core: Pure Business Logic for the Cash Register
//!
//! This crate is the **heart** of the till. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cashdesk-cli (console)                       │   │
//! │  │    open ──► sale ──► payment ──► receipt ──► close ──► report   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain values in, plain values out      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ cashdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  money  │ │ catalog │ │  shift  │ │  sale   │ │  report  │  │   │
//! │  │  │  Money  │ │ Catalog │ │ Shift-  │ │ Sale-   │ │ receipt, │  │   │
//! │  │  │         │ │ lookup  │ │ Manager │ │ Draft   │ │ summary  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO CONSOLE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, Receipt, Shift, PaymentKind)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Prompt input validators
//! - [`catalog`] - Catalog text parsing and product lookup
//! - [`shift`] - Shift state machine and settlement
//! - [`sale`] - Sale draft and payment resolution
//! - [`report`] - Receipt and shift report rendering
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Local;
//! use cashdesk_core::catalog::Catalog;
//! use cashdesk_core::sale::{SaleDraft, Tender};
//! use cashdesk_core::shift::ShiftManager;
//! use cashdesk_core::{Money, PaymentKind};
//!
//! let catalog = Catalog::parse("Milk,1234567890123,2.50").catalog;
//! let mut shifts = ShiftManager::new();
//! shifts.open("Anna", Money::from_cents(10000), Local::now()).unwrap();
//!
//! let mut draft = SaleDraft::new();
//! draft.add_item(catalog.find("Milk").unwrap(), 1).unwrap();
//! let tender = Tender::counted(PaymentKind::Cash, draft.total(), Money::from_cents(500)).unwrap();
//! let receipt = shifts.settle(draft, tender, Local::now()).unwrap();
//!
//! assert_eq!(receipt.change_due.cents(), 250);
//! assert_eq!(shifts.current().unwrap().drawer_cash().cents(), 10250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod report;
pub mod sale;
pub mod shift;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use shift::ShiftManager;
pub use types::*;
