//! # Error Types
//!
//! Domain-specific error types for cashdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cashdesk-core errors (this file)                                      │
//! │  ├── CoreError        - Shift state and settlement failures            │
//! │  ├── ValidationError  - Console input that must be re-prompted         │
//! │  ├── LineRejection    - Why a catalog line was skipped                 │
//! │  └── ParseMoneyError  - Decimal text that is not an amount             │
//! │                                                                         │
//! │  cashdesk-cli errors (app crate)                                       │
//! │  └── AppError         - Core errors + console I/O + end of input       │
//! │                                                                         │
//! │  Flow: ValidationError → re-prompt                                     │
//! │        CoreError → message, loop continues                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the shift manager and sale settlement.
///
/// None of these are fatal: the console reports them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `open` was called while a shift is already running.
    #[error("A shift is already open")]
    ShiftAlreadyOpen,

    /// `close` or a sale was attempted with no running shift.
    #[error("No shift is open")]
    NoOpenShift,

    /// A sale with no line items reached settlement.
    #[error("Cannot settle a sale with no items")]
    EmptySale,

    /// Cash handed over does not cover the sale.
    #[error("Insufficient payment: total {total}, tendered {tendered}")]
    InsufficientPayment { total: Money, tendered: Money },

    /// A running total or drawer figure left the representable range.
    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the "retry reasons" of the interactive prompts: the console
/// prints them and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be a whole number.
    #[error("{field} must be a whole number")]
    NotAnInteger { field: String },

    /// Value must be a decimal amount.
    #[error("{field} must be a number: {source}")]
    NotAnAmount {
        field: String,
        #[source]
        source: ParseMoneyError,
    },

    /// Value must be positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value is too large to be represented.
    #[error("{field} is too large")]
    TooLarge { field: String },
}

// =============================================================================
// Money Parsing
// =============================================================================

/// Why a piece of text is not a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("empty amount")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    InvalidFormat(String),

    #[error("'{0}' is out of range")]
    Overflow(String),
}

// =============================================================================
// Catalog Line Rejection
// =============================================================================

/// Why a catalog line was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejection {
    #[error("expected 3 fields, found {found}")]
    FieldCount { found: usize },

    #[error("code '{code}' must be exactly 13 characters")]
    CodeLength { code: String },

    #[error("code '{code}' must contain only digits")]
    CodeNotNumeric { code: String },

    #[error("bad price: {0}")]
    Price(#[from] ParseMoneyError),

    #[error("price {0} is negative")]
    NegativePrice(Money),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
