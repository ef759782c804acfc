//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  At a till, a drawer that drifts by fractions of a cent over a shift   │
//! │  never balances against the shift report.                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "2.50" is parsed straight into 250 cents, never through f64         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cashdesk_core::money::Money;
//!
//! let price: Money = "2.50".parse().unwrap();
//! assert_eq!(price.cents(), 250);
//!
//! let line = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line.to_string(), "7.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseMoneyError;

/// Number of fractional digits kept in a `Money` value.
pub const MINOR_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist while parsing and comparing,
///   even though prices and drawer amounts are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.unit_price ──► LineItem.subtotal ──► Receipt.total            │
/// │                                                    │                    │
/// │  Cash tendered ──► change_due = tendered - total ◄─┘                    │
/// │                                                    │                    │
/// │  Shift.totals_by_payment[kind] += total ◄──────────┤                    │
/// │  Shift.drawer_cash += total (cash only) ◄──────────┘                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250);
    /// assert_eq!(unit_price.checked_multiply_quantity(2), Some(Money::from_cents(500)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"2.50"`, `"100"`, `".5"` or `"-3.1"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - An optional leading `+` or `-` sign
/// - Digits, optionally followed by `.` and fractional digits
/// - At least one digit overall
/// - Beyond two fractional digits the amount is rounded half-up to the
///   cent, away from zero for negatives (`"2.505"` is 251 cents,
///   `"2.504"` is 250)
///
/// The sign is accepted here so callers can report "negative" separately
/// from "not a number".
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::InvalidFormat(s.to_string()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidFormat(s.to_string()));
        }

        let overflow = || ParseMoneyError::Overflow(s.to_string());

        let mut cents: i64 = 0;
        for digit in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }
        cents = cents.checked_mul(100).ok_or_else(overflow)?;

        let minor = fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(MINOR_DIGITS)
            .fold(0i64, |acc, digit| acc * 10 + i64::from(digit - b'0'));
        let round_up = fraction
            .as_bytes()
            .get(MINOR_DIGITS)
            .is_some_and(|&digit| digit >= b'5');

        cents = cents
            .checked_add(minor + i64::from(round_up))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering (`"102.50"`), the way receipts print amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.major().abs(), self.minor());
        // Route through `pad` so width/alignment flags work in report columns.
        f.pad(&text)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(format!("{:>8}", Money::from_cents(250)), "    2.50");
    }

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!("2.50".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("100".parse::<Money>().unwrap().cents(), 10000);
        assert_eq!("100.00".parse::<Money>().unwrap().cents(), 10000);
        assert_eq!("5.5".parse::<Money>().unwrap().cents(), 550);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("7.".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("  3.10 ".parse::<Money>().unwrap().cents(), 310);
        assert_eq!("+1".parse::<Money>().unwrap().cents(), 100);
        assert_eq!("-3.1".parse::<Money>().unwrap().cents(), -310);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1.2.3".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2,50".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1e3".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rounds_extra_digits_half_up() {
        assert_eq!("2.505".parse::<Money>().unwrap().cents(), 251);
        assert_eq!("2.504".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("2.5049".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("0.999".parse::<Money>().unwrap().cents(), 100);
        assert_eq!("-1.005".parse::<Money>().unwrap().cents(), -101);
        assert_eq!("3.10000".parse::<Money>().unwrap().cents(), 310);
        assert!(matches!(
            "2.5x5".parse::<Money>(),
            Err(ParseMoneyError::InvalidFormat(_))
        ));
        // Rounding up past the largest amount is still an overflow.
        assert!(matches!(
            "92233720368547758.075".parse::<Money>(),
            Err(ParseMoneyError::Overflow(_))
        ));
        assert_eq!(
            "92233720368547758.074".parse::<Money>().unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_reports_overflow() {
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::Overflow(_))
        ));
        // Fits in i64 as a whole number but not once scaled to cents.
        assert!(matches!(
            "92233720368547759".parse::<Money>(),
            Err(ParseMoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(1250)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 897);
        assert_eq!(
            Money::from_cents(i64::MAX / 2).checked_multiply_quantity(3),
            None
        );
    }
}
