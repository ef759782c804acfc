//! # Validation Module
//!
//! Pure validators for everything the cashier types at a prompt.
//!
//! ## Retry Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Prompt / Validate Loop                             │
//! │                                                                         │
//! │  Console (cashdesk-cli)              This module                        │
//! │  ──────────────────────              ───────────                        │
//! │                                                                         │
//! │  read line "abc" ─────────────────► parse_quantity("abc")              │
//! │                   ◄───────────────── Err(NotAnInteger)                  │
//! │  print reason, ask again                                                │
//! │                                                                         │
//! │  read line "2" ───────────────────► parse_quantity("2")                │
//! │                   ◄───────────────── Ok(2)                              │
//! │  continue the sale                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads input, so tests feed plain strings.
//!
//! ## Usage
//! ```rust
//! use cashdesk_core::validation::{parse_amount, parse_quantity};
//!
//! assert_eq!(parse_quantity("2").unwrap(), 2);
//! assert!(parse_quantity("0").is_err());
//! assert_eq!(parse_amount("5.00", "amount").unwrap().cents(), 500);
//! assert!(parse_amount("-1", "amount").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the cashier name entered when opening a shift.
///
/// ## Rules
/// - Surrounding whitespace is dropped
/// - Must not be empty afterwards
///
/// ## Returns
/// The trimmed name.
pub fn validate_cashier_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "cashier name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a quantity typed at the sale prompt.
///
/// ## Rules
/// - Must be a whole number
/// - Must be positive (> 0)
/// - Must fit in a `u32`
///
/// ## Example
/// ```rust
/// use cashdesk_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
/// assert!(parse_quantity("-1").is_err());
/// assert!(parse_quantity("1.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    let field = || "quantity".to_string();

    let qty: i64 = input.parse().map_err(|_| {
        let digits = input.strip_prefix('+').unwrap_or(input);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            ValidationError::TooLarge { field: field() }
        } else {
            ValidationError::NotAnInteger { field: field() }
        }
    })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: field() });
    }

    u32::try_from(qty).map_err(|_| ValidationError::TooLarge { field: field() })
}

/// Parses a non-negative amount of money (opening cash, cash tendered).
///
/// ## Rules
/// - Decimal text, rounded half-up to the cent
/// - Zero is allowed (an empty drawer, an exact-zero tender)
/// - Negative amounts are rejected
///
/// ## Example
/// ```rust
/// use cashdesk_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("100", "opening cash").unwrap().cents(), 10000);
/// assert_eq!(parse_amount("0", "opening cash").unwrap().cents(), 0);
/// assert!(parse_amount("ten", "opening cash").is_err());
/// ```
pub fn parse_amount(input: &str, field: &str) -> ValidationResult<Money> {
    let amount: Money = input.parse().map_err(|source| ValidationError::NotAnAmount {
        field: field.to_string(),
        source,
    })?;

    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseMoneyError;

    #[test]
    fn test_validate_cashier_name() {
        assert_eq!(validate_cashier_name("  Anna ").unwrap(), "Anna");
        assert!(validate_cashier_name("").is_err());
        assert!(validate_cashier_name("   ").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("+7").unwrap(), 7);
        assert_eq!(parse_quantity("4294967295").unwrap(), u32::MAX);

        assert_eq!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(matches!(
            parse_quantity("-3"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("two"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_quantity("4294967296"),
            Err(ValidationError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_quantity("99999999999999999999999"),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5.00", "amount").unwrap().cents(), 500);
        assert_eq!(parse_amount("0", "amount").unwrap(), Money::zero());

        assert_eq!(
            parse_amount("-0.01", "amount"),
            Err(ValidationError::Negative {
                field: "amount".to_string()
            })
        );
        assert_eq!(
            parse_amount("", "amount"),
            Err(ValidationError::NotAnAmount {
                field: "amount".to_string(),
                source: ParseMoneyError::Empty,
            })
        );
        assert_eq!(parse_amount("1.999", "amount").unwrap().cents(), 200);
        assert_eq!(parse_amount("4.994", "amount").unwrap().cents(), 499);
        assert!(matches!(
            parse_amount("1.9x", "amount"),
            Err(ValidationError::NotAnAmount { .. })
        ));
    }
}
