//! # Catalog Module
//!
//! Parses the product catalog text and answers product lookups.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products.csv   (no header, one product per line)                      │
//! │                                                                         │
//! │    Milk,1234567890123,2.50                                              │
//! │    ────  ─────────────  ────                                            │
//! │    name  13-digit code  price (>= 0, rounded half-up to cents)          │
//! │                                                                         │
//! │  Bad lines are skipped and reported, loading carries on.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reading the file is the CLI's job; this module only sees its text.
//!
//! ## Lookup
//! Exact, case-sensitive match on code or name, first hit in load order.
//! The catalog is small and read-only, so a linear scan is all it needs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LineRejection;
use crate::money::Money;
use crate::types::Product;

/// Separator between the fields of a catalog line.
pub const FIELD_DELIMITER: char = ',';

/// Required length of a product code.
pub const CODE_LENGTH: usize = 13;

// =============================================================================
// Catalog
// =============================================================================

/// The products available for sale, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps an already validated product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Parses catalog text line by line.
    ///
    /// Never fails as a whole: every line either becomes a product or is
    /// recorded in [`CatalogLoad::rejected`].
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::catalog::Catalog;
    ///
    /// let load = Catalog::parse("Milk,1234567890123,2.50\nbroken line\n");
    /// assert_eq!(load.total_lines, 2);
    /// assert_eq!(load.catalog.len(), 1);
    /// assert_eq!(load.rejected[0].line_number, 2);
    /// ```
    pub fn parse(text: &str) -> CatalogLoad {
        let mut products = Vec::new();
        let mut rejected = Vec::new();
        let mut total_lines = 0;

        for (index, line) in text.lines().enumerate() {
            total_lines += 1;
            match parse_line(line) {
                Ok(product) => products.push(product),
                Err(reason) => {
                    debug!(line_number = index + 1, %reason, "Catalog line rejected");
                    rejected.push(RejectedLine {
                        line_number: index + 1,
                        reason,
                    });
                }
            }
        }

        CatalogLoad {
            catalog: Catalog::new(products),
            total_lines,
            rejected,
        }
    }

    /// Finds the first product whose code or name equals `query` exactly.
    ///
    /// ## Example
    /// ```rust
    /// use cashdesk_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::parse("Milk,1234567890123,2.50").catalog;
    /// assert!(catalog.find("Milk").is_some());
    /// assert!(catalog.find("1234567890123").is_some());
    /// assert!(catalog.find("milk").is_none());
    /// assert!(catalog.find("Mil").is_none());
    /// ```
    pub fn find(&self, query: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.code == query || product.name == query)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Load Result
// =============================================================================

/// A catalog line that was skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub reason: LineRejection,
}

/// Outcome of [`Catalog::parse`].
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub total_lines: usize,
    pub rejected: Vec<RejectedLine>,
}

impl CatalogLoad {
    /// Number of lines that became products.
    pub fn loaded(&self) -> usize {
        self.catalog.len()
    }

    /// Number of lines that were skipped.
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

// =============================================================================
// Line Parsing
// =============================================================================

/// Parses one catalog line into a product.
///
/// ## Rules
/// - Exactly 3 comma separated fields: name, code, price
/// - Code: exactly 13 characters, all ASCII digits
/// - Price: non-negative decimal; malformed and out-of-range values are
///   rejected alike
///
/// The name is taken verbatim; the price may carry surrounding whitespace.
pub fn parse_line(line: &str) -> Result<Product, LineRejection> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [name, code, price] = fields[..] else {
        return Err(LineRejection::FieldCount {
            found: fields.len(),
        });
    };

    if code.chars().count() != CODE_LENGTH {
        return Err(LineRejection::CodeLength {
            code: code.to_string(),
        });
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineRejection::CodeNotNumeric {
            code: code.to_string(),
        });
    }

    let unit_price: Money = price.parse()?;
    if unit_price.is_negative() {
        return Err(LineRejection::NegativePrice(unit_price));
    }

    Ok(Product {
        name: name.to_string(),
        code: code.to_string(),
        unit_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
