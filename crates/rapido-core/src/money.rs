//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004   WRONG!                     │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Cents                                    │
//! │    699 + 349 + 249 = 1297 cents, always exact                   │
//! │                                                                 │
//! │  The only rounding in the system happens in                     │
//! │  `with_discount_bps`, once, at cent resolution.                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rapido_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(699); // $6.99
//!
//! // Parse user input ("6.99", "7", "7.5")
//! let parsed: Money = "6.99".parse().unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows intermediate subtraction without surprises
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde newtype**: serializes as a plain number (seed menu uses this)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rapido_core::money::Money;
    ///
    /// let price = Money::from_cents(699); // Represents $6.99
    /// assert_eq!(price.cents(), 699);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use rapido_core::money::Money;
    ///
    /// let price = Money::from_major_minor(6, 99); // $6.99
    /// assert_eq!(price.cents(), 699);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the discounted price,
    /// rounded half-up at cent resolution.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Rounding Contract
    /// The rounding is applied **once, to the discounted price**, not to
    /// the discount amount. `x.with_discount_bps(1500)` is
    /// `round(x × 0.85)`, which differs from `x − round(x × 0.15)` when
    /// the product lands on an exact half cent.
    ///
    /// ## Example
    /// ```rust
    /// use rapido_core::money::Money;
    ///
    /// // Trio: $6.99 + $3.49 + $2.49 = $12.97 → ×0.85 = 11.0245 → $11.02
    /// let sum = Money::from_cents(1297);
    /// assert_eq!(sum.with_discount_bps(1500).cents(), 1102);
    /// ```
    pub fn with_discount_bps(&self, discount_bps: u32) -> Money {
        // i128 to prevent overflow on large amounts
        let keep = (10_000 - discount_bps as i64) as i128;
        let discounted = (self.0 as i128 * keep + 5_000) / 10_000;
        Money(discounted as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money in a human-readable `$D.CC` format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Parses a decimal price string (`"6.99"`, `"7"`, `"7.5"`).
///
/// ## Rules
/// - At most two fraction digits
/// - No sign, no currency symbol
/// - Empty or malformed input is a `ValidationError::InvalidFormat`
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (major_str, minor_str) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, ""),
        };

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must be a decimal number like 6.99"));
        }
        if minor_str.len() > 2 || !minor_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most two digits after the decimal point"));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| invalid("dollar amount too large"))?;

        // "7.5" means 50 cents, not 5
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_str.parse::<i64>().unwrap_or(0),
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("dollar amount too large"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
