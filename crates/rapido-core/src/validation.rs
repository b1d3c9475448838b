//! # Validation Module
//!
//! Input validation utilities for Rapido POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                           │
//! │                                                                 │
//! │  Layer 1: Input shape (apps/terminal InputHandler)              │
//! │  ├── "is this line a number at all?"                            │
//! │  └── recoverable; the menu is simply re-shown                   │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: THIS MODULE - domain validation                       │
//! │  ├── names non-empty, prices non-negative, quantities > 0       │
//! │  └── typed ValidationError, state untouched on failure          │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 3: Store invariants (rapido-core Inventory)              │
//! │  └── stock >= 0 enforced by refusing the mutation               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Category;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item name.
const MAX_NAME_LEN: usize = 80;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name for the "add new item" admin action.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 80 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock-adjustment quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit a `u32` (stock counts are `u32`)
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: u32::MAX as i64,
    })
}

/// Parses and validates a price string (`"6.99"`).
///
/// Negative prices cannot be expressed in the accepted grammar, so a
/// successful parse is already a valid catalog price. Zero is allowed
/// (free items).
pub fn validate_price(input: &str) -> ValidationResult<Money> {
    let price = Money::from_str(input)?;

    // Unreachable through FromStr, but the invariant belongs here.
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(price)
}

/// Parses a category string (`"main"`, `"snack"`, `"drink"`).
pub fn validate_category(input: &str) -> ValidationResult<Category> {
    Category::from_str(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
