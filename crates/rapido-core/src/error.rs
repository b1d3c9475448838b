//! # Error Types
//!
//! Domain-specific error types for rapido-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  rapido-core errors (this file)                                 │
//! │  ├── CoreError        - Business rule / domain failures         │
//! │  └── ValidationError  - Input validation failures               │
//! │                                                                 │
//! │  Terminal app errors (apps/terminal)                            │
//! │  ├── InputError       - Unreadable / non-numeric input lines    │
//! │  └── AppError         - What the menu loop reports              │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → AppError → user message    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. An out-of-stock *checkout* is a normal business outcome and is
//!    reported through [`crate::order::StockReport`], not through these
//!    types; `InsufficientStock` here covers direct stock mutations only

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry with the given name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A stock removal would drive the count negative.
    ///
    /// The mutation is refused; the stored count never changes.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// No configured gateway supports the requested payment kind.
    #[error("No gateway supports {0}")]
    UnsupportedPayment(String),

    /// The embedded seed menu failed to parse.
    #[error("Seed menu is invalid: {0}")]
    SeedData(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Not one of the known categories (main/snack/drink).
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Big Mac".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Big Mac: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::UnknownCategory("dessert".to_string());
        assert_eq!(err.to_string(), "Unknown category: dessert");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
