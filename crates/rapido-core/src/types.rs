//! # Domain Types
//!
//! Core domain types used throughout Rapido POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐   │
//! │  │  CatalogEntry  │   │    Category    │   │    ItemRef     │   │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │   │
//! │  │  name          │   │  Main          │   │  name          │   │
//! │  │  price (Money) │   │  Snack         │   │  price (Money) │   │
//! │  │  stock (u32)   │   │  Drink         │   │  (cart module) │   │
//! │  │  category      │   └────────────────┘   └────────────────┘   │
//! │  │  size (drinks) │                                             │
//! │  └────────────────┘                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A catalog entry is identified by its `name`. Uniqueness is NOT
//! enforced by the store; name-based lookups act on the first match.
//! This mirrors the documented gap in the ordering core's contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The menu category an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Main dishes (burgers, sandwiches).
    Main,
    /// Sides and snacks.
    Snack,
    /// Drinks; the only category where `size` is meaningful.
    Drink,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Category; 3] = [Category::Main, Category::Snack, Category::Drink];

    /// Human-readable section heading for per-category listings.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Main => "Main dishes",
            Category::Snack => "Snacks",
            Category::Drink => "Drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Main => "main",
            Category::Snack => "snack",
            Category::Drink => "drink",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Category::Main),
            "snack" => Ok(Category::Snack),
            "drink" => Ok(Category::Drink),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A purchasable thing on the menu.
///
/// Immutable after creation except for `stock`, which is only mutated
/// through [`crate::inventory::Inventory`] stock-adjustment operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name; also the entry's identity for name-based lookups.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Remaining sellable units. `u32` keeps the `stock >= 0` invariant
    /// in the type; removals that would underflow are refused instead.
    pub stock: u32,

    /// Menu category.
    pub category: Category,

    /// Serving size; meaningful only when `category` is `Drink`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CatalogEntry {
    /// Creates an entry without a size (mains, snacks).
    pub fn new(name: impl Into<String>, price: Money, stock: u32, category: Category) -> Self {
        CatalogEntry {
            name: name.into(),
            price,
            stock,
            category,
            size: None,
        }
    }

    /// Creates a drink entry with a serving size.
    pub fn new_drink(name: impl Into<String>, price: Money, stock: u32, size: impl Into<String>) -> Self {
        CatalogEntry {
            name: name.into(),
            price,
            stock,
            category: Category::Drink,
            size: Some(size.into()),
        }
    }

    /// Whether at least one unit is sellable.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        assert_eq!("main".parse::<Category>().unwrap(), Category::Main);
        assert_eq!("SNACK".parse::<Category>().unwrap(), Category::Snack);
        assert_eq!(" drink ".parse::<Category>().unwrap(), Category::Drink);
        assert_eq!(Category::Drink.to_string(), "drink");
    }

    #[test]
    fn test_category_unknown() {
        let err = "dessert".parse::<Category>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory(_)));
    }

    #[test]
    fn test_entry_stock_check() {
        let mut entry = CatalogEntry::new("Big Mac", Money::from_cents(699), 1, Category::Main);
        assert!(entry.is_in_stock());
        entry.stock = 0;
        assert!(!entry.is_in_stock());
    }

    #[test]
    fn test_drink_carries_size() {
        let drink = CatalogEntry::new_drink("Coca-Cola", Money::from_cents(249), 80, "Medium");
        assert_eq!(drink.category, Category::Drink);
        assert_eq!(drink.size.as_deref(), Some("Medium"));
    }
}
