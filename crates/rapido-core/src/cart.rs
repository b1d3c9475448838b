//! # Cart
//!
//! The customer-session cart: an ordered sequence of cart lines.
//!
//! ## Line Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Simple line:  price = entry price (whole cents, already        │
//! │                rounded by representation)                       │
//! │                                                                 │
//! │  Trio line:    price = round((main + snack + drink) × 0.85)     │
//! │                one rounding, applied after the discount         │
//! │                                                                 │
//! │  Cart total:   Σ line prices — a sum of already-rounded         │
//! │                values, never a rounding of the raw sum          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Semantics
//! A line holds [`ItemRef`]s resolved from the store at add-time.
//! Identity travels by name; stock is re-read through the store when
//! the order is validated or settled. The price is frozen at add-time,
//! which is equivalent to re-reading it because catalog entries are
//! immutable apart from their stock count.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CatalogEntry;

/// Trio discount: 15% off the sum of the three component prices.
pub const TRIO_DISCOUNT_BPS: u32 = 1_500;

// =============================================================================
// Item Reference
// =============================================================================

/// A cart line's handle on one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Entry identity; stock lookups go back through the store by name.
    pub name: String,

    /// Unit price, frozen at add-time.
    pub price: Money,
}

impl ItemRef {
    /// Resolves a reference from a catalog entry.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        ItemRef {
            name: entry.name.clone(),
            price: entry.price,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One purchasable unit in the cart: a single entry or a bundled trio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartLine {
    /// One catalog entry.
    Simple(ItemRef),

    /// A bundled main + snack + drink at a 15% discount.
    Trio {
        main: ItemRef,
        snack: ItemRef,
        drink: ItemRef,
    },
}

impl CartLine {
    /// Builds a simple line from a catalog entry.
    pub fn simple(entry: &CatalogEntry) -> Self {
        CartLine::Simple(ItemRef::from_entry(entry))
    }

    /// Builds a trio line from its three components.
    pub fn trio(main: &CatalogEntry, snack: &CatalogEntry, drink: &CatalogEntry) -> Self {
        CartLine::Trio {
            main: ItemRef::from_entry(main),
            snack: ItemRef::from_entry(snack),
            drink: ItemRef::from_entry(drink),
        }
    }

    /// The line's price.
    ///
    /// For a trio the 15% discount applies to the component sum and the
    /// result is rounded once, at cent resolution.
    pub fn price(&self) -> Money {
        match self {
            CartLine::Simple(item) => item.price,
            CartLine::Trio { main, snack, drink } => {
                (main.price + snack.price + drink.price).with_discount_bps(TRIO_DISCOUNT_BPS)
            }
        }
    }

    /// Display label for cart listings and receipts.
    pub fn label(&self) -> String {
        match self {
            CartLine::Simple(item) => item.name.clone(),
            CartLine::Trio { main, snack, drink } => format!(
                "TRIO: {} + {} + {} (15% off)",
                main.name, snack.name, drink.name
            ),
        }
    }

    /// Names of every catalog entry the line references (1 or 3).
    ///
    /// The order is main, snack, drink for trios; settlement decrements
    /// each referenced entry by one unit.
    pub fn item_names(&self) -> Vec<&str> {
        match self {
            CartLine::Simple(item) => vec![item.name.as_str()],
            CartLine::Trio { main, snack, drink } => {
                vec![main.name.as_str(), snack.name.as_str(), drink.name.as_str()]
            }
        }
    }

    /// Whether the line is a trio bundle.
    pub fn is_trio(&self) -> bool {
        matches!(self, CartLine::Trio { .. })
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The session cart.
///
/// Scoped to one customer session; the menu loop clears it at session
/// start and on checkout or cancel. The total is recomputed on demand,
/// never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Appends a line to the end of the cart.
    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Bounds-checked removal; remaining lines keep their order.
    ///
    /// Returns `None` (cart untouched) when the index is out of range.
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines, in order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Snapshot copy of the lines.
    pub fn all_lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Running total: the sum of per-line prices.
    ///
    /// Each line price is already rounded, so the total is a sum of
    /// rounded values, not a rounding of the raw sum.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn entry(name: &str, cents: i64, category: Category) -> CatalogEntry {
        CatalogEntry::new(name, Money::from_cents(cents), 10, category)
    }

    #[test]
    fn test_simple_line_price_is_entry_price() {
        let burger = entry("Big Mac", 699, Category::Main);
        let line = CartLine::simple(&burger);
        assert_eq!(line.price().cents(), 699);
        assert_eq!(line.label(), "Big Mac");
        assert!(!line.is_trio());
    }

    #[test]
    fn test_trio_price_reference_case() {
        // 6.99 + 3.49 + 2.49 = 12.97 → ×0.85 = 11.0245 → $11.02
        let line = CartLine::trio(
            &entry("Big Mac", 699, Category::Main),
            &entry("Frites", 349, Category::Snack),
            &entry("Coca-Cola", 249, Category::Drink),
        );
        assert_eq!(line.price().cents(), 1102);
        assert_eq!(line.label(), "TRIO: Big Mac + Frites + Coca-Cola (15% off)");
        assert!(line.is_trio());
    }

    #[test]
    fn test_trio_references_all_three_names() {
        let line = CartLine::trio(
            &entry("Big Mac", 699, Category::Main),
            &entry("Frites", 349, Category::Snack),
            &entry("Coca-Cola", 249, Category::Drink),
        );
        assert_eq!(line.item_names(), vec!["Big Mac", "Frites", "Coca-Cola"]);
    }

    #[test]
    fn test_total_sums_already_rounded_line_prices() {
        let mut cart = Cart::new();
        // Two trios whose raw discounted prices both end in .45 of a cent:
        // each rounds down independently before summation.
        let trio = CartLine::trio(
            &entry("Big Mac", 699, Category::Main),
            &entry("Frites", 349, Category::Snack),
            &entry("Coca-Cola", 249, Category::Drink),
        );
        cart.add_line(trio.clone());
        cart.add_line(trio);
        // 1102 + 1102, not round(2204.90) = 2205
        assert_eq!(cart.total().cents(), 2204);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert!(Cart::new().total().is_zero());
    }

    #[test]
    fn test_remove_line_preserves_order_of_rest() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::simple(&entry("A", 100, Category::Main)));
        cart.add_line(CartLine::simple(&entry("B", 200, Category::Main)));
        cart.add_line(CartLine::simple(&entry("C", 300, Category::Main)));

        let removed = cart.remove_line(1).unwrap();
        assert_eq!(removed.label(), "B");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].label(), "A");
        assert_eq!(cart.lines()[1].label(), "C");
    }

    #[test]
    fn test_remove_line_out_of_range_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        assert!(cart.remove_line(0).is_none());

        cart.add_line(CartLine::simple(&entry("A", 100, Category::Main)));
        assert!(cart.remove_line(1).is_none());
        assert!(cart.remove_line(usize::MAX).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::simple(&entry("A", 100, Category::Main)));
        assert!(!cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut burger = entry("Big Mac", 699, Category::Main);
        let line = CartLine::simple(&burger);
        burger.stock = 0; // stock changes never touch the line
        assert_eq!(line.price().cents(), 699);
    }
}
