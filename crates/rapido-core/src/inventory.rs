//! # Inventory Store
//!
//! An ordered, in-memory collection of catalog entries.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Inventory                                │
//! │                                                                 │
//! │  Reads                      Writes                              │
//! │  ──────────────────────     ──────────────────────────────      │
//! │  list_all (snapshot)        add_entry (append, no dedup)        │
//! │  list_by_category           increase_stock (no-op on miss)      │
//! │  get_by_index               decrease_stock (refuses underflow)  │
//! │  find_by_name (first hit)                                       │
//! │  has_stock / has_stock_for_trio                                 │
//! │                                                                 │
//! │  Invariant: stock >= 0 always. A removal that would break it    │
//! │  is refused, never clamped.                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Gap (kept on purpose)
//! Names are not required to be unique. `find_by_name` and the
//! stock-adjustment operations act on the first match in insertion
//! order; behavior with duplicate names is deliberately unspecified.

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogEntry, Category};

// =============================================================================
// Inventory
// =============================================================================

/// The process-wide inventory store.
///
/// Constructed once at startup and passed by reference to whatever
/// needs it; there is no ambient/static instance.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<CatalogEntry>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            entries: Vec::new(),
        }
    }

    /// Creates an inventory from pre-built entries, insertion order kept.
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Inventory { entries }
    }

    /// Snapshot copy of every entry, in insertion order.
    ///
    /// Insertion order doubles as display/index order for the menu.
    pub fn list_all(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }

    /// Entries of one category, insertion order preserved.
    /// Empty when nothing matches.
    pub fn list_by_category(&self, category: Category) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Bounds-checked positional lookup.
    pub fn get_by_index(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// First entry with an exactly matching name.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Appends an entry. No uniqueness check on the name (known gap).
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Adds `qty` units to the named entry's stock.
    ///
    /// No-op when `qty` is zero or the name is unknown.
    pub fn increase_stock(&mut self, name: &str, qty: u32) {
        if qty == 0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.stock = entry.stock.saturating_add(qty);
        }
    }

    /// Removes `qty` units from the named entry's stock.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` when `qty` is zero
    /// - `ItemNotFound` when no entry matches
    /// - `InsufficientStock` when `stock < qty`; the count is untouched
    pub fn decrease_stock(&mut self, name: &str, qty: u32) -> CoreResult<()> {
        if qty == 0 {
            return Err(crate::error::ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;

        if entry.stock < qty {
            return Err(CoreError::InsufficientStock {
                name: entry.name.clone(),
                available: entry.stock,
                requested: qty,
            });
        }

        entry.stock -= qty;
        Ok(())
    }

    /// Whether the named entry exists and has at least one unit.
    ///
    /// Re-reads through the store so callers holding older references
    /// (cart lines) always see the current count.
    pub fn has_stock(&self, name: &str) -> bool {
        self.find_by_name(name).is_some_and(|e| e.is_in_stock())
    }

    /// Whether all three trio components individually have stock.
    pub fn has_stock_for_trio(&self, main: &str, snack: &str, drink: &str) -> bool {
        self.has_stock(main) && self.has_stock(snack) && self.has_stock(drink)
    }

    /// Settles one unit of the named entry during order commit.
    ///
    /// Trusts a prior validation pass: an entry already at zero is left
    /// at zero, and an unknown name is ignored. Shortage reporting is
    /// the validator's job, not this one's.
    pub(crate) fn settle_one(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.stock = entry.stock.saturating_sub(1);
        }
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn small_inventory() -> Inventory {
        Inventory::with_entries(vec![
            CatalogEntry::new("Big Mac", Money::from_cents(699), 50, Category::Main),
            CatalogEntry::new("Frites", Money::from_cents(349), 100, Category::Snack),
            CatalogEntry::new_drink("Coca-Cola", Money::from_cents(249), 80, "Medium"),
        ])
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let inv = small_inventory();
        let all = inv.list_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Big Mac");
        assert_eq!(all[2].name, "Coca-Cola");
    }

    #[test]
    fn test_list_by_category_filters_in_order() {
        let mut inv = small_inventory();
        inv.add_entry(CatalogEntry::new(
            "McChicken",
            Money::from_cents(599),
            45,
            Category::Main,
        ));

        let mains = inv.list_by_category(Category::Main);
        assert_eq!(mains.len(), 2);
        assert_eq!(mains[0].name, "Big Mac");
        assert_eq!(mains[1].name, "McChicken");

        let drinks = inv.list_by_category(Category::Drink);
        assert_eq!(drinks.len(), 1);
    }

    #[test]
    fn test_get_by_index_bounds_checked() {
        let inv = small_inventory();
        assert_eq!(inv.get_by_index(0).unwrap().name, "Big Mac");
        assert!(inv.get_by_index(3).is_none());
        assert!(inv.get_by_index(usize::MAX).is_none());
    }

    #[test]
    fn test_find_by_name_miss_is_none() {
        let inv = small_inventory();
        assert!(inv.find_by_name("Big Mac").is_some());
        assert!(inv.find_by_name("Whopper").is_none());
        // Exact match only
        assert!(inv.find_by_name("big mac").is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let mut inv = small_inventory();
        inv.add_entry(CatalogEntry::new(
            "Big Mac",
            Money::from_cents(899),
            5,
            Category::Main,
        ));
        // Duplicate names are not rejected; lookups see the first one.
        assert_eq!(inv.find_by_name("Big Mac").unwrap().price.cents(), 699);
    }

    #[test]
    fn test_decrease_then_increase_restores_stock() {
        let mut inv = small_inventory();
        inv.decrease_stock("Big Mac", 7).unwrap();
        assert_eq!(inv.find_by_name("Big Mac").unwrap().stock, 43);
        inv.increase_stock("Big Mac", 7);
        assert_eq!(inv.find_by_name("Big Mac").unwrap().stock, 50);
    }

    #[test]
    fn test_decrease_refuses_underflow_without_mutation() {
        let mut inv = small_inventory();
        let err = inv.decrease_stock("Big Mac", 51).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 50,
                requested: 51,
                ..
            }
        ));
        assert_eq!(inv.find_by_name("Big Mac").unwrap().stock, 50);
    }

    #[test]
    fn test_decrease_rejects_zero_and_unknown() {
        let mut inv = small_inventory();
        assert!(matches!(
            inv.decrease_stock("Big Mac", 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            inv.decrease_stock("Whopper", 1),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_increase_is_noop_on_zero_or_unknown() {
        let mut inv = small_inventory();
        inv.increase_stock("Big Mac", 0);
        inv.increase_stock("Whopper", 10);
        assert_eq!(inv.find_by_name("Big Mac").unwrap().stock, 50);
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_has_stock_re_reads_current_count() {
        let mut inv = small_inventory();
        assert!(inv.has_stock("Coca-Cola"));
        inv.decrease_stock("Coca-Cola", 80).unwrap();
        assert!(!inv.has_stock("Coca-Cola"));
        assert!(!inv.has_stock("Whopper"));
    }

    #[test]
    fn test_has_stock_for_trio_requires_all_three() {
        let mut inv = small_inventory();
        assert!(inv.has_stock_for_trio("Big Mac", "Frites", "Coca-Cola"));
        inv.decrease_stock("Frites", 100).unwrap();
        assert!(!inv.has_stock_for_trio("Big Mac", "Frites", "Coca-Cola"));
    }

    #[test]
    fn test_settle_one_saturates_at_zero() {
        let mut inv = small_inventory();
        inv.decrease_stock("Coca-Cola", 80).unwrap();
        inv.settle_one("Coca-Cola");
        assert_eq!(inv.find_by_name("Coca-Cola").unwrap().stock, 0);
    }
}
