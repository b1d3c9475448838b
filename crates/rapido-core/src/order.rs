//! # Order Processing
//!
//! Validates a cart against the inventory, settles stock, and numbers
//! orders.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                             │
//! │                                                                 │
//! │  validate_stock(cart, &inventory) ──► StockReport               │
//! │        │                                                        │
//! │        ├── shortages? ──► caller displays them, aborts          │
//! │        │                                                        │
//! │        ▼ all_in_stock                                           │
//! │  commit(cart, &mut inventory)   1 unit per referenced entry     │
//! │        │                                                        │
//! │        ▼                                                        │
//! │  next_order_number()            1, 2, 3, … for the process      │
//! │        │                        lifetime                        │
//! │        ▼                                                        │
//! │  Receipt                                                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Inherited Fragility (kept on purpose)
//! `commit` trusts the caller's immediately-preceding successful
//! `validate_stock`; it does NOT re-check at commit time. The caller
//! must not interleave other inventory mutations between the two
//! calls. In this single-threaded design that interleaving cannot
//! happen, but the contract states it rather than silently fixing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::inventory::Inventory;
use crate::money::Money;
use crate::payment::Tender;

// =============================================================================
// Stock Report
// =============================================================================

/// One cart line that cannot be fulfilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortage {
    /// Position of the failing line in the cart (0-based).
    pub line_index: usize,

    /// The line's display label.
    pub label: String,

    /// The referenced entry names that are out of stock. For a trio
    /// any one of the three components failing fails the whole line.
    pub missing: Vec<String>,
}

/// Outcome of a stock validation pass.
///
/// The report is how shortages reach the caller's display layer;
/// absence of stock is a normal business outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockReport {
    pub shortages: Vec<Shortage>,
}

impl StockReport {
    /// True only when every line passed.
    pub fn all_in_stock(&self) -> bool {
        self.shortages.is_empty()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// What the customer walks away with: built at commit time from the
/// cart, since orders themselves are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_number: u64,
    /// `(label, price)` per cart line, in cart order.
    pub lines: Vec<(String, Money)>,
    pub total: Money,
    pub tender: Tender,
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    /// Snapshots the cart into a receipt.
    pub fn from_cart(order_number: u64, cart: &Cart, tender: Tender, placed_at: DateTime<Utc>) -> Self {
        Receipt {
            order_number,
            lines: cart
                .lines()
                .iter()
                .map(|line| (line.label(), line.price()))
                .collect(),
            total: cart.total(),
            tender,
            placed_at,
        }
    }
}

// =============================================================================
// Order Processor
// =============================================================================

/// Validates and settles orders; owns the order-number counter.
///
/// Constructed once at process start and passed by reference wherever
/// needed (no ambient/static instance). The counter starts at 1 and is
/// monotonic for the process lifetime; nothing persists across restarts.
#[derive(Debug)]
pub struct OrderProcessor {
    next_number: u64,
}

impl OrderProcessor {
    /// A processor whose first order will be number 1.
    pub fn new() -> Self {
        OrderProcessor { next_number: 1 }
    }

    /// Checks that every cart line can be fulfilled. Pure read.
    ///
    /// A Simple line needs its one referenced entry in stock; a Trio
    /// line needs all three. Every failing line appears in the report
    /// with the names that are short.
    pub fn validate_stock(&self, cart: &Cart, inventory: &Inventory) -> StockReport {
        let mut report = StockReport::default();

        for (line_index, line) in cart.lines().iter().enumerate() {
            let missing: Vec<String> = line
                .item_names()
                .into_iter()
                .filter(|name| !inventory.has_stock(name))
                .map(str::to_string)
                .collect();

            if !missing.is_empty() {
                report.shortages.push(Shortage {
                    line_index,
                    label: line.label(),
                    missing,
                });
            }
        }

        report
    }

    /// Settles the order: one unit off every entry referenced by every
    /// line (a Trio settles all three components).
    ///
    /// ## Precondition
    /// The caller has just called [`Self::validate_stock`] on the same
    /// cart and inventory and got an all-clear. The decrement is
    /// unconditional after validation; there is no re-check and no
    /// rollback.
    pub fn commit(&self, cart: &Cart, inventory: &mut Inventory) {
        for line in cart.lines() {
            for name in line.item_names() {
                inventory.settle_one(name);
            }
        }
    }

    /// Returns the current order number, then increments the counter.
    pub fn next_order_number(&mut self) -> u64 {
        let number = self.next_number;
        self.next_number += 1;
        number
    }
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
