//! # rapido-core: Pure Business Logic for Rapido POS
//!
//! This crate is the heart of Rapido POS: the ordering/inventory core
//! as pure functions and plain values, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Rapido POS Architecture                      │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                apps/terminal (menu loop)                  │  │
//! │  │   main menu ──► customer mode ──► checkout ──► receipt    │  │
//! │  │             └─► inventory mode                            │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │              ★ rapido-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌──────┐ ┌───────┐ ┌────────┐  │  │
//! │  │  │  money  │ │ inventory │ │ cart │ │ order │ │payment │  │  │
//! │  │  └─────────┘ └───────────┘ └──────┘ └───────┘ └────────┘  │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐   │  │
//! │  │  │  types  │ │ validation│ │  dispatch │ │    seed    │   │  │
//! │  │  └─────────┘ └───────────┘ └───────────┘ └────────────┘   │  │
//! │  │                                                           │  │
//! │  │  NO I/O • NO TERMINAL • NO NETWORK • PURE FUNCTIONS       │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogEntry, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - The ordered in-memory catalog store
//! - [`cart`] - Session cart and line pricing (simple lines, trios)
//! - [`order`] - Stock validation, order commit, order numbering
//! - [`payment`] - Gateway routing for card payments
//! - [`dispatch`] - Priority × channel notification rendering
//! - [`validation`] - Business rule validation
//! - [`seed`] - The embedded default menu
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: terminal, file system, and network access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), no floats
//! 4. **Explicit Errors**: typed errors, never strings or panics; missing
//!    stock at checkout is a reported value, not an error at all
//! 5. **No Globals**: the inventory store and order counter are plain
//!    values constructed once at startup and passed by reference
//!
//! ## Example Usage
//!
//! ```rust
//! use rapido_core::cart::{Cart, CartLine};
//! use rapido_core::inventory::Inventory;
//! use rapido_core::order::OrderProcessor;
//!
//! let mut inventory = Inventory::with_entries(rapido_core::seed::default_menu()?);
//! let mut orders = OrderProcessor::new();
//!
//! let mut cart = Cart::new();
//! cart.add_line(CartLine::trio(
//!     inventory.find_by_name("Big Mac").unwrap(),
//!     inventory.find_by_name("Frites").unwrap(),
//!     inventory.find_by_name("Coca-Cola").unwrap(),
//! ));
//!
//! assert!(orders.validate_stock(&cart, &inventory).all_in_stock());
//! orders.commit(&cart, &mut inventory);
//! assert_eq!(orders.next_order_number(), 1);
//! # Ok::<(), rapido_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod dispatch;
pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod payment;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rapido_core::Money` instead of
// `use rapido_core::money::Money`.

pub use cart::{Cart, CartLine, ItemRef, TRIO_DISCOUNT_BPS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use order::{OrderProcessor, Receipt, Shortage, StockReport};
pub use payment::{Gateway, PaymentKind, PaymentProcessor, PaymentRecord, Tender};
pub use types::{CatalogEntry, Category};
