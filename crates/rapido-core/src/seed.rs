//! # Seed Menu
//!
//! The default catalog, embedded as a JSON asset and parsed at startup.
//! In-memory only; it is re-created on every process start.

use crate::error::CoreResult;
use crate::types::CatalogEntry;

/// The embedded seed asset: three mains, two snacks, two sized drinks.
const SEED_MENU: &str = include_str!("../data/seed_menu.json");

/// Parses the embedded seed menu into catalog entries, in menu order.
pub fn default_menu() -> CoreResult<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(SEED_MENU)?;
    Ok(entries)
}

// =============================================================================
// Unit Tests
// =============================================================================
