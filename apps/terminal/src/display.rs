//! # Display Rendering
//!
//! Formats menus, carts, inventory views, and receipts onto any
//! writer. Pure formatting; no decisions are made here.
//!
//! ## Shapes (per the core's display contract)
//! - Menu/inventory rows: `(index, name, price, stock)`
//! - Cart rows: `(index, label, price)` plus a total line
//! - Receipt: order number, lines, total, tender, timestamp

use std::io::{self, Write};

use rapido_core::dispatch::Outcome;
use rapido_core::{Cart, CatalogEntry, Receipt};

/// The full menu: one `(index, name, price, stock)` row per entry.
pub fn menu<W: Write>(out: &mut W, entries: &[CatalogEntry]) -> io::Result<()> {
    writeln!(out, "\n=== MENU ===")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {} (stock: {})",
            i + 1,
            entry.name,
            entry.price,
            entry.stock
        )?;
    }
    Ok(())
}

/// A per-category listing used while assembling a trio: `(index, name, price)`.
pub fn category_listing<W: Write>(
    out: &mut W,
    heading: &str,
    entries: &[CatalogEntry],
) -> io::Result<()> {
    writeln!(out, "\n{}:", heading)?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {} - {}", i + 1, entry.name, entry.price)?;
    }
    Ok(())
}

/// The cart: `(index, label, price)` rows plus a total line.
pub fn cart_view<W: Write>(out: &mut W, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        writeln!(out, "\nCart is empty!")?;
        return Ok(());
    }

    writeln!(out, "\n=== YOUR CART ===")?;
    for (i, line) in cart.lines().iter().enumerate() {
        writeln!(out, "{}. {} - {}", i + 1, line.label(), line.price())?;
    }
    writeln!(out, "--------------------")?;
    writeln!(out, "TOTAL: {}", cart.total())?;
    Ok(())
}

/// The stock view for inventory mode.
pub fn inventory_view<W: Write>(out: &mut W, entries: &[CatalogEntry]) -> io::Result<()> {
    writeln!(out, "\n--- CURRENT STOCK ---")?;
    for entry in entries {
        writeln!(
            out,
            "{}: {} units ({})",
            entry.name, entry.stock, entry.price
        )?;
    }
    Ok(())
}

/// The receipt block printed after a committed order.
pub fn receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    writeln!(out, "\n======== RECEIPT ========")?;
    writeln!(out, "Order #{}", receipt.order_number)?;
    writeln!(out, "{}", receipt.placed_at.format("%Y-%m-%d %H:%M UTC"))?;
    for (label, price) in &receipt.lines {
        writeln!(out, "{} - {}", label, price)?;
    }
    writeln!(out, "-------------------------")?;
    writeln!(out, "TOTAL: {}", receipt.total)?;
    writeln!(out, "Paid: {}", receipt.tender)?;
    writeln!(out, "=========================")?;
    Ok(())
}

/// A rendered notification outcome.
pub fn outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out)?;
    for line in &outcome.rendered {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rapido_core::{CartLine, Category, Money};

    fn entry(name: &str, cents: i64, stock: u32) -> CatalogEntry {
        CatalogEntry::new(name, Money::from_cents(cents), stock, Category::Main)
    }

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_rows() {
        let out = rendered(|buf| menu(buf, &[entry("Big Mac", 699, 50)]));
        assert!(out.contains("=== MENU ==="));
        assert!(out.contains("1. Big Mac - $6.99 (stock: 50)"));
    }

    #[test]
    fn test_cart_view_with_total() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::simple(&entry("Big Mac", 699, 50)));
        cart.add_line(CartLine::simple(&entry("Frites", 349, 100)));

        let out = rendered(|buf| cart_view(buf, &cart));
        assert!(out.contains("1. Big Mac - $6.99"));
        assert!(out.contains("2. Frites - $3.49"));
        assert!(out.contains("TOTAL: $10.48"));
    }

    #[test]
    fn test_empty_cart_view() {
        let out = rendered(|buf| cart_view(buf, &Cart::new()));
        assert!(out.contains("Cart is empty!"));
    }
}
