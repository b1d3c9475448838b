//! End-to-end scripted sessions: a whole menu dialogue in, rendered
//! output and final inventory state out.

use std::io::Cursor;

use rapido_core::{seed, CatalogEntry, Category, Inventory, Money};
use rapido_terminal::App;

/// Runs one scripted session against the given inventory and returns
/// the rendered output plus the final catalog state.
fn run_session(inventory: Inventory, script: &str) -> (String, Vec<CatalogEntry>) {
    let mut out = Vec::new();
    let mut app = App::new(inventory, Cursor::new(script.to_string()), &mut out);
    app.run().expect("session should not fail");
    let entries = app.inventory().list_all();
    drop(app);
    (String::from_utf8(out).unwrap(), entries)
}

fn seeded() -> Inventory {
    Inventory::with_entries(seed::default_menu().unwrap())
}

fn stock_of(entries: &[CatalogEntry], name: &str) -> u32 {
    entries
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entry named {name}"))
        .stock
}

#[test]
fn test_trio_order_paid_cash() {
    // Customer mode, trio Big Mac + Frites + Coca-Cola, cash checkout.
    let script = "1\nAlice\n2\n1\n1\n1\n6\n1\n7\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("Welcome Alice"));
    assert!(out.contains("✓ Trio added to cart!"));
    assert!(out.contains("Order #1"));
    // 699 + 349 + 249 = 1297, 15% off rounded half-up = 1102.
    assert!(out.contains("TOTAL: $11.02"));
    assert!(out.contains("Paid: CASH"));
    assert!(out.contains("Order #1 placed - total $11.02"));

    assert_eq!(stock_of(&entries, "Big Mac"), 49);
    assert_eq!(stock_of(&entries, "Frites"), 99);
    assert_eq!(stock_of(&entries, "Coca-Cola"), 79);
}

#[test]
fn test_simple_order_paid_by_card() {
    // Add Big Mac as a plain item, pay by card.
    let script = "1\nBob\n3\n1\n6\n2\n7\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("✓ Big Mac added to cart!"));
    assert!(out.contains("TOTAL: $6.99"));
    assert!(out.contains("Paid: CARD (STR-000001)"));
    assert_eq!(stock_of(&entries, "Big Mac"), 49);
}

#[test]
fn test_zero_stock_item_is_rejected() {
    let inventory = Inventory::with_entries(vec![
        CatalogEntry::new("Big Mac", Money::from_cents(699), 0, Category::Main),
        CatalogEntry::new("Frites", Money::from_cents(349), 10, Category::Snack),
    ]);

    // Try to add the drained item, view the cart, leave.
    let script = "1\nCarol\n3\n1\n4\n7\n3\n";
    let (out, entries) = run_session(inventory, script);

    assert!(out.contains("ERROR: no stock left for Big Mac"));
    assert!(out.contains("Cart is empty!"));
    assert_eq!(stock_of(&entries, "Big Mac"), 0);
}

#[test]
fn test_draining_last_unit_raises_stock_alert() {
    let inventory = Inventory::with_entries(vec![
        CatalogEntry::new("Big Mac", Money::from_cents(699), 1, Category::Main),
    ]);

    let script = "1\nDan\n3\n1\n6\n1\n7\n3\n";
    let (out, entries) = run_session(inventory, script);

    assert!(out.contains("=== URGENT SLACK ==="));
    assert!(out.contains(":rotating_light: Big Mac is out of stock"));
    assert_eq!(stock_of(&entries, "Big Mac"), 0);
}

#[test]
fn test_invalid_menu_input_recovers() {
    // Garbage at the main menu, then a clean quit.
    let script = "abc\n3\n";
    let (out, _) = run_session(seeded(), script);

    assert!(out.contains("invalid input"));
    // The menu is shown again after the bad line.
    assert!(out.matches("1. Customer mode").count() >= 2);
}

#[test]
fn test_eof_ends_session_cleanly() {
    let (out, _) = run_session(seeded(), "");
    assert!(out.contains("=== RAPIDO POS ==="));
}

#[test]
fn test_restock_flow() {
    // Inventory mode: add 10 units to Big Mac, show stock, leave.
    let script = "2\n2\nBig Mac\n10\n1\n5\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("Stock added!"));
    assert!(out.contains("Big Mac: 60 units ($6.99)"));
    assert_eq!(stock_of(&entries, "Big Mac"), 60);
}

#[test]
fn test_remove_stock_refused_when_insufficient() {
    let script = "2\n3\nBig Mac\n999\n5\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("ERROR: Insufficient stock for Big Mac"));
    // Refusal leaves the count untouched.
    assert_eq!(stock_of(&entries, "Big Mac"), 50);
}

#[test]
fn test_add_new_drink_prompts_for_size() {
    let script = "2\n4\nFanta\n2.79\n30\ndrink\nLarge\n5\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("Item added!"));
    let fanta = entries.iter().find(|e| e.name == "Fanta").unwrap();
    assert_eq!(fanta.price, Money::from_cents(279));
    assert_eq!(fanta.stock, 30);
    assert_eq!(fanta.category, Category::Drink);
    assert_eq!(fanta.size.as_deref(), Some("Large"));
}

#[test]
fn test_add_new_item_rejects_bad_price() {
    let script = "2\n4\nMystery\nfree\n5\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("ERROR:"));
    assert!(entries.iter().all(|e| e.name != "Mystery"));
}

#[test]
fn test_removing_trio_line_from_cart() {
    // Build a trio, remove it, confirm the cart is empty again.
    let script = "1\nEve\n2\n1\n1\n1\n5\n1\n4\n7\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("removed from cart!"));
    assert!(out.contains("Cart is empty!"));
    // Nothing was committed.
    assert_eq!(stock_of(&entries, "Big Mac"), 50);
}

#[test]
fn test_order_numbers_increment_across_orders() {
    // Two single-item cash orders in one customer session.
    let script = "1\nFrank\n3\n1\n6\n1\n3\n1\n6\n1\n7\n3\n";
    let (out, entries) = run_session(seeded(), script);

    assert!(out.contains("Order #1"));
    assert!(out.contains("Order #2"));
    assert_eq!(stock_of(&entries, "Big Mac"), 48);
}
