//! # Menu Loop
//!
//! The interactive session: main menu, customer mode, inventory mode.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Menu Loop                                │
//! │                                                                 │
//! │  Main menu ──┬──► Customer mode (cart cleared on entry/exit)    │
//! │              │      view menu / add trio / add item /           │
//! │              │      view cart / remove line / place order       │
//! │              │                                                  │
//! │              ├──► Inventory mode                                │
//! │              │      show stock / add stock / remove stock /     │
//! │              │      add new item                                │
//! │              │                                                  │
//! │              └──► Quit (the only way the process ends)          │
//! │                                                                 │
//! │  Bad input: print a message, re-show the enclosing menu.        │
//! │  EOF: unwind every loop and exit cleanly.                       │
//! │  Domain rejections: print, abort the operation, state intact.   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded and synchronous on purpose: one session at a time,
//! driven entirely by blocking line reads. The inventory store, order
//! processor, and payment processor are constructed once and owned
//! here; nothing is ambient or static.

use std::io::{BufRead, Write};

use chrono::Utc;
use tracing::{debug, info, warn};

use rapido_core::dispatch::{Channel, Dispatcher, Priority};
use rapido_core::validation::{
    validate_category, validate_item_name, validate_price, validate_quantity,
};
use rapido_core::{
    Cart, CartLine, CatalogEntry, Category, Inventory, OrderProcessor, PaymentKind,
    PaymentProcessor, Receipt, Tender,
};

use crate::display;
use crate::error::AppError;
use crate::input::{InputError, InputHandler};

// =============================================================================
// Menu Choice
// =============================================================================

/// What a menu-level read produced.
enum Choice {
    /// A number; the menu decides what it means.
    Value(i64),
    /// Unusable line; message already printed, re-show the menu.
    Retry,
    /// Input stream ended; unwind.
    Quit,
}

/// Converts a 1-based menu selection into a list index.
fn index_for(choice: i64, len: usize) -> Option<usize> {
    if choice >= 1 && (choice as usize) <= len {
        Some(choice as usize - 1)
    } else {
        None
    }
}

// =============================================================================
// App
// =============================================================================

/// The whole interactive application, generic over its streams so
/// tests can script complete sessions.
pub struct App<R, W> {
    input: InputHandler<R>,
    out: W,
    inventory: Inventory,
    cart: Cart,
    orders: OrderProcessor,
    payments: PaymentProcessor,
    /// Announces committed orders on the back-office feed.
    order_feed: Dispatcher,
    /// Raises an alert when a commit drains an entry to zero stock.
    stock_alert: Dispatcher,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Wires up an application over the given inventory and streams.
    pub fn new(inventory: Inventory, reader: R, out: W) -> Self {
        App {
            input: InputHandler::new(reader),
            out,
            inventory,
            cart: Cart::new(),
            orders: OrderProcessor::new(),
            payments: PaymentProcessor::new(),
            order_feed: Dispatcher::new(Priority::Normal, Channel::Slack),
            stock_alert: Dispatcher::new(Priority::Urgent, Channel::Slack),
        }
    }

    /// The inventory store (read access for tests and callers).
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The session cart (read access for tests).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // =========================================================================
    // Main Menu
    // =========================================================================

    /// Runs the menu loop until quit or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "=== RAPIDO POS ===")?;

        loop {
            writeln!(self.out, "\n1. Customer mode")?;
            writeln!(self.out, "2. Inventory mode")?;
            writeln!(self.out, "3. Quit")?;

            match self.menu_choice()? {
                Choice::Quit => break,
                Choice::Retry => continue,
                Choice::Value(1) => self.customer_mode()?,
                Choice::Value(2) => self.inventory_mode()?,
                Choice::Value(3) => break,
                Choice::Value(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                }
            }
        }

        info!("session ended");
        Ok(())
    }

    // =========================================================================
    // Customer Mode
    // =========================================================================

    fn customer_mode(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_line("Name: ")? else {
            return Ok(());
        };
        writeln!(self.out, "Welcome {}", name.trim())?;

        // One cart per customer session.
        self.cart.clear();

        loop {
            writeln!(self.out, "\n1. View menu")?;
            writeln!(self.out, "2. Add TRIO to cart")?;
            writeln!(self.out, "3. Add item to cart")?;
            writeln!(self.out, "4. View cart")?;
            writeln!(self.out, "5. Remove from cart")?;
            writeln!(self.out, "6. Place order")?;
            writeln!(self.out, "7. Back")?;

            match self.menu_choice()? {
                Choice::Quit => break,
                Choice::Retry => continue,
                Choice::Value(1) => {
                    let entries = self.inventory.list_all();
                    display::menu(&mut self.out, &entries)?;
                }
                Choice::Value(2) => self.add_trio()?,
                Choice::Value(3) => self.add_item()?,
                Choice::Value(4) => display::cart_view(&mut self.out, &self.cart)?,
                Choice::Value(5) => self.remove_from_cart()?,
                Choice::Value(6) => self.place_order()?,
                Choice::Value(7) => break,
                Choice::Value(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                }
            }
        }

        // Leaving the session abandons the cart.
        self.cart.clear();
        Ok(())
    }

    /// Assembles a trio from per-category listings.
    fn add_trio(&mut self) -> Result<(), AppError> {
        let mains = self.inventory.list_by_category(Category::Main);
        let snacks = self.inventory.list_by_category(Category::Snack);
        let drinks = self.inventory.list_by_category(Category::Drink);

        display::category_listing(&mut self.out, Category::Main.heading(), &mains)?;
        let Some(main_choice) = self.prompt_int("Choice: ")? else {
            return Ok(());
        };

        display::category_listing(&mut self.out, Category::Snack.heading(), &snacks)?;
        let Some(snack_choice) = self.prompt_int("Choice: ")? else {
            return Ok(());
        };

        display::category_listing(&mut self.out, Category::Drink.heading(), &drinks)?;
        let Some(drink_choice) = self.prompt_int("Choice: ")? else {
            return Ok(());
        };

        let selection = match (
            index_for(main_choice, mains.len()),
            index_for(snack_choice, snacks.len()),
            index_for(drink_choice, drinks.len()),
        ) {
            (Some(m), Some(s), Some(d)) => (&mains[m], &snacks[s], &drinks[d]),
            _ => {
                writeln!(self.out, "ERROR: invalid choice")?;
                return Ok(());
            }
        };

        let (main, snack, drink) = selection;

        // Stock is re-read through the store, not off the listing snapshot.
        if self
            .inventory
            .has_stock_for_trio(&main.name, &snack.name, &drink.name)
        {
            self.cart.add_line(CartLine::trio(main, snack, drink));
            debug!(main = %main.name, snack = %snack.name, drink = %drink.name, "trio added to cart");
            writeln!(self.out, "✓ Trio added to cart!")?;
        } else {
            warn!(main = %main.name, snack = %snack.name, drink = %drink.name, "trio rejected: out of stock");
            writeln!(self.out, "ERROR: insufficient stock for this trio!")?;
        }

        Ok(())
    }

    /// Adds a single menu item as a Simple cart line.
    fn add_item(&mut self) -> Result<(), AppError> {
        let entries = self.inventory.list_all();
        display::menu(&mut self.out, &entries)?;

        let Some(choice) = self.prompt_int("Choice: ")? else {
            return Ok(());
        };

        let entry = match index_for(choice, entries.len()).and_then(|i| self.inventory.get_by_index(i))
        {
            Some(entry) => entry,
            None => {
                writeln!(self.out, "ERROR: invalid choice")?;
                return Ok(());
            }
        };

        if !entry.is_in_stock() {
            writeln!(self.out, "ERROR: no stock left for {}", entry.name)?;
            return Ok(());
        }

        let line = CartLine::simple(entry);
        let name = entry.name.clone();
        self.cart.add_line(line);
        debug!(item = %name, "item added to cart");
        writeln!(self.out, "✓ {} added to cart!", name)?;
        Ok(())
    }

    fn remove_from_cart(&mut self) -> Result<(), AppError> {
        if self.cart.is_empty() {
            writeln!(self.out, "\nCart is empty!")?;
            return Ok(());
        }

        display::cart_view(&mut self.out, &self.cart)?;
        let Some(choice) = self.prompt_int("\nLine to remove (0 to cancel): ")? else {
            return Ok(());
        };

        if choice == 0 {
            return Ok(());
        }

        match index_for(choice, self.cart.len()).and_then(|i| self.cart.remove_line(i)) {
            Some(removed) => {
                writeln!(self.out, "✓ {} removed from cart!", removed.label())?;
            }
            None => {
                writeln!(self.out, "ERROR: invalid choice")?;
            }
        }

        Ok(())
    }

    /// Checkout: validate, take tender, commit, print the receipt.
    fn place_order(&mut self) -> Result<(), AppError> {
        if self.cart.is_empty() {
            writeln!(self.out, "\nCart is empty! Add items first.")?;
            return Ok(());
        }

        let report = self.orders.validate_stock(&self.cart, &self.inventory);
        if !report.all_in_stock() {
            for shortage in &report.shortages {
                writeln!(
                    self.out,
                    "ERROR: insufficient stock for {}",
                    shortage.label
                )?;
            }
            warn!(
                shortages = report.shortages.len(),
                "order rejected: insufficient stock"
            );
            return Ok(());
        }

        let total = self.cart.total();
        writeln!(self.out, "\nPayment method:")?;
        writeln!(self.out, "1. Cash")?;
        writeln!(self.out, "2. Card")?;
        let Some(tender_choice) = self.prompt_int("Choice: ")? else {
            return Ok(());
        };

        let tender = match tender_choice {
            1 => Tender::Cash,
            2 => match self.payments.charge(PaymentKind::CreditCard, total) {
                Ok(record) => Tender::Card {
                    reference: record.reference,
                },
                Err(err) => {
                    warn!(%err, "card payment refused");
                    writeln!(self.out, "ERROR: {}", err)?;
                    return Ok(());
                }
            },
            _ => {
                writeln!(self.out, "ERROR: invalid choice")?;
                return Ok(());
            }
        };

        // Commit trusts the validation that just passed; no re-check.
        self.orders.commit(&self.cart, &mut self.inventory);
        let number = self.orders.next_order_number();
        let receipt = Receipt::from_cart(number, &self.cart, tender, Utc::now());

        display::receipt(&mut self.out, &receipt)?;
        info!(order = number, total = %receipt.total, lines = receipt.lines.len(), "order committed");

        // Back-office feed and zero-stock alerts.
        let feed = self.order_feed.send(
            "#orders",
            &format!("Order #{} placed - total {}", number, receipt.total),
        );
        display::outcome(&mut self.out, &feed)?;

        let mut drained: Vec<String> = Vec::new();
        for line in self.cart.lines() {
            for name in line.item_names() {
                if !self.inventory.has_stock(name) && !drained.iter().any(|d| d == name) {
                    drained.push(name.to_string());
                }
            }
        }
        for name in drained {
            let alert = self
                .stock_alert
                .send("#inventory", &format!("{} is out of stock", name));
            display::outcome(&mut self.out, &alert)?;
            warn!(item = %name, "stock drained to zero");
        }

        self.cart.clear();
        writeln!(self.out, "\n✓ Order placed successfully!")?;
        Ok(())
    }

    // =========================================================================
    // Inventory Mode
    // =========================================================================

    fn inventory_mode(&mut self) -> Result<(), AppError> {
        loop {
            writeln!(self.out, "\n=== INVENTORY ===")?;
            writeln!(self.out, "1. Show inventory")?;
            writeln!(self.out, "2. Add stock")?;
            writeln!(self.out, "3. Remove stock")?;
            writeln!(self.out, "4. Add new item")?;
            writeln!(self.out, "5. Back")?;

            match self.menu_choice()? {
                Choice::Quit => break,
                Choice::Retry => continue,
                Choice::Value(1) => {
                    let entries = self.inventory.list_all();
                    display::inventory_view(&mut self.out, &entries)?;
                }
                Choice::Value(2) => self.add_stock()?,
                Choice::Value(3) => self.remove_stock()?,
                Choice::Value(4) => self.add_new_item()?,
                Choice::Value(5) => break,
                Choice::Value(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                }
            }
        }

        Ok(())
    }

    fn add_stock(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_line("Item name: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();

        if self.inventory.find_by_name(&name).is_none() {
            writeln!(self.out, "Item not found")?;
            return Ok(());
        }

        let Some(raw_qty) = self.prompt_int("Quantity to add: ")? else {
            return Ok(());
        };
        let qty = match validate_quantity(raw_qty) {
            Ok(qty) => qty,
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                return Ok(());
            }
        };

        self.inventory.increase_stock(&name, qty);
        debug!(item = %name, qty, "stock increased");
        writeln!(self.out, "Stock added!")?;
        Ok(())
    }

    fn remove_stock(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_line("Item name: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();

        let Some(raw_qty) = self.prompt_int("Quantity to remove: ")? else {
            return Ok(());
        };
        let qty = match validate_quantity(raw_qty) {
            Ok(qty) => qty,
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                return Ok(());
            }
        };

        match self.inventory.decrease_stock(&name, qty) {
            Ok(()) => {
                debug!(item = %name, qty, "stock decreased");
                writeln!(self.out, "Stock removed!")?;
            }
            Err(err) => {
                warn!(%err, "stock removal refused");
                writeln!(self.out, "ERROR: {}", err)?;
            }
        }

        Ok(())
    }

    fn add_new_item(&mut self) -> Result<(), AppError> {
        let Some(raw_name) = self.prompt_line("Name: ")? else {
            return Ok(());
        };
        let name = match validate_item_name(&raw_name) {
            Ok(name) => name,
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                return Ok(());
            }
        };

        let Some(raw_price) = self.prompt_line("Price: ")? else {
            return Ok(());
        };
        let price = match validate_price(&raw_price) {
            Ok(price) => price,
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                return Ok(());
            }
        };

        let Some(raw_stock) = self.prompt_int("Initial stock: ")? else {
            return Ok(());
        };
        // Zero initial stock is fine; negative is not.
        let stock = match u32::try_from(raw_stock) {
            Ok(stock) => stock,
            Err(_) => {
                writeln!(self.out, "ERROR: initial stock must be a non-negative number")?;
                return Ok(());
            }
        };

        let Some(raw_category) = self.prompt_line("Category (main/snack/drink): ")? else {
            return Ok(());
        };
        let category = match validate_category(&raw_category) {
            Ok(category) => category,
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                return Ok(());
            }
        };

        let entry = if category == Category::Drink {
            let Some(size) = self.prompt_line("Size: ")? else {
                return Ok(());
            };
            CatalogEntry::new_drink(name, price, stock, size.trim())
        } else {
            CatalogEntry::new(name, price, stock, category)
        };

        info!(item = %entry.name, %category, stock, "catalog entry added");
        self.inventory.add_entry(entry);
        writeln!(self.out, "Item added!")?;
        Ok(())
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// Writes a prompt without a trailing newline.
    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Menu-level read: retry on bad input, quit on EOF.
    fn menu_choice(&mut self) -> Result<Choice, AppError> {
        self.prompt("Choice: ")?;
        match self.input.read_int() {
            Ok(n) => Ok(Choice::Value(n)),
            Err(InputError::Eof) => Ok(Choice::Quit),
            Err(InputError::Io(err)) => Err(err.into()),
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                Ok(Choice::Retry)
            }
        }
    }

    /// Operation-level read: any unusable input aborts the operation
    /// (`None`); the enclosing menu is re-shown by the caller's loop.
    fn prompt_int(&mut self, text: &str) -> Result<Option<i64>, AppError> {
        self.prompt(text)?;
        match self.input.read_int() {
            Ok(n) => Ok(Some(n)),
            Err(InputError::Eof) => Ok(None),
            Err(InputError::Io(err)) => Err(err.into()),
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                Ok(None)
            }
        }
    }

    /// Operation-level line read; EOF aborts the operation.
    fn prompt_line(&mut self, text: &str) -> Result<Option<String>, AppError> {
        self.prompt(text)?;
        match self.input.read_line() {
            Ok(line) => Ok(Some(line)),
            Err(InputError::Eof) => Ok(None),
            Err(InputError::Io(err)) => Err(err.into()),
            Err(err) => {
                writeln!(self.out, "ERROR: {}", err)?;
                Ok(None)
            }
        }
    }
}
