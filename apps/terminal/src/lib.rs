//! # Rapido Terminal
//!
//! The console front end for Rapido POS: a line-oriented menu loop
//! over the pure business core.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      rapido-terminal                            │
//! │                                                                 │
//! │   stdin ──► input::InputHandler ──► app::App ──► display ──►    │
//! │                                        │              stdout    │
//! │                                        ▼                        │
//! │                                  rapido-core                    │
//! │                      (inventory, cart, orders, payments)        │
//! │                                                                 │
//! │   tracing events ──────────────────────────────────► stderr     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stdout belongs to the menu UI; diagnostics go to stderr so piping
//! a scripted session produces clean output.

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rapido_core::{seed, Inventory};

pub mod app;
pub mod display;
pub mod error;
pub mod input;

pub use app::App;
pub use error::AppError;

/// Builds the seeded application over the real stdio streams and runs
/// it to completion.
pub fn run() -> Result<(), AppError> {
    init_tracing();
    info!("starting rapido pos");

    let inventory = Inventory::with_entries(seed::default_menu()?);
    let mut app = App::new(inventory, io::stdin().lock(), io::stdout().lock());
    app.run()
}

/// `RUST_LOG` controls verbosity; defaults keep our crates chatty and
/// everything else quiet.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rapido=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
