//! # App Error Type
//!
//! What the menu loop propagates when something genuinely fails.
//!
//! Almost nothing in the app is fatal: bad input re-shows the menu and
//! domain rejections are printed and forgotten. The only errors that
//! travel up through `run` are broken output streams and a corrupt
//! embedded seed menu at startup.

use rapido_core::CoreError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The output stream failed; nothing sensible left to do.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A core failure that escaped the per-operation handling
    /// (in practice: the seed menu failing to parse at startup).
    #[error(transparent)]
    Core(#[from] CoreError),
}
