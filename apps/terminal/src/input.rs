//! # Input Handling
//!
//! Centralized line-oriented input with robust error handling.
//!
//! ## Error Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  read result        meaning              caller reaction        │
//! │  ─────────────      ─────────────────    ──────────────────     │
//! │  Ok(value)          a usable line        proceed                │
//! │  Err(NotANumber)    line wasn't a        print message,         │
//! │                     whole number         re-show the menu       │
//! │  Err(Eof)           stream closed        unwind the loops,      │
//! │                                          exit cleanly           │
//! │  Err(Io)            broken reader        propagate              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead` so integration tests can script whole
//! sessions through a `Cursor`.

use std::io::BufRead;
use thiserror::Error;

// =============================================================================
// Input Error
// =============================================================================

/// Why a read did not produce a usable value.
#[derive(Debug, Error)]
pub enum InputError {
    /// The line was not a whole number. Recoverable.
    #[error("invalid input: a whole number is expected, got '{0}'")]
    NotANumber(String),

    /// The input stream ended. The caller should unwind and exit.
    #[error("no input available")]
    Eof,

    /// The reader itself failed.
    #[error("input stream error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Input Handler
// =============================================================================

/// Reads lines and integers from any buffered reader.
#[derive(Debug)]
pub struct InputHandler<R> {
    reader: R,
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        InputHandler { reader }
    }

    /// Reads one line, without its trailing newline.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Reads one line and parses it as a whole number.
    pub fn read_int(&mut self) -> Result<i64, InputError> {
        let line = self.read_line()?;
        line.trim()
            .parse()
            .map_err(|_| InputError::NotANumber(line.trim().to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
