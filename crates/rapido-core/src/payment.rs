//! # Payment Processing
//!
//! Gateway routing for card-style payments.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Payment Processing                          │
//! │                                                                 │
//! │  PaymentKind ──► PaymentProcessor::charge ──► PaymentRecord     │
//! │                        │                                        │
//! │                        ▼                                        │
//! │            first Gateway where supports(kind)                   │
//! │            ┌──────────┬──────────┐                              │
//! │            │  Stripe  │  Paypal  │   (tagged union, not a       │
//! │            └──────────┴──────────┘    class per combination)    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! References are deterministic (`STR-000001`, `PP-000002`, …) from a
//! per-processor sequence; no wall-clock reads in pure code.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Payment Kind
// =============================================================================

/// What the customer pays with, gateway-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    CreditCard,
    BankTransfer,
    PaypalWallet,
    Crypto,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentKind::CreditCard => "credit card",
            PaymentKind::BankTransfer => "bank transfer",
            PaymentKind::PaypalWallet => "PayPal wallet",
            PaymentKind::Crypto => "crypto",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Gateway
// =============================================================================

/// A payment gateway variant.
///
/// One enum instead of one type per gateway: adding a gateway is a new
/// variant plus two match arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gateway {
    Stripe,
    Paypal,
}

impl Gateway {
    /// Whether this gateway can process the given kind.
    pub fn supports(&self, kind: PaymentKind) -> bool {
        match self {
            Gateway::Stripe => matches!(kind, PaymentKind::CreditCard | PaymentKind::BankTransfer),
            Gateway::Paypal => matches!(
                kind,
                PaymentKind::CreditCard | PaymentKind::PaypalWallet | PaymentKind::Crypto
            ),
        }
    }

    /// Reference prefix used in transaction ids.
    fn reference_prefix(&self) -> &'static str {
        match self {
            Gateway::Stripe => "STR",
            Gateway::Paypal => "PP",
        }
    }
}

// =============================================================================
// Payment Record & Tender
// =============================================================================

/// A settled gateway charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub gateway: Gateway,
    pub kind: PaymentKind,
    pub amount: Money,
    /// Gateway-prefixed transaction reference, e.g. `STR-000001`.
    pub reference: String,
}

/// How an order was paid, as shown on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tender {
    /// Physical cash at the counter; no gateway involved.
    Cash,
    /// Card charged through a gateway.
    Card { reference: String },
}

impl fmt::Display for Tender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tender::Cash => write!(f, "CASH"),
            Tender::Card { reference } => write!(f, "CARD ({})", reference),
        }
    }
}

// =============================================================================
// Payment Processor
// =============================================================================

/// Routes charges to the first gateway that supports the payment kind.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    gateways: Vec<Gateway>,
    sequence: u64,
}

impl PaymentProcessor {
    /// A processor with the default gateway order: Stripe, then PayPal.
    pub fn new() -> Self {
        PaymentProcessor {
            gateways: vec![Gateway::Stripe, Gateway::Paypal],
            sequence: 0,
        }
    }

    /// A processor with an explicit gateway priority order.
    pub fn with_gateways(gateways: Vec<Gateway>) -> Self {
        PaymentProcessor {
            gateways,
            sequence: 0,
        }
    }

    /// Charges `amount` using the given payment kind.
    ///
    /// Routing picks the first configured gateway whose `supports`
    /// check passes; an unsupported kind is a typed error, not a panic.
    pub fn charge(&mut self, kind: PaymentKind, amount: Money) -> CoreResult<PaymentRecord> {
        let gateway = self
            .gateways
            .iter()
            .copied()
            .find(|g| g.supports(kind))
            .ok_or_else(|| CoreError::UnsupportedPayment(kind.to_string()))?;

        self.sequence += 1;
        Ok(PaymentRecord {
            gateway,
            kind,
            amount,
            reference: format!("{}-{:06}", gateway.reference_prefix(), self.sequence),
        })
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
