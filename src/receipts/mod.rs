//! Receipt intake, scoring, and lookup.
//!
//! A receipt arrives as JSON, is validated field by field, scored exactly once
//! by the pure rule engine, and stored under a freshly generated identifier.
//! Lookups return the stored score; they never re-run the engine and never
//! fall back to a synthesized receipt when the identifier is unknown.

pub mod money;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validate;

pub use money::{parse_amount, AmountError, Cents, MAX_AMOUNT_CENTS};
pub use router::receipt_router;
pub use scoring::{score, RuleAward};
pub use service::{ReceiptError, ReceiptService};
pub use store::{InMemoryReceiptStore, ReceiptStore, ScoredReceipt, StoreError};
pub use validate::{validate, ValidatedItem, ValidatedReceipt, ValidationError};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for accepted receipts.
///
/// Generated once per accepted submission from 122 bits of OS entropy, so
/// collisions are negligible over a process lifetime and identifiers cannot
/// be guessed from prior ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single line item on a submitted receipt, immutable once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    /// Decimal string with exactly two fraction digits, e.g. `"6.49"`.
    pub price: String,
}

/// Purchase receipt as submitted on the wire.
///
/// Amount and date fields stay in their string form here; [`validate`] turns
/// them into typed values before any scoring happens. `total` is not required
/// to equal the sum of item prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub purchase_date: String,
    /// 24-hour clock time in `HH:MM` form.
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}
