//! Service composing the validator, rule engine, ID generation, and store.

use std::sync::Arc;

use tracing::debug;

use super::scoring;
use super::store::{ReceiptStore, ScoredReceipt, StoreError};
use super::validate::{validate, ValidationError};
use super::{Receipt, ReceiptId};

/// Orchestrates the two-step process-then-query protocol.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

impl<S> ReceiptService<S>
where
    S: ReceiptStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate, score once, and store a submitted receipt.
    ///
    /// Either a fully scored receipt is stored under the returned identifier
    /// or nothing is stored at all; the engine never partially applies.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        let validated = validate(&receipt)?;
        let points = scoring::score(&validated);
        let id = ReceiptId::generate();

        self.store.insert(id.clone(), ScoredReceipt { receipt, points })?;
        debug!(%id, points, "receipt accepted");

        Ok(id)
    }

    /// Return the cached score for a previously processed receipt.
    ///
    /// Never re-scores and never substitutes a default receipt: an unknown
    /// identifier is reported as [`ReceiptError::NotFound`].
    pub fn points(&self, id: &ReceiptId) -> Result<u32, ReceiptError> {
        self.store
            .get(id)
            .map(|scored| scored.points)
            .ok_or_else(|| ReceiptError::NotFound(id.clone()))
    }
}

/// Failures surfaced by receipt processing and lookup.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no receipt found for id '{0}'")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
