//! Storage for scored receipts.
//!
//! The store is the only shared mutable state in the service. The trait seam
//! lets the service module be exercised in isolation; the in-memory
//! implementation lives for the process lifetime only, which is a stated
//! limitation of the system rather than a defect.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{Receipt, ReceiptId};

/// A receipt together with the points computed for it at acceptance time.
///
/// Never mutated and never re-scored; lookups return this cached value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: u32,
}

/// Storage abstraction for accepted receipts.
///
/// Inserts must be atomic: a concurrent lookup observes either the complete
/// entry or nothing, never a partially constructed one.
pub trait ReceiptStore: Send + Sync {
    fn insert(&self, id: ReceiptId, scored: ScoredReceipt) -> Result<(), StoreError>;
    fn get(&self, id: &ReceiptId) -> Option<ScoredReceipt>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("a receipt with this id already exists")]
    Conflict,
}

/// Process-local store backed by a read-write lock over a hash map.
///
/// Writers are exclusive and readers are concurrent, so a points request
/// issued after a process response always observes the inserted entry.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    entries: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, id: ReceiptId, scored: ScoredReceipt) -> Result<(), StoreError> {
        let mut guard = self.entries.write().expect("receipt store lock poisoned");
        if guard.contains_key(&id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(id, scored);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Option<ScoredReceipt> {
        let guard = self.entries.read().expect("receipt store lock poisoned");
        guard.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipts::Item;
    use std::sync::Arc;

    fn sample_scored(points: u32) -> ScoredReceipt {
        ScoredReceipt {
            receipt: Receipt {
                retailer: "Target".to_string(),
                purchase_date: "2022-01-01".to_string(),
                purchase_time: "13:01".to_string(),
                items: vec![Item {
                    short_description: "Mountain Dew 12PK".to_string(),
                    price: "6.49".to_string(),
                }],
                total: "6.49".to_string(),
            },
            points,
        }
    }

    #[test]
    fn lookup_returns_inserted_entry() {
        let store = InMemoryReceiptStore::default();
        let id = ReceiptId::generate();
        store
            .insert(id.clone(), sample_scored(28))
            .expect("insert succeeds");

        let found = store.get(&id).expect("entry visible after insert");
        assert_eq!(found.points, 28);
    }

    #[test]
    fn unknown_id_yields_nothing() {
        let store = InMemoryReceiptStore::default();
        assert_eq!(store.get(&ReceiptId::generate()), None);
    }

    #[test]
    fn duplicate_insert_is_a_conflict() {
        let store = InMemoryReceiptStore::default();
        let id = ReceiptId::generate();
        store
            .insert(id.clone(), sample_scored(28))
            .expect("first insert succeeds");

        let err = store
            .insert(id.clone(), sample_scored(99))
            .expect_err("second insert conflicts");
        assert_eq!(err, StoreError::Conflict);

        let kept = store.get(&id).expect("original entry intact");
        assert_eq!(kept.points, 28, "conflict must not overwrite");
    }

    #[test]
    fn concurrent_inserts_are_all_visible() {
        let store = Arc::new(InMemoryReceiptStore::default());
        let mut handles = Vec::new();

        for points in 0..16 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let id = ReceiptId::generate();
                store
                    .insert(id.clone(), sample_scored(points))
                    .expect("insert succeeds");
                // Read-after-write from the same worker must hit.
                let found = store.get(&id).expect("entry visible immediately");
                assert_eq!(found.points, points);
            }));
        }

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }
}
