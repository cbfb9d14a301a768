//! In-Memory Color Data Store
//!
//! Implements `ColorDataStore` over a `HashMap` behind one `RwLock`, so
//! compare-and-insert and batch inserts are atomic.

use std::collections::HashMap;

use cc_01_coloring::ColorId;
use parking_lot::RwLock;
use shared_types::TxId;
use tracing::debug;

use crate::domain::{ColorDataRecord, StoreError};
use crate::ports::outbound::ColorDataStore;

type Key = (ColorId, TxId, u32);

/// Color data held in memory.
#[derive(Default)]
pub struct InMemoryColorDataStore {
    records: RwLock<HashMap<Key, i64>>,
}

impl InMemoryColorDataStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check(records: &HashMap<Key, i64>, record: &ColorDataRecord) -> Result<bool, StoreError> {
    match records.get(&record.key()) {
        Some(&existing) if existing == record.value => Ok(false),
        Some(&existing) => Err(StoreError::UniqueConstraint {
            color_id: record.color_id,
            txid: record.txid,
            out_index: record.out_index,
            existing,
            attempted: record.value,
        }),
        None => Ok(true),
    }
}

impl ColorDataStore for InMemoryColorDataStore {
    fn add(&self, record: ColorDataRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        if check(&records, &record)? {
            records.insert(record.key(), record.value);
        }
        Ok(())
    }

    fn add_all(&self, batch: &[ColorDataRecord]) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let mut fresh = Vec::with_capacity(batch.len());
        for record in batch {
            if check(&records, record)? {
                fresh.push(*record);
            }
        }
        for record in &fresh {
            records.insert(record.key(), record.value);
        }
        debug!(
            "[cc-02] Stored {} of {} color records",
            fresh.len(),
            batch.len()
        );
        Ok(())
    }

    fn get(
        &self,
        color_id: ColorId,
        txid: TxId,
        out_index: u32,
    ) -> Result<Option<i64>, StoreError> {
        Ok(self.records.read().get(&(color_id, txid, out_index)).copied())
    }

    fn get_any(&self, txid: TxId, out_index: u32) -> Result<Vec<(ColorId, i64)>, StoreError> {
        let mut found: Vec<(ColorId, i64)> = self
            .records
            .read()
            .iter()
            .filter(|((_, t, o), _)| *t == txid && *o == out_index)
            .map(|((color_id, _, _), value)| (*color_id, *value))
            .collect();
        found.sort_unstable();
        Ok(found)
    }

    fn remove_tx(&self, color_id: ColorId, txid: TxId) -> Result<usize, StoreError> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|(c, t, _), _| !(*c == color_id && *t == txid));
        Ok(before - records.len())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.records.write().clear();
        Ok(())
    }
}
