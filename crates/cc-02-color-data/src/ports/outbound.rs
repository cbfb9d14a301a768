//! # Outbound Ports
//!
//! Storage contract for memoized color values. Ledger access reuses
//! [`cc_01_coloring::LedgerAccessor`].

use cc_01_coloring::ColorId;
use shared_types::TxId;

use crate::domain::{ColorDataRecord, StoreError};

pub use cc_01_coloring::LedgerAccessor;

/// Persistent color data store.
///
/// `add` must be safe under concurrent calls for the same key: identical
/// values are a no-op, different values fail with
/// [`StoreError::UniqueConstraint`].
pub trait ColorDataStore: Send + Sync {
    /// Store one record.
    fn add(&self, record: ColorDataRecord) -> Result<(), StoreError>;

    /// Store several records; either all are stored or none.
    ///
    /// The default implementation is only atomic if no other writer touches
    /// the same keys concurrently.
    fn add_all(&self, records: &[ColorDataRecord]) -> Result<(), StoreError> {
        for record in records {
            if let Some(existing) = self.get(record.color_id, record.txid, record.out_index)? {
                if existing != record.value {
                    return Err(StoreError::UniqueConstraint {
                        color_id: record.color_id,
                        txid: record.txid,
                        out_index: record.out_index,
                        existing,
                        attempted: record.value,
                    });
                }
            }
        }
        records.iter().try_for_each(|record| self.add(*record))
    }

    /// Stored value for one output and color.
    fn get(&self, color_id: ColorId, txid: TxId, out_index: u32)
        -> Result<Option<i64>, StoreError>;

    /// Every `(color_id, value)` stored for an output.
    fn get_any(&self, txid: TxId, out_index: u32) -> Result<Vec<(ColorId, i64)>, StoreError>;

    /// Drop every record of `color_id` on `txid`. Returns how many were removed.
    fn remove_tx(&self, color_id: ColorId, txid: TxId) -> Result<usize, StoreError>;

    /// Drop everything.
    fn clear(&self) -> Result<(), StoreError>;
}
