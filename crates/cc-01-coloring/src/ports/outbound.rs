//! # Outbound Ports
//!
//! Dependencies of the coloring layer: ledger access and the color map
//! (descriptor to local id) store.

use async_trait::async_trait;
use shared_types::{LedgerError, Transaction, TxId, TxIn};
use thiserror::Error;

use crate::domain::{ColorId, ColoringError};

/// Read access to ledger transactions.
///
/// Implementations may block on network or disk; callers sequence requests
/// and may cancel by dropping the future.
#[async_trait]
pub trait LedgerAccessor: Send + Sync {
    /// Fetch a transaction. Fails with [`LedgerError::NotFound`] if unknown.
    async fn get_tx(&self, txid: TxId) -> Result<Transaction, LedgerError>;

    /// Value of the output spent by `input`.
    async fn get_previous_output_value(&self, input: &TxIn) -> Result<u64, LedgerError> {
        let outpoint = input.previous_output;
        let prev = self.get_tx(outpoint.txid).await?;
        prev.outputs
            .get(outpoint.vout as usize)
            .map(|out| out.value)
            .ok_or(LedgerError::OutputNotFound {
                txid: outpoint.txid,
                vout: outpoint.vout,
            })
    }
}

/// Persistent mapping between color descriptors and local color ids.
///
/// Ids are allocated from 1 upwards; 0 and -1 are reserved.
pub trait ColorMapStore: Send + Sync {
    /// Look up the id for `desc`, allocating one when `auto_add` is set.
    fn resolve(&self, desc: &str, auto_add: bool) -> Result<Option<ColorId>, ColorMapError>;

    /// Descriptor registered under `color_id`.
    fn descriptor_of(&self, color_id: ColorId) -> Result<Option<String>, ColorMapError>;

    /// All registered `(color_id, descriptor)` pairs, ordered by id.
    fn entries(&self) -> Result<Vec<(ColorId, String)>, ColorMapError>;
}

/// Color map storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorMapError {
    /// Backend I/O failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Id space exhausted.
    #[error("Color id space exhausted")]
    Exhausted,
}

impl From<ColorMapError> for ColoringError {
    fn from(err: ColorMapError) -> Self {
        ColoringError::ColorMap(err.to_string())
    }
}

/// In-memory ledger for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MockLedger {
    txs: parking_lot::RwLock<std::collections::HashMap<TxId, Transaction>>,
}

#[cfg(test)]
impl MockLedger {
    pub(crate) fn with_transactions(txs: impl IntoIterator<Item = Transaction>) -> Self {
        let ledger = Self::default();
        for tx in txs {
            ledger.insert(tx);
        }
        ledger
    }

    pub(crate) fn insert(&self, tx: Transaction) -> TxId {
        let txid = tx.txid();
        self.txs.write().insert(txid, tx);
        txid
    }
}

#[cfg(test)]
#[async_trait]
impl LedgerAccessor for MockLedger {
    async fn get_tx(&self, txid: TxId) -> Result<Transaction, LedgerError> {
        self.txs
            .read()
            .get(&txid)
            .cloned()
            .ok_or(LedgerError::NotFound(txid))
    }
}
