//! In-Memory Ledger
//!
//! Implements `LedgerAccessor` over a fixed set of transactions. Counts
//! fetches so callers can observe how much ledger traffic a resolution
//! caused.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cc_01_coloring::LedgerAccessor;
use parking_lot::RwLock;
use shared_types::{LedgerError, Transaction, TxId};

/// Ledger held in memory.
#[derive(Default)]
pub struct InMemoryLedger {
    txs: RwLock<HashMap<TxId, Transaction>>,
    fetches: AtomicUsize,
}

impl InMemoryLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger preloaded with `txs`.
    pub fn with_transactions(txs: impl IntoIterator<Item = Transaction>) -> Self {
        let ledger = Self::new();
        for tx in txs {
            ledger.insert(tx);
        }
        ledger
    }

    /// Add a transaction, returning its id.
    pub fn insert(&self, tx: Transaction) -> TxId {
        let txid = tx.txid();
        self.txs.write().insert(txid, tx);
        txid
    }

    /// Remove a transaction.
    pub fn remove(&self, txid: &TxId) -> Option<Transaction> {
        self.txs.write().remove(txid)
    }

    /// Number of `get_tx` calls served so far, including misses.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Reset the fetch counter.
    pub fn reset_fetch_count(&self) {
        self.fetches.store(0, Ordering::Relaxed);
    }
}

#[async_trait]
impl LedgerAccessor for InMemoryLedger {
    async fn get_tx(&self, txid: TxId) -> Result<Transaction, LedgerError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.txs
            .read()
            .get(&txid)
            .cloned()
            .ok_or(LedgerError::NotFound(txid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{OutPoint, TxIn, TxOut};

    #[tokio::test]
    async fn test_fetch_counting() {
        let tx = Transaction::new(
            vec![TxIn::new(OutPoint::new(TxId([1u8; 32]), 0))],
            vec![TxOut::new(10, vec![])],
        );
        let txid = tx.txid();
        let ledger = InMemoryLedger::with_transactions([tx]);

        assert!(ledger.get_tx(txid).await.is_ok());
        assert_eq!(
            ledger.get_tx(TxId([9u8; 32])).await,
            Err(LedgerError::NotFound(TxId([9u8; 32])))
        );
        assert_eq!(ledger.fetch_count(), 2);

        ledger.reset_fetch_count();
        assert_eq!(ledger.fetch_count(), 0);
        assert!(ledger.remove(&txid).is_some());
    }
}
