//! # Previous Transactions
//!
//! The affecting-inputs walk needs, for every input, the value of the spent
//! output and the tag of the transaction that created it. Those transactions
//! are fetched once up front so the kernel itself stays synchronous.

use std::collections::HashMap;

use shared_types::{Transaction, TxId, TxIn};
use tracing::debug;

use crate::domain::{ColoringError, Tag};
use crate::ports::LedgerAccessor;

/// Previous transactions of a transaction's inputs, keyed by txid.
#[derive(Debug, Clone, Default)]
pub struct PreviousTransactions {
    txs: HashMap<TxId, Transaction>,
}

impl PreviousTransactions {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction.
    pub fn insert(&mut self, tx: Transaction) {
        self.txs.insert(tx.txid(), tx);
    }

    /// Look up a transaction.
    pub fn get(&self, txid: &TxId) -> Option<&Transaction> {
        self.txs.get(txid)
    }

    /// Whether `txid` is loaded.
    pub fn contains(&self, txid: &TxId) -> bool {
        self.txs.contains_key(txid)
    }

    /// Number of loaded transactions.
    pub fn len(&self) -> usize {
        self.txs.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// Value and tag of the output spent by `input`.
    ///
    /// `Ok(None)` when the input spends the null outpoint or its previous
    /// transaction carries no tag: coloring provenance ends there.
    pub fn tagged_input(&self, input: &TxIn) -> Result<Option<(u64, Tag)>, ColoringError> {
        let outpoint = input.previous_output;
        if outpoint.is_null() {
            return Ok(None);
        }

        let prev = self
            .get(&outpoint.txid)
            .ok_or(ColoringError::MissingPrevTx(outpoint.txid))?;

        let Some(tag) = Tag::from_tx(prev) else {
            return Ok(None);
        };

        let value = prev
            .outputs
            .get(outpoint.vout as usize)
            .map(|out| out.value)
            .ok_or(ColoringError::OutputOutOfRange {
                txid: outpoint.txid,
                index: outpoint.vout as usize,
            })?;

        Ok(Some((value, tag)))
    }
}

impl FromIterator<Transaction> for PreviousTransactions {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut prev = Self::new();
        for tx in iter {
            prev.insert(tx);
        }
        prev
    }
}

/// Fetch every distinct previous transaction of `tx`'s inputs.
///
/// Null (coinbase) outpoints are skipped. Any fetch failure aborts.
pub async fn load_previous_transactions<L>(
    ledger: &L,
    tx: &Transaction,
) -> Result<PreviousTransactions, ColoringError>
where
    L: LedgerAccessor + ?Sized,
{
    let mut prev = PreviousTransactions::new();
    for input in &tx.inputs {
        let txid = input.previous_output.txid;
        if input.previous_output.is_null() || prev.contains(&txid) {
            continue;
        }
        let fetched = ledger.get_tx(txid).await?;
        prev.txs.insert(txid, fetched);
    }

    debug!(
        "[cc-01] Loaded {} previous transactions for {} inputs",
        prev.len(),
        tx.inputs.len()
    );
    Ok(prev)
}
