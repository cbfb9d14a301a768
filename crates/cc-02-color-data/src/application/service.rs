//! # Color Data Service
//!
//! Lazily computes and memoizes the color value of any output by walking the
//! transaction graph back toward genesis.
//!
//! The walk is an explicit stack. Each output is expanded once per call: its
//! transaction is fetched, the affecting inputs of that output are pushed,
//! and a `Finish` step runs the kernel once they are all resolved. Kernel
//! results for a transaction are stored in one batch after the kernel
//! succeeds, so a cancelled or failed resolution leaves no partial records.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cc_01_coloring::{
    collect_affecting_inputs, run_kernel, ColorDefinition, ColorId, ColorValue, ColoringError,
    PreviousTransactions, Tag,
};
use chroma_telemetry::{log_tx_event, subsystems};
use lru::LruCache;
use parking_lot::Mutex;
use shared_types::{OutPoint, Transaction, TxId};
use tracing::{debug, info};

use crate::config::ColorDataConfig;
use crate::domain::{ColorDataError, ColorDataRecord};
use crate::ports::{ColorDataApi, ColorDataStore, LedgerAccessor};

type OutputKey = (ColorId, TxId, u32);

/// Whether the outputs of `tx` derive from its inputs. Untagged and genesis
/// transactions color nothing from their inputs, so their parents are never
/// fetched.
fn is_transfer(tx: &Transaction) -> bool {
    Tag::from_tx(tx).map_or(false, |tag| !tag.is_genesis())
}

enum Step {
    Visit(TxId, u32),
    Finish {
        txid: TxId,
        out_index: u32,
        tx: Transaction,
        prev: PreviousTransactions,
    },
}

/// Color Data Service - resolves and memoizes color values.
pub struct ColorDataService<L: LedgerAccessor + ?Sized, S: ColorDataStore + ?Sized> {
    /// Configuration.
    config: ColorDataConfig,
    /// Ledger access.
    ledger: Arc<L>,
    /// Memoized color values.
    store: Arc<S>,
    /// Recently fetched transactions.
    tx_cache: Mutex<LruCache<TxId, Transaction>>,
    /// Outputs proven not to carry a color.
    uncolored: Mutex<LruCache<OutputKey, ()>>,
}

impl<L, S> ColorDataService<L, S>
where
    L: LedgerAccessor + ?Sized,
    S: ColorDataStore + ?Sized,
{
    /// Create a new service.
    pub fn new(config: ColorDataConfig, ledger: Arc<L>, store: Arc<S>) -> Self {
        let tx_cache_size = NonZeroUsize::new(config.tx_cache_size).unwrap_or(NonZeroUsize::MIN);
        let uncolored_size =
            NonZeroUsize::new(config.uncolored_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            config,
            ledger,
            store,
            tx_cache: Mutex::new(LruCache::new(tx_cache_size)),
            uncolored: Mutex::new(LruCache::new(uncolored_size)),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The ledger accessor.
    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    /// Fetch a transaction through the cache, bounded by the ledger timeout.
    async fn fetch_tx(&self, txid: TxId) -> Result<Transaction, ColorDataError> {
        let cached = self.tx_cache.lock().get(&txid).cloned();
        if let Some(tx) = cached {
            return Ok(tx);
        }

        let timeout_ms = self.config.ledger_timeout_ms;
        let tx = tokio::time::timeout(Duration::from_millis(timeout_ms), self.ledger.get_tx(txid))
            .await
            .map_err(|_| ColorDataError::Timeout { txid, timeout_ms })??;

        self.tx_cache.lock().put(txid, tx.clone());
        Ok(tx)
    }

    async fn load_previous(&self, tx: &Transaction) -> Result<PreviousTransactions, ColorDataError> {
        let mut prev = PreviousTransactions::new();
        for input in &tx.inputs {
            let outpoint = input.previous_output;
            if outpoint.is_null() || prev.contains(&outpoint.txid) {
                continue;
            }
            prev.insert(self.fetch_tx(outpoint.txid).await?);
        }
        Ok(prev)
    }

    fn is_known(&self, color_id: ColorId, txid: TxId, out_index: u32) -> Result<bool, ColorDataError> {
        if self.store.get(color_id, txid, out_index)?.is_some() {
            return Ok(true);
        }
        Ok(self.uncolored.lock().contains(&(color_id, txid, out_index)))
    }

    fn input_color_values(
        &self,
        definition: &Arc<ColorDefinition>,
        tx: &Transaction,
    ) -> Result<Vec<Option<ColorValue>>, ColorDataError> {
        let color_id = definition.color_id();
        tx.inputs
            .iter()
            .map(|input| {
                let outpoint = input.previous_output;
                let value = self.store.get(color_id, outpoint.txid, outpoint.vout)?;
                Ok(value.map(|v| ColorValue::new(Arc::clone(definition), v)))
            })
            .collect()
    }

    /// Run the kernel over `tx` and store every colored output together.
    fn run_and_persist(
        &self,
        definition: &Arc<ColorDefinition>,
        txid: TxId,
        out_index: u32,
        tx: &Transaction,
        prev: &PreviousTransactions,
        is_genesis: bool,
    ) -> Result<(), ColorDataError> {
        let color_id = definition.color_id();
        let in_values = if is_genesis {
            Vec::new()
        } else {
            self.input_color_values(definition, tx)?
        };
        let out_values = run_kernel(definition, tx, &in_values, prev)?;

        let records: Vec<ColorDataRecord> = out_values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                value
                    .as_ref()
                    .map(|cv| ColorDataRecord::new(color_id, txid, index as u32, cv.value()))
            })
            .collect();
        self.store.add_all(&records)?;

        let requested_uncolored = out_values
            .get(out_index as usize)
            .map_or(true, Option::is_none);
        if requested_uncolored {
            self.uncolored.lock().put((color_id, txid, out_index), ());
        }

        log_tx_event!(
            debug,
            subsystems::COLOR_DATA,
            "Kernel applied",
            txid,
            color_id = color_id,
            colored_outputs = records.len()
        );
        Ok(())
    }

    /// Resolve every output in `roots`, deepest ancestors first.
    async fn resolve_outputs(
        &self,
        definition: &Arc<ColorDefinition>,
        roots: &[(TxId, u32)],
    ) -> Result<(), ColorDataError> {
        let Some(epobc) = definition.as_epobc() else {
            return Ok(());
        };
        let color_id = epobc.color_id();

        let mut expanded: HashSet<(TxId, u32)> = HashSet::new();
        let mut stack: Vec<Step> = roots
            .iter()
            .rev()
            .map(|&(txid, out_index)| Step::Visit(txid, out_index))
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(txid, out_index) => {
                    if !expanded.insert((txid, out_index))
                        || self.is_known(color_id, txid, out_index)?
                    {
                        continue;
                    }

                    let tx = self.fetch_tx(txid).await?;
                    if out_index as usize >= tx.outputs.len() {
                        return Err(ColoringError::OutputOutOfRange {
                            txid,
                            index: out_index as usize,
                        }
                        .into());
                    }

                    if epobc.is_genesis_tx(&txid) || !is_transfer(&tx) {
                        stack.push(Step::Finish {
                            txid,
                            out_index,
                            tx,
                            prev: PreviousTransactions::new(),
                        });
                        continue;
                    }

                    let prev = self.load_previous(&tx).await?;
                    let affecting = collect_affecting_inputs(&tx, &[out_index as usize], &prev)?
                        .unwrap_or_default();
                    let dependencies: Vec<OutPoint> = affecting
                        .iter()
                        .map(|&index| tx.inputs[index].previous_output)
                        .collect();

                    stack.push(Step::Finish {
                        txid,
                        out_index,
                        tx,
                        prev,
                    });
                    for outpoint in dependencies.into_iter().rev() {
                        // An expanded output is either finished or below us on
                        // the stack; the graph is acyclic, so it is finished.
                        if !expanded.contains(&(outpoint.txid, outpoint.vout)) {
                            stack.push(Step::Visit(outpoint.txid, outpoint.vout));
                        }
                    }
                }
                Step::Finish {
                    txid,
                    out_index,
                    tx,
                    prev,
                } => {
                    if self.store.get(color_id, txid, out_index)?.is_some() {
                        continue;
                    }
                    let is_genesis = epobc.is_genesis_tx(&txid);
                    self.run_and_persist(definition, txid, out_index, &tx, &prev, is_genesis)?;
                }
            }
        }

        debug!(
            "[cc-02] Resolved {} outputs for color {} ({} roots)",
            expanded.len(),
            color_id,
            roots.len()
        );
        Ok(())
    }
}

#[async_trait]
impl<L, S> ColorDataApi for ColorDataService<L, S>
where
    L: LedgerAccessor + ?Sized,
    S: ColorDataStore + ?Sized,
{
    async fn get_color_value(
        &self,
        txid: TxId,
        out_index: u32,
        definition: &Arc<ColorDefinition>,
    ) -> Result<Option<ColorValue>, ColorDataError> {
        if definition.as_epobc().is_none() {
            return Ok(None);
        }
        let color_id = definition.color_id();

        self.resolve_outputs(definition, &[(txid, out_index)]).await?;

        Ok(self
            .store
            .get(color_id, txid, out_index)?
            .map(|value| ColorValue::new(Arc::clone(definition), value)))
    }

    async fn get_tx_color_values(
        &self,
        tx: &Transaction,
        out_indices: &[usize],
        definition: &Arc<ColorDefinition>,
    ) -> Result<Vec<Option<ColorValue>>, ColorDataError> {
        let txid = tx.txid();
        if let Some(&index) = out_indices.iter().find(|&&i| i >= tx.outputs.len()) {
            return Err(ColoringError::OutputOutOfRange { txid, index }.into());
        }
        let Some(epobc) = definition.as_epobc() else {
            return Ok(vec![None; out_indices.len()]);
        };

        let (in_values, prev) = if epobc.is_genesis_tx(&txid) || !is_transfer(tx) {
            (Vec::new(), PreviousTransactions::new())
        } else {
            let prev = self.load_previous(tx).await?;
            let affecting = collect_affecting_inputs(tx, out_indices, &prev)?.unwrap_or_default();
            let roots: Vec<(TxId, u32)> = affecting
                .iter()
                .map(|&index| {
                    let outpoint = tx.inputs[index].previous_output;
                    (outpoint.txid, outpoint.vout)
                })
                .collect();
            self.resolve_outputs(definition, &roots).await?;
            (self.input_color_values(definition, tx)?, prev)
        };

        let out_values = run_kernel(definition, tx, &in_values, &prev)?;
        Ok(out_indices
            .iter()
            .map(|&index| out_values.get(index).cloned().flatten())
            .collect())
    }

    async fn remove_color_values(
        &self,
        txid: TxId,
        definition: &Arc<ColorDefinition>,
    ) -> Result<usize, ColorDataError> {
        let color_id = definition.color_id();
        let removed = self.store.remove_tx(color_id, txid)?;

        {
            let mut uncolored = self.uncolored.lock();
            let stale: Vec<OutputKey> = uncolored
                .iter()
                .map(|(key, _)| *key)
                .filter(|(c, t, _)| *c == color_id && *t == txid)
                .collect();
            for key in &stale {
                uncolored.pop(key);
            }
        }

        info!(
            "[cc-02] Removed {} color records of color {} on {}",
            removed, color_id, txid
        );
        Ok(removed)
    }
}
