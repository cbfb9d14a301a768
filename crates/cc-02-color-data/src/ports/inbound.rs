//! # Inbound Ports
//!
//! API trait defining what the color data resolver can do.

use std::sync::Arc;

use async_trait::async_trait;
use cc_01_coloring::{ColorDefinition, ColorValue};
use shared_types::{OutPoint, Transaction, TxId};

use crate::domain::ColorDataError;

/// Color data API - inbound port.
#[async_trait]
pub trait ColorDataApi: Send + Sync {
    /// Color value of output `out_index` of `txid` under `definition`.
    ///
    /// `Ok(None)` means the output is provably not of this color.
    async fn get_color_value(
        &self,
        txid: TxId,
        out_index: u32,
        definition: &Arc<ColorDefinition>,
    ) -> Result<Option<ColorValue>, ColorDataError>;

    /// Same as [`get_color_value`](Self::get_color_value) for an outpoint.
    async fn get_coin_color_value(
        &self,
        outpoint: OutPoint,
        definition: &Arc<ColorDefinition>,
    ) -> Result<Option<ColorValue>, ColorDataError> {
        self.get_color_value(outpoint.txid, outpoint.vout, definition)
            .await
    }

    /// Color values of selected outputs of a transaction that need not be
    /// in the ledger yet.
    ///
    /// Ancestors are resolved and persisted; the outputs of `tx` itself are
    /// returned but not stored.
    async fn get_tx_color_values(
        &self,
        tx: &Transaction,
        out_indices: &[usize],
        definition: &Arc<ColorDefinition>,
    ) -> Result<Vec<Option<ColorValue>>, ColorDataError>;

    /// Forget every memoized value of `definition` on `txid`.
    async fn remove_color_values(
        &self,
        txid: TxId,
        definition: &Arc<ColorDefinition>,
    ) -> Result<usize, ColorDataError>;
}
