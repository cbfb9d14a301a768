//! # Color Data Entities

use cc_01_coloring::ColorId;
use serde::{Deserialize, Serialize};
use shared_types::TxId;

/// "Output `out_index` of `txid` carries `value` of color `color_id`."
///
/// Write-once per `(color_id, txid, out_index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorDataRecord {
    /// Color of the value.
    pub color_id: ColorId,
    /// Transaction holding the output.
    pub txid: TxId,
    /// Output index.
    pub out_index: u32,
    /// Colored amount.
    pub value: i64,
}

impl ColorDataRecord {
    /// Create a record.
    pub fn new(color_id: ColorId, txid: TxId, out_index: u32, value: i64) -> Self {
        Self {
            color_id,
            txid,
            out_index,
            value,
        }
    }

    /// Storage key of the record.
    pub fn key(&self) -> (ColorId, TxId, u32) {
        (self.color_id, self.txid, self.out_index)
    }
}
