//! # Domain Errors
//!
//! Error types for the color data resolver.

use cc_01_coloring::{ColorId, ColoringError};
use shared_types::{LedgerError, TxId};
use thiserror::Error;

/// Color data storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A different value is already stored for this output and color.
    ///
    /// Either a logic error or a ledger re-organization; never overwritten.
    #[error(
        "Unique constraint violated for color {color_id} at {txid}:{out_index}: \
         stored {existing}, attempted {attempted}"
    )]
    UniqueConstraint {
        /// Color of the record
        color_id: ColorId,
        /// Transaction of the record
        txid: TxId,
        /// Output of the record
        out_index: u32,
        /// Value already stored
        existing: i64,
        /// Value that was rejected
        attempted: i64,
    },

    /// Backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Color data resolver errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorDataError {
    /// Protocol layer failure (kernel, affecting inputs, registry).
    #[error(transparent)]
    Coloring(#[from] ColoringError),

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Ledger accessor failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Ledger fetch did not complete in time.
    #[error("Ledger fetch of {txid} timed out after {timeout_ms}ms")]
    Timeout {
        /// Transaction being fetched
        txid: TxId,
        /// Configured timeout
        timeout_ms: u64,
    },
}
