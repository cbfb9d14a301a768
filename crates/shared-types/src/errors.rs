//! # Error Types
//!
//! Errors raised by ledger access and identifier parsing.

use thiserror::Error;

use crate::entities::TxId;

/// Errors surfaced by a ledger accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger does not know this transaction.
    #[error("Transaction not found: {0}")]
    NotFound(TxId),

    /// The referenced output index does not exist.
    #[error("Output {vout} not found in transaction {txid}")]
    OutputNotFound {
        /// Transaction that was found.
        txid: TxId,
        /// Missing output index.
        vout: u32,
    },

    /// Backend communication failure.
    #[error("Ledger backend error: {0}")]
    Backend(String),
}

/// Errors parsing a hex transaction id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxIdParseError {
    /// Expected 64 hex characters.
    #[error("Invalid txid length: {0} (expected 64)")]
    InvalidLength(usize),

    /// Not valid hex.
    #[error("Invalid txid hex: {0}")]
    InvalidHex(String),
}
