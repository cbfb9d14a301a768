//! # Shared Types
//!
//! Ledger primitives used by every coloring subsystem.
//!
//! ## Clusters
//!
//! - **Identifiers**: `TxId`, `OutPoint`
//! - **Transactions**: `Transaction`, `TxIn`, `TxOut`
//! - **Errors**: `LedgerError`, `TxIdParseError`
//!
//! Transactions follow the layout of a Bitcoin-like UTXO chain. The txid is the
//! double SHA-256 of the canonical serialization produced by
//! [`Transaction::serialize`].

#![warn(missing_docs)]

pub mod entities;
pub mod errors;

pub use entities::{OutPoint, Transaction, TxId, TxIn, TxOut, DEFAULT_SEQUENCE};
pub use errors::{LedgerError, TxIdParseError};
