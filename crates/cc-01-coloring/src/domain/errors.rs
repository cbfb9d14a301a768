//! # Domain Errors
//!
//! Error types for the coloring protocol layer.
//!
//! "This output is uncolored" and "this transaction is not tagged" are never
//! errors; they are `None` values returned by the kernel.

use shared_types::{LedgerError, TxId};
use thiserror::Error;

use super::color_definition::ColorId;

/// Coloring error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// Required padding does not fit in a 6-bit padding code.
    #[error("Padding {min_padding} exceeds the largest encodable padding (2^63)")]
    Padding {
        /// Requested minimum padding
        min_padding: i128,
    },

    /// Padding code outside 0..=63.
    #[error("Invalid padding code {0} (max 63)")]
    InvalidPaddingCode(u8),

    /// Arithmetic between color values of different colors.
    #[error("Incompatible color values: color {left} vs color {right}")]
    Incompatible {
        /// Color id of the left operand
        left: ColorId,
        /// Color id of the right operand
        right: ColorId,
    },

    /// Summing an empty list of color values.
    #[error("Cannot sum an empty list of color values")]
    EmptySum,

    /// Malformed or unknown color descriptor.
    #[error("Incorrect color descriptor: {0:?}")]
    IncorrectDesc(String),

    /// Color id not valid for the requested definition.
    #[error("Incorrect color id: {0}")]
    IncorrectColorId(ColorId),

    /// A color scheme with this prefix is already registered.
    #[error("Color scheme already registered: {0}")]
    AlreadyRegistered(String),

    /// A previous transaction needed for the walk was not materialized.
    #[error("Previous transaction not loaded: {0}")]
    MissingPrevTx(TxId),

    /// Output index outside the transaction.
    #[error("Output index {index} out of range for transaction {txid}")]
    OutputOutOfRange {
        /// Transaction being inspected
        txid: TxId,
        /// Offending index
        index: usize,
    },

    /// A color amount does not fit into `i64`.
    #[error("Color amount overflow: {0}")]
    AmountOverflow(i128),

    /// Color map storage failure.
    #[error("Color map error: {0}")]
    ColorMap(String),

    /// Ledger accessor failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
