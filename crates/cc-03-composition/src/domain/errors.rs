//! # Domain Errors
//!
//! Error types for transaction composition.

use cc_01_coloring::{ColorId, ColoringError};
use thiserror::Error;

/// Composition error types.
///
/// Target validation errors are raised before the composed transaction is
/// touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// Protocol layer failure (padding, incompatible colors, overflow).
    #[error(transparent)]
    Coloring(#[from] ColoringError),

    /// Nothing to pay.
    #[error("No color targets to compose")]
    NoTargets,

    /// A genesis composition takes exactly one target.
    #[error("Genesis composition needs exactly one target, got {0}")]
    GenesisTargetCount(usize),

    /// A genesis composition target is not of the genesis-intent color.
    #[error("Genesis target has color {0}, expected the genesis intent marker")]
    NotGenesisIntent(ColorId),

    /// A transfer composition received a genesis-intent target.
    #[error("Transfer composition cannot mint a new color")]
    UnexpectedGenesisIntent,

    /// Target amounts must be positive.
    #[error("Invalid target value {value} for color {color_id}")]
    InvalidTargetValue {
        /// Color of the target
        color_id: ColorId,
        /// Offending value
        value: i64,
    },

    /// Coin selection could not cover the requested amount.
    #[error("Insufficient funds of color {color_id}: need {needed}, have {available}")]
    InsufficientFunds {
        /// Requested color
        color_id: ColorId,
        /// Amount needed
        needed: i64,
        /// Amount available
        available: i64,
    },

    /// A transaction without inputs cannot carry a tag.
    #[error("Composed transaction has no inputs")]
    NoInputs,

    /// Wallet capability failure (change script lookup and similar).
    #[error("Wallet error: {0}")]
    Wallet(String),
}
