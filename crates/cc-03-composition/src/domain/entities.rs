//! # Composition Entities
//!
//! Targets, coins and selections handed between the composer and the
//! wallet capabilities it relies on.

use std::sync::Arc;

use cc_01_coloring::{ColorDefinition, ColorId, ColorValue};
use shared_types::OutPoint;

/// "Pay this much of this color to this script."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTarget {
    /// Destination output script.
    pub script: Vec<u8>,
    /// Amount and color to pay.
    pub value: ColorValue,
}

impl ColorTarget {
    /// Create a target.
    pub fn new(script: Vec<u8>, value: ColorValue) -> Self {
        Self { script, value }
    }

    /// Color id of the target.
    pub fn color_id(&self) -> ColorId {
        self.value.color_id()
    }

    /// Color definition of the target.
    pub fn definition(&self) -> &Arc<ColorDefinition> {
        self.value.definition()
    }

    /// Colored amount.
    pub fn amount(&self) -> i64 {
        self.value.value()
    }

    /// Whether this pays plain ledger value.
    pub fn is_uncolored(&self) -> bool {
        self.value.is_uncolored()
    }

    /// Whether this pays a color that does not exist yet.
    pub fn is_genesis_intent(&self) -> bool {
        self.value.is_genesis_intent()
    }
}

/// A spendable output known to the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    /// Output being spent.
    pub outpoint: OutPoint,
    /// Raw ledger value, padding included.
    pub value: u64,
    /// Color carried by the output.
    pub color_value: ColorValue,
}

impl Coin {
    /// A colored coin.
    pub fn colored(outpoint: OutPoint, value: u64, color_value: ColorValue) -> Self {
        Self {
            outpoint,
            value,
            color_value,
        }
    }

    /// A plain coin; its color value equals its ledger value.
    pub fn uncolored(outpoint: OutPoint, value: u64) -> Self {
        let amount = i64::try_from(value).unwrap_or(i64::MAX);
        Self::colored(outpoint, value, ColorValue::uncolored(amount))
    }
}

/// Result of coin selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSelection {
    /// Selected coins, in spending order.
    pub coins: Vec<Coin>,
    /// Sum of the coins' color values.
    pub total: ColorValue,
}

impl CoinSelection {
    /// Sum of the coins' raw ledger values.
    pub fn ledger_value(&self) -> u64 {
        self.coins.iter().map(|coin| coin.value).sum()
    }
}
