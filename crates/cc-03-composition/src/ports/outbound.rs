//! # Outbound Ports
//!
//! Wallet capabilities the composer depends on: what to pay, which coins to
//! spend, where change goes and how fees are priced.

use async_trait::async_trait;
use cc_01_coloring::{ColorDefinition, ColorValue};

use crate::domain::{CoinSelection, ColorTarget, ComposedTx, CompositionError, FeePolicy};

/// Prices additional inputs and outputs of a transaction being built.
pub trait FeeEstimator: Send + Sync {
    /// Fee required once `extra_inputs` and `extra_outputs` are added.
    fn estimate_required_fee(&self, extra_inputs: usize, extra_outputs: usize) -> u64;
}

impl FeeEstimator for ComposedTx {
    fn estimate_required_fee(&self, extra_inputs: usize, extra_outputs: usize) -> u64 {
        ComposedTx::estimate_required_fee(self, extra_inputs, extra_outputs)
    }
}

/// One composition request together with the wallet behind it.
#[async_trait]
pub trait OperationalTx: Send + Sync {
    /// What to pay.
    fn targets(&self) -> &[ColorTarget];

    /// Select coins carrying at least `color_value`.
    ///
    /// With a fee estimator the selection must also cover the fee of the
    /// inputs it adds.
    async fn select_coins(
        &self,
        color_value: &ColorValue,
        fee_estimator: Option<&dyn FeeEstimator>,
    ) -> Result<CoinSelection, CompositionError>;

    /// Script receiving change of `definition`.
    fn change_script(&self, definition: &ColorDefinition) -> Result<Vec<u8>, CompositionError>;

    /// Smallest output value the ledger relays.
    fn dust_threshold(&self) -> u64;

    /// Size and fee model.
    fn fee_policy(&self) -> FeePolicy;

    /// Fee for a transaction of `bytes` bytes.
    fn fee_for_size(&self, bytes: usize) -> u64 {
        self.fee_policy().fee_for_size(bytes)
    }
}
