//! # Composition Configuration

use serde::{Deserialize, Serialize};

use crate::domain::FeePolicy;

/// Transaction composition configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositionConfig {
    /// Smallest output value the ledger relays.
    pub dust_threshold: u64,

    /// Fee per started kilobyte.
    pub fee_per_kb: u64,

    /// Estimated bytes of one signed input.
    pub bytes_per_input: usize,

    /// Bytes of one output.
    pub bytes_per_output: usize,

    /// Fixed transaction overhead.
    pub base_tx_bytes: usize,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            dust_threshold: 5_500,
            fee_per_kb: 10_000,
            bytes_per_input: 181,
            bytes_per_output: 34,
            base_tx_bytes: 10,
        }
    }
}

impl CompositionConfig {
    /// Create a config for testing: no fees, default dust.
    pub fn for_testing() -> Self {
        Self {
            fee_per_kb: 0,
            ..Self::default()
        }
    }

    /// Fee model derived from this config.
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy {
            fee_per_kb: self.fee_per_kb,
            bytes_per_input: self.bytes_per_input,
            bytes_per_output: self.bytes_per_output,
            base_tx_bytes: self.base_tx_bytes,
        }
    }
}
