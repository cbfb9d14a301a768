//! # Value Objects

use serde::{Deserialize, Serialize};

/// Size and fee model used to price a transaction before it is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    /// Fee per started kilobyte.
    pub fee_per_kb: u64,
    /// Estimated bytes of one signed input.
    pub bytes_per_input: usize,
    /// Bytes of one output.
    pub bytes_per_output: usize,
    /// Fixed transaction overhead.
    pub base_tx_bytes: usize,
}

impl FeePolicy {
    /// Fee for a transaction of `bytes` bytes.
    pub fn fee_for_size(&self, bytes: usize) -> u64 {
        bytes.div_ceil(1000) as u64 * self.fee_per_kb
    }

    /// Estimated size of a transaction with the given shape.
    pub fn estimate_size(&self, inputs: usize, outputs: usize) -> usize {
        self.base_tx_bytes + inputs * self.bytes_per_input + outputs * self.bytes_per_output
    }
}
