//! # Color Data Configuration

use serde::{Deserialize, Serialize};

/// Color data resolver configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorDataConfig {
    /// Outputs remembered as provably uncolored (per color).
    pub uncolored_cache_size: usize,

    /// Transactions kept after fetching, so ancestors already walked are not
    /// fetched again.
    pub tx_cache_size: usize,

    /// Timeout for a single ledger fetch, in milliseconds.
    pub ledger_timeout_ms: u64,
}

impl Default for ColorDataConfig {
    fn default() -> Self {
        Self {
            uncolored_cache_size: 10_000,
            tx_cache_size: 1_000,
            ledger_timeout_ms: 30_000,
        }
    }
}

impl ColorDataConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            uncolored_cache_size: 100,
            tx_cache_size: 100,
            ledger_timeout_ms: 1_000,
        }
    }
}
