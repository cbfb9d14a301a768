//! # CC-03 Composition
//!
//! Builds transactions that a compliant kernel colors exactly as intended.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Given color targets and a wallet able to select coins, lay out inputs and
//! outputs, pick the padding that lifts every colored output above dust and
//! write the tag into input 0.
//!
//! ## Steps (transfer)
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Group targets by color, select coins, add colored change |
//! | 2 | Padding code from the smallest colored output vs. dust |
//! | 3 | Colored inputs and padded outputs, group by group |
//! | 4 | Plain targets as unpadded outputs |
//! | 5 | Fund padding and fee with plain coins, add change above dust |
//! | 6 | Write the tag into input 0 |
//!
//! ## Module Structure
//!
//! ```text
//! cc-03-composition/
//! ├── domain/          # ColorTarget, Coin, ComposedTx, FeePolicy, errors
//! ├── algorithms/      # Transfer and genesis composition
//! ├── ports/           # OperationalTx, FeeEstimator (outbound)
//! ├── adapters/        # In-memory wallet
//! └── config.rs        # CompositionConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryOperationalTx;
pub use algorithms::{compose, compose_genesis_tx, compose_transfer_tx};
pub use config::CompositionConfig;
pub use domain::{Coin, CoinSelection, ColorTarget, ComposedTx, CompositionError, FeePolicy};
pub use ports::{FeeEstimator, OperationalTx};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
