//! # CC-02 Color Data
//!
//! Lazy, memoized resolution of color values for arbitrary ledger outputs.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Answer "how much of color C does output (txid, n) carry?" for outputs
//! nobody has scanned yet. The resolver walks back through affecting inputs
//! until it reaches memoized data or the color's genesis, then runs the
//! kernel forward and stores every colored output it produced.
//!
//! ## Guarantees
//!
//! | Guarantee | Description |
//! |-----------|-------------|
//! | Durable memoization | Stored values are never recomputed |
//! | No re-entry | Each output is expanded at most once per query |
//! | Atomic persistence | A transaction's outputs are stored together or not at all |
//! | Write-once | Conflicting values fail with `UniqueConstraint` |
//! | Bounded waits | Ledger fetches time out after `ledger_timeout_ms` |
//!
//! ## Module Structure
//!
//! ```text
//! cc-02-color-data/
//! ├── domain/          # ColorDataRecord, errors
//! ├── ports/           # ColorDataApi (inbound) + ColorDataStore (outbound)
//! ├── adapters/        # In-memory store and ledger
//! ├── application/     # ColorDataService
//! └── config.rs        # ColorDataConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryColorDataStore, InMemoryLedger};
pub use application::ColorDataService;
pub use config::ColorDataConfig;
pub use domain::{ColorDataError, ColorDataRecord, StoreError};
pub use ports::{ColorDataApi, ColorDataStore, LedgerAccessor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
