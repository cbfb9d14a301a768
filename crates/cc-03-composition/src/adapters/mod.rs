//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory wallet implementing the composition ports.

mod memory_wallet;

pub use memory_wallet::InMemoryOperationalTx;
