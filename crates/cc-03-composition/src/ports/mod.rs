//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: `OperationalTx`, `FeeEstimator`

pub mod outbound;

pub use outbound::*;
