//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: `ColorDataApi`
//! - **Driven Ports (Outbound)**: `ColorDataStore`, `LedgerAccessor`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
