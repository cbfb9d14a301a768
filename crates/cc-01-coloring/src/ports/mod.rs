//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: `ColorDefinitionRegistry`
//! - **Driven Ports (Outbound)**: `LedgerAccessor`, `ColorMapStore`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
