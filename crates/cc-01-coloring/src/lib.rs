//! # CC-01 Coloring
//!
//! EPOBC (padded order-based coloring) protocol layer.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Let a quantity of a named color travel with specific ledger value through
//! a chain of transactions. The transfer intent is carried in the sequence
//! number of input 0; everything else is derived deterministically from the
//! transaction graph.
//!
//! ## Protocol Rules
//!
//! | Rule | Description |
//! |------|-------------|
//! | Tag | Input 0 sequence: 6-bit marker (xfer/genesis) + 6-bit padding code |
//! | Padding | `0` for code 0, else `2^code`, subtracted from every output |
//! | Order-based transfer | Outputs consume input value ranges in order |
//! | Fail closed | Any doubt about an input's color leaves the output uncolored |
//! | Genesis | Only output 0 of a color's own genesis tx mints value |
//!
//! ## Module Structure
//!
//! ```text
//! cc-01-coloring/
//! ├── domain/          # Tag, ColorDefinition, ColorValue, errors
//! ├── algorithms/      # Affecting inputs, kernel, previous-tx loading
//! ├── ports/           # Registry API (inbound) + ledger/color map (outbound)
//! ├── adapters/        # In-memory color map
//! └── application/     # ColorDefinitionManager
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryColorMap;
pub use algorithms::{
    collect_affecting_inputs, get_affecting_inputs, get_affecting_inputs_for_outputs,
    load_previous_transactions, run_kernel, PreviousTransactions,
};
pub use application::{
    default_schemes, definition_from_desc, ColorDefinitionManager, ColorSchemeFactory,
    EpobcSchemeFactory, ResolveTarget, SchemeTable,
};
pub use domain::{
    to_amount, ColorDefinition, ColorId, ColorValue, ColoringError, EpobcColorDefinition,
    GenesisPoint, Tag, EPOBC_SCHEME, GENESIS_INTENT_COLOR_ID, GENESIS_TAG_BITS, MAX_PADDING_CODE,
    UNCOLORED_COLOR_ID, XFER_TAG_BITS,
};
pub use ports::{ColorDefinitionRegistry, ColorMapError, ColorMapStore, LedgerAccessor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
