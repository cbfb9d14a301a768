//! # Chroma Telemetry
//!
//! Structured logging for the coloring subsystems.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chroma_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CHROMA_SERVICE_NAME` | `chroma` | Service name attached to every event |
//! | `CHROMA_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `CHROMA_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Subsystem identifiers used as the `subsystem` field on log events.
pub mod subsystems {
    /// Protocol layer (tags, kernel, registry).
    pub const COLORING: &str = "cc-01";
    /// Color-data resolver.
    pub const COLOR_DATA: &str = "cc-02";
    /// Transaction composer.
    pub const COMPOSITION: &str = "cc-03";
}
