//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log events
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to include file and line numbers
    pub with_source_location: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "chroma".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_source_location: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CHROMA_SERVICE_NAME`: Service name (default: chroma)
    /// - `CHROMA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CHROMA_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("CHROMA_SERVICE_NAME").unwrap_or_else(|_| "chroma".to_string()),

            log_level: env::var("CHROMA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("CHROMA_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            with_source_location: false,
        }
    }

    /// Verbose configuration for test runs.
    pub fn for_testing() -> Self {
        Self {
            service_name: "chroma-test".to_string(),
            log_level: "debug".to_string(),
            json_logs: false,
            with_source_location: true,
        }
    }
}
