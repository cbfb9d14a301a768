//! # Integration Tests
//!
//! Flows crossing subsystem boundaries: transactions built by cc-03 are
//! colored by the cc-01 kernel and memoized by the cc-02 resolver.

mod lifecycle;
mod resolver;

/// Install the test subscriber once; later calls are no-ops.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = chroma_telemetry::init_logging(&chroma_telemetry::TelemetryConfig::for_testing());
}
