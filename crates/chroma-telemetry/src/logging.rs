//! Structured logging.
//!
//! Events carry consistent fields so that coloring activity can be filtered
//! per subsystem and per transaction:
//! - `subsystem`: Subsystem identifier (cc-01, cc-02, cc-03)
//! - `txid`: Transaction being scanned or composed
//! - `color_id`: Local color id the event concerns

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns
/// [`TelemetryError::AlreadyInitialized`] when a subscriber is already set,
/// which lets several test binaries call this freely.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    }

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Structured logging initialized"
    );

    Ok(())
}

/// Log a transaction-related event with standard fields.
#[macro_export]
macro_rules! log_tx_event {
    ($level:ident, $subsystem:expr, $msg:expr, $txid:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            txid = %$txid,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a color-related event with standard fields.
#[macro_export]
macro_rules! log_color_event {
    ($level:ident, $subsystem:expr, $msg:expr, $color_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            color_id = $color_id,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_already_initialized() {
        let config = TelemetryConfig::for_testing();
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(TelemetryError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn test_macros_expand() {
        log_tx_event!(debug, "cc-00", "scanned", "deadbeef", outputs = 2);
        log_color_event!(debug, "cc-00", "registered", 7i64);
    }
}
