//! Logging setup
//!
//! Configures structured logging using the tracing crate: JSON lines for
//! deployed environments (CloudWatch adds its own timestamps) and compact
//! human-readable output for development.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize the logging system
///
/// Must be called once per process, before the runtime loop starts.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config);

    if config.json_output() {
        let formatting_layer = fmt::layer()
            .json()
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false);

        Registry::default()
            .with(filter)
            .with(formatting_layer)
            .try_init()?;
    } else {
        let formatting_layer = fmt::layer().compact().with_target(true);

        Registry::default()
            .with(filter)
            .with(formatting_layer)
            .try_init()?;
    }

    tracing::info!(
        environment = ?config.environment,
        log_level = %config.log_level,
        "Logging initialized"
    );

    Ok(())
}
