//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

use shelf_shared::config::environment::LogFormat;
use shelf_shared::LoggingConfig;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Installing twice
/// (e.g. from tests) only logs a warning.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(error) = result {
        tracing::warn!(%error, "Tracing subscriber already installed");
    }
}
