//! Logging setup for the native front end
//!
//! Logs go to stderr so rendered boards on stdout stay pipeable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive: `RUST_LOG` if set, else the configured level for this crate
pub fn filter_directive(config: &LoggingConfig, rust_log: Option<String>) -> String {
    rust_log.unwrap_or_else(|| format!("taskdeck={}", config.level))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::new(filter_directive(config, std::env::var("RUST_LOG").ok()));
    let json = config.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()
}
