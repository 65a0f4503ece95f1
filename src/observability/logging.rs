//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Pick the output format (pretty or JSON lines) from config
//! - Let `RUST_LOG` override the configured level
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries rendered pages and CLI output
//! - A second initialization is reported, not fatal to the caller's logic

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

pub use tracing_subscriber::util::TryInitError;

/// Build the level filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    }
}
