//! Logging and tracing setup
//!
//! The library itself only emits `tracing` events and spans. Binaries and
//! tests that want to see them call [`init_tracing`] once at startup.
//!
//! Filtering follows `RUST_LOG`; without it everything at `info` and above
//! is shown.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Output format for [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    #[default]
    Pretty,
    /// Structured JSON including the current span list.
    Json,
}

/// Install a global subscriber.
///
/// Calling this again once a subscriber is installed is a no-op.
///
/// # Errors
/// Fails if `RUST_LOG` holds an invalid directive.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true).with_span_list(true))
            .try_init(),
    };

    match installed {
        Ok(()) => tracing::debug!(?format, "tracing initialised"),
        Err(err) => tracing::debug!(error = %err, "tracing subscriber already installed"),
    }
    Ok(())
}

fn env_filter() -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(&directives)
                .with_context(|| format!("invalid RUST_LOG: {directives}"))
        }
        _ => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}
