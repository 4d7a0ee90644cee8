//! Logging setup
//!
//! Structured logging via `tracing`, written to stderr so rendered trees and
//! scaffolding summaries on stdout stay clean. Level precedence:
//! `--log-level`, then the `STENCIL_LOG` environment variable, then a default
//! derived from `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other} (expected text or json)")),
        }
    }
}

/// Install the global subscriber. Call once, early in main.
pub fn init(verbose: bool, level: Option<&str>, format: LogFormat) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_env("STENCIL_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_level)),
    };

    match format {
        LogFormat::Text => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
    }
    Ok(())
}
