//! Tracing setup for the binary.
//!
//! Logs go to stderr so that stdout stays clean for command output and JSON.

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV_VAR: &str = "FPL_NEXUS_LOG";

/// Filter used when neither `FPL_NEXUS_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "fpl_nexus=warn";

/// Pick the filter directive: `FPL_NEXUS_LOG`, then `RUST_LOG`, then the default.
pub fn log_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    [LOG_ENV_VAR, "RUST_LOG"]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn init_tracing() -> anyhow::Result<()> {
    let directive = log_directive(|var| std::env::var(var).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
