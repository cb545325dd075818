//! Console logging setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `level` is used as the filter directive.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
