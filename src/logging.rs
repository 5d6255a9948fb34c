//! Logging setup for the command-line front end

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{DEFAULT_LOG_LEVEL, LOG_ENV};

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `VERSION_SANITY_LOG` when it is set and valid,
/// otherwise from `level`.
pub fn init(level: &str) -> anyhow::Result<()> {
    let env_directive = std::env::var(LOG_ENV).ok();
    let (filter, rejected) = build_filter(env_directive.as_deref(), level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    if let Some(e) = rejected {
        warn!("Ignoring invalid {}: {}", LOG_ENV, e);
    }
    Ok(())
}

/// Pick the filter, returning the parse error of a rejected env directive
fn build_filter(env_directive: Option<&str>, level: &str) -> (EnvFilter, Option<ParseError>) {
    let rejected = match env_directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => return (filter, None),
        Some(Err(e)) => Some(e),
        None => None,
    };

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    (filter, rejected)
}
