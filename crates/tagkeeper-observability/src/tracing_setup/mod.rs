//! Global subscriber installation.

pub mod spans;

use tagkeeper_core::config::ObservabilityConfig;
use tagkeeper_core::errors::{TagKeeperError, TagKeeperResult};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> TagKeeperResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TagKeeperError::TracingInit {
            reason: format!("invalid log level '{}': {e}", config.log_level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logs {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TagKeeperError::TracingInit {
        reason: e.to_string(),
    })
}
