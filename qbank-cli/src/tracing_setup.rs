//! Tracing setup for the qbank CLI
//!
//! Usage:
//!   qbank --debug ...                 # Debug logging to stderr
//!   RUST_LOG=qbank_core=debug qbank   # Fine-grained log control
//!
//! Filter precedence: RUST_LOG, then --debug, then `general.log_level`
//! from config, then "warn".

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (unless RUST_LOG is explicitly set)
    pub debug: bool,
    /// Fallback filter from the config file
    pub level: Option<String>,
}

impl TracingConfig {
    fn fallback_filter(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.level.as_deref().unwrap_or("warn")
        }
    }
}

/// Initialize console tracing. Logs go to stderr so stdout stays parseable.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.fallback_filter()))
        .map_err(|err| anyhow!("invalid log filter: {}", err))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_overrides_configured_level() {
        let config = TracingConfig {
            debug: true,
            level: Some("error".to_string()),
        };
        assert_eq!(config.fallback_filter(), "debug");
    }

    #[test]
    fn configured_level_then_warn() {
        let config = TracingConfig {
            debug: false,
            level: Some("info".to_string()),
        };
        assert_eq!(config.fallback_filter(), "info");
        assert_eq!(TracingConfig::default().fallback_filter(), "warn");
    }
}
