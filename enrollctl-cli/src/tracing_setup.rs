//! Tracing setup for the enrollctl CLI
//!
//! Usage:
//!   enrollctl --debug ...               # Debug logging to stderr
//!   RUST_LOG=enrollctl_server=debug ... # Fine-grained log control
//!
//! Filter precedence: RUST_LOG, then --debug, then `log_level` from the
//! config file, then `info`. Output goes to stderr so command output on
//! stdout stays clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the filter to debug if RUST_LOG is unset)
    pub debug: bool,
    /// Filter directive from the config file
    pub level: Option<String>,
}

impl TracingConfig {
    fn fallback_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.level.as_deref().unwrap_or("info")
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.fallback_directive()))
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
    fn debug_flag_wins_over_config_level() {
        let config = TracingConfig {
            debug: true,
            level: Some("warn".into()),
        };
        assert_eq!(config.fallback_directive(), "debug");
    }

    #[test]
    fn config_level_used_when_set() {
        let config = TracingConfig {
            debug: false,
            level: Some("warn".into()),
        };
        assert_eq!(config.fallback_directive(), "warn");
        assert_eq!(TracingConfig::default().fallback_directive(), "info");
    }
}
