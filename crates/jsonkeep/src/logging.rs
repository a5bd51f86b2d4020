//! Logging setup for the command-line tools.
//!
//! Events go to stderr through `tracing-subscriber`; `RUST_LOG` overrides
//! the configured level.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{KeepError, Result};

/// Configuration for the logging subsystem.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// The minimum level to display.
    pub level: Level,
    /// Whether to include the target module.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a config with the given level.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set whether to include target information.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }
}

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(s: &str) -> Option<Level> {
    s.parse().ok()
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.with_target),
        )
        .try_init()
        .map_err(|e| KeepError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.with_target);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new(Level::DEBUG).with_target(true);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.with_target);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info"), Some(Level::INFO));
        assert_eq!(parse_level("TRACE"), Some(Level::TRACE));
        assert_eq!(parse_level("loud"), None);
    }
}
