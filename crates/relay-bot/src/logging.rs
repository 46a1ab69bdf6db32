//! Tracing subscriber setup.

use crate::error::BotResult;
use relay_config::LoggingConfig;
use std::env;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. A non-empty `RUST_LOG` wins over the configured
/// level.
pub fn build_filter(config: &LoggingConfig, rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log.map(str::trim).filter(|directive| !directive.is_empty()) {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_new(&config.level),
    }
}

/// Installs the global subscriber, as JSON lines when `config.json` is set.
pub fn init_tracing(config: &LoggingConfig) -> BotResult<()> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, rust_log.as_deref())?;

    let (json, plain) = if config.json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_is_used_without_rust_log() {
        let config = LoggingConfig {
            level: "relay_bot=debug".to_string(),
            json: false,
        };
        let filter = build_filter(&config, None).unwrap();
        assert!(filter.to_string().contains("relay_bot=debug"));

        let filter = build_filter(&config, Some("  ")).unwrap();
        assert!(filter.to_string().contains("relay_bot=debug"));
    }

    #[test]
    fn test_rust_log_overrides_config() {
        let filter = build_filter(&LoggingConfig::default(), Some("warn")).unwrap();
        assert!(filter.to_string().contains("warn"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "relay_bot=loud".to_string(),
            json: false,
        };
        assert!(build_filter(&config, None).is_err());
    }
}
