//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use relay_config::ConfigError;
use relay_openai::ProviderError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The provider client could not be built.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// The log filter directive is invalid.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
