//! Runtime validation of a loaded configuration.

use crate::loader::{ConfigError, DISCORD_TOKEN_VAR, OPENAI_API_KEY_VAR};
use crate::schema::{Config, ImageModelConfig, TextModelConfig};
use tracing::warn;

/// Image resolutions accepted by the image generation endpoint.
pub const SUPPORTED_IMAGE_SIZES: [&str; 3] = ["256x256", "512x512", "1024x1024"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, failing on the first problem found.
    ///
    /// Credentials are checked first so a bare environment reports the
    /// missing key rather than an unrelated field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.openai.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                what: "OpenAI API key",
                var: OPENAI_API_KEY_VAR,
            });
        }

        if config.discord.token.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                what: "Discord bot token",
                var: DISCORD_TOKEN_VAR,
            });
        }

        if config.discord.guild_id == Some(0) {
            return Err(ConfigError::invalid(
                "discord.guild_id",
                "guild id must be non-zero",
            ));
        }

        url::Url::parse(&config.openai.base_url)
            .map_err(|e| ConfigError::invalid("openai.base_url", e.to_string()))?;

        if config.openai.request_timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "openai.request_timeout_seconds",
                "timeout must be at least one second",
            ));
        }

        if config.commands.ask.cooldown_seconds == 0 {
            return Err(ConfigError::invalid(
                "commands.ask.cooldown_seconds",
                "cooldown must be at least one second",
            ));
        }

        if config.commands.image.cooldown_seconds == 0 {
            return Err(ConfigError::invalid(
                "commands.image.cooldown_seconds",
                "cooldown must be at least one second",
            ));
        }

        Self::validate_text_model(&config.commands.ask.model)?;
        Self::validate_image_model(&config.commands.image.model)?;

        if config.roles.ban == 0 {
            warn!("roles.ban is unset; /member block and /member unblock will refuse to run");
        }
        if config.roles.admin == 0 {
            warn!("roles.admin is unset; no member passes the admin role check");
        }

        Ok(())
    }

    fn validate_text_model(model: &TextModelConfig) -> Result<(), ConfigError> {
        if model.model.trim().is_empty() {
            return Err(ConfigError::invalid(
                "commands.ask.model.model",
                "model name cannot be empty",
            ));
        }
        if !(0.0..=2.0).contains(&model.temperature) {
            return Err(ConfigError::invalid(
                "commands.ask.model.temperature",
                format!("{} is outside 0.0..=2.0", model.temperature),
            ));
        }
        if !(0.0..=1.0).contains(&model.top_p) {
            return Err(ConfigError::invalid(
                "commands.ask.model.top_p",
                format!("{} is outside 0.0..=1.0", model.top_p),
            ));
        }
        if !(-2.0..=2.0).contains(&model.frequency_penalty) {
            return Err(ConfigError::invalid(
                "commands.ask.model.frequency_penalty",
                format!("{} is outside -2.0..=2.0", model.frequency_penalty),
            ));
        }
        if !(-2.0..=2.0).contains(&model.presence_penalty) {
            return Err(ConfigError::invalid(
                "commands.ask.model.presence_penalty",
                format!("{} is outside -2.0..=2.0", model.presence_penalty),
            ));
        }
        if model.max_tokens == 0 {
            return Err(ConfigError::invalid(
                "commands.ask.model.max_tokens",
                "max_tokens must be positive",
            ));
        }
        Ok(())
    }

    fn validate_image_model(model: &ImageModelConfig) -> Result<(), ConfigError> {
        if model.n == 0 {
            return Err(ConfigError::invalid(
                "commands.image.model.n",
                "at least one image must be requested",
            ));
        }
        if !SUPPORTED_IMAGE_SIZES.contains(&model.size.as_str()) {
            return Err(ConfigError::invalid(
                "commands.image.model.size",
                format!(
                    "'{}' is not one of {}",
                    model.size,
                    SUPPORTED_IMAGE_SIZES.join(", ")
                ),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "token".to_string();
        config.openai.api_key = "key".to_string();
        config
    }

    #[test]
    fn test_missing_api_key_reported_first() {
        let err = Config::default().validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential { var: OPENAI_API_KEY_VAR, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Missing OpenAI API key: set the OPENAI_API_KEY environment variable"
        );
    }

    #[test]
    fn test_missing_discord_token() {
        let mut config = Config::default();
        config.openai.api_key = "key".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential { var: DISCORD_TOKEN_VAR, .. }
        ));
    }

    #[test]
    fn test_defaults_with_credentials_are_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_image_size() {
        let mut config = valid_config();
        config.commands.image.model.size = "800x600".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "commands.image.model.size", .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_sampling() {
        let mut config = valid_config();
        config.commands.ask.model.top_p = 1.5;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.commands.ask.model.temperature = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cooldown_and_guild() {
        let mut config = valid_config();
        config.commands.ask.cooldown_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.discord.guild_id = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let mut config = valid_config();
        config.openai.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid { field: "openai.base_url", .. }
        ));
    }
}
