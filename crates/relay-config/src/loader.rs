//! Configuration loading from YAML files and the environment.

use crate::schema::Config;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable holding the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the guild used for command registration.
pub const GUILD_ID_VAR: &str = "RELAY_GUILD_ID";

/// Environment variable overriding the OpenAI base URL.
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Environment variable pointing at a configuration file.
pub const CONFIG_PATH_VAR: &str = "RELAY_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required credential was not provided
    #[error("Missing {what}: set the {var} environment variable")]
    MissingCredential {
        /// Human-readable name of the credential.
        what: &'static str,
        /// Environment variable that supplies it.
        var: &'static str,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse {
        /// Variable name.
        var: &'static str,
        /// Parse failure description.
        message: String,
    },

    /// A configured value is out of range or malformed
    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the file named by `RELAY_CONFIG_PATH`, or
    /// `config.yaml`/`config.yml` in the working directory, or the built-in
    /// defaults, then applies environment overrides and validates.
    pub fn load() -> Result<Config, ConfigError> {
        let mut config = if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            Self::read_file(&path)?
        } else if Path::new("config.yaml").exists() {
            Self::read_file("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::read_file("config.yml")?
        } else {
            debug!("No configuration file found, using defaults");
            Config::default()
        };

        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file with environment variable
    /// overrides and validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::read_file(path)?;
        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML document into a configuration without validating it.
    pub fn from_yaml(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Overlays values from the environment. `lookup` abstracts over
    /// `std::env::var` so callers can supply their own source.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(token) = get(DISCORD_TOKEN_VAR) {
            config.discord.token = token;
        }

        if let Some(api_key) = get(OPENAI_API_KEY_VAR) {
            config.openai.api_key = api_key;
        }

        if let Some(url) = get(OPENAI_BASE_URL_VAR) {
            config.openai.base_url = url;
        }

        if let Some(raw) = get(GUILD_ID_VAR) {
            let guild_id = raw.trim().parse::<u64>().map_err(|e| ConfigError::EnvParse {
                var: GUILD_ID_VAR,
                message: e.to_string(),
            })?;
            config.discord.guild_id = Some(guild_id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_env_overrides_fill_credentials() {
        let env = env_from(&[
            (DISCORD_TOKEN_VAR, "discord-token"),
            (OPENAI_API_KEY_VAR, "sk-test"),
            (GUILD_ID_VAR, "42"),
        ]);
        let mut config = Config::default();
        ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned()).unwrap();

        assert_eq!(config.discord.token, "discord-token");
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.discord.guild_id, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let env = env_from(&[(DISCORD_TOKEN_VAR, "   ")]);
        let mut config = Config::default();
        config.discord.token = "from-file".to_string();
        ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned()).unwrap();

        assert_eq!(config.discord.token, "from-file");
    }

    #[test]
    fn test_bad_guild_id_is_reported() {
        let env = env_from(&[(GUILD_ID_VAR, "not-a-number")]);
        let mut config = Config::default();
        let err = ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned())
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvParse { var: GUILD_ID_VAR, .. }));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ConfigLoader::from_yaml("roles:\n  ban: 5\n").unwrap();

        assert_eq!(config.roles.ban, 5);
        assert_eq!(config.roles.admin, 0);
        assert_eq!(config.commands.ask.cooldown_seconds, 30);
        assert_eq!(config.commands.image.model.size, "1024x1024");
    }
}
