//! Default values matching the bot's stock deployment.

use crate::schema::*;

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default presence activity text.
pub const DEFAULT_ACTIVITY: &str = "OpenAI Bot | /help";

/// Default logging filter.
pub const DEFAULT_LOG_LEVEL: &str = "relay_bot=info,relay_commands=info,relay_openai=info";

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            guild_id: None,
            activity: DEFAULT_ACTIVITY.to_string(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            request_timeout_seconds: 120,
        }
    }
}

impl Default for AskCommandConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 30,
            model: TextModelConfig::default(),
        }
    }
}

impl Default for ImageCommandConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 70,
            model: ImageModelConfig::default(),
        }
    }
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            model: "text-babbage-001".to_string(),
            temperature: 0.4,
            max_tokens: 1024,
            top_p: 0.1,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
        }
    }
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            n: 1,
            size: "1024x1024".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
