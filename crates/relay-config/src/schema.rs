//! Configuration schema definitions using serde.

use relay_common::Role;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Qualified name of the text generation command.
pub const ASK_COMMAND: &str = "ask babbage";

/// Qualified name of the image generation command.
pub const IMAGE_COMMAND: &str = "image generate";

/// Main configuration structure for Relay Bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// OpenAI configuration.
    pub openai: OpenAiConfig,
    /// Guild role ids.
    pub roles: RolesConfig,
    /// Per-command settings.
    pub commands: CommandsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Guild to register slash commands in. Commands are registered
    /// globally when unset.
    pub guild_id: Option<u64>,
    /// Activity text shown in the bot's presence.
    pub activity: String,
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// OpenAI API key.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_seconds: u64,
}

/// Guild role ids keyed by logical role name. `0` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Role given to blocked members.
    pub ban: u64,
    /// Bot administrator role.
    pub admin: u64,
    /// Newcomer role.
    pub newbie: u64,
    /// Regular member role.
    pub constant: u64,
    /// Long-standing member role.
    pub old: u64,
    /// Early member role.
    pub eternalold: u64,
    /// Owner-like role.
    pub pseudoowner: u64,
}

impl RolesConfig {
    /// Returns the configured id for a role, `0` when unset.
    #[must_use]
    pub const fn id(&self, role: Role) -> u64 {
        match role {
            Role::Ban => self.ban,
            Role::Admin => self.admin,
            Role::Newbie => self.newbie,
            Role::Constant => self.constant,
            Role::Old => self.old,
            Role::EternalOld => self.eternalold,
            Role::PseudoOwner => self.pseudoowner,
        }
    }
}

/// Per-command configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// `/ask babbage` settings.
    pub ask: AskCommandConfig,
    /// `/image generate` settings.
    pub image: ImageCommandConfig,
}

impl CommandsConfig {
    /// Returns the per-user cooldown window for a qualified command name.
    #[must_use]
    pub fn cooldown_for(&self, command: &str) -> Option<Duration> {
        match command {
            ASK_COMMAND => Some(Duration::from_secs(self.ask.cooldown_seconds)),
            IMAGE_COMMAND => Some(Duration::from_secs(self.image.cooldown_seconds)),
            _ => None,
        }
    }

    /// Returns the longest configured cooldown window.
    #[must_use]
    pub fn max_cooldown(&self) -> Duration {
        Duration::from_secs(self.ask.cooldown_seconds.max(self.image.cooldown_seconds))
    }
}

/// Text generation command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AskCommandConfig {
    /// Per-user cooldown in seconds.
    pub cooldown_seconds: u64,
    /// Completion parameters.
    pub model: TextModelConfig,
}

/// Image generation command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCommandConfig {
    /// Per-user cooldown in seconds.
    pub cooldown_seconds: u64,
    /// Image parameters.
    pub model: ImageModelConfig,
}

/// Fixed completion parameters for a text command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextModelConfig {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    /// Frequency penalty.
    pub frequency_penalty: f32,
    /// Presence penalty.
    pub presence_penalty: f32,
}

/// Fixed parameters for an image command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageModelConfig {
    /// Number of images to request.
    pub n: u8,
    /// Resolution string, e.g. `1024x1024`.
    pub size: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}
