//! Test utilities and shared test helpers for Relay Bot.
//!
//! Common fixtures and helpers used across the workspace for unit and
//! integration testing.

use std::sync::Once;

#[cfg(feature = "testing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "testing")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "testing"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    /// Create a test user ID.
    #[must_use]
    pub const fn test_user_id() -> u64 {
        987_654_321_098_765_432
    }

    /// Create multiple distinct test user IDs.
    #[must_use]
    pub fn test_user_ids(count: usize) -> Vec<u64> {
        (0..count as u64)
            .map(|i| 100_000_000_000_000_000 + i)
            .collect()
    }

    /// Role id used for the `ban` role in tests.
    #[must_use]
    pub const fn test_ban_role_id() -> u64 {
        111_111_111_111_111_111
    }

    /// Role id used for the `admin` role in tests.
    #[must_use]
    pub const fn test_admin_role_id() -> u64 {
        222_222_222_222_222_222
    }
}

/// Configuration-related test fixtures.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML.
    #[must_use]
    pub const fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"

openai:
  api_key: "test_api_key"
"#
    }

    /// A full configuration as YAML with every section spelled out.
    #[must_use]
    pub const fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  guild_id: 123456789012345678\n",
            "  activity: \"OpenAI Bot | /help\"\n",
            "\n",
            "openai:\n",
            "  api_key: \"test_api_key_full\"\n",
            "  base_url: \"https://api.openai.com/v1\"\n",
            "  request_timeout_seconds: 90\n",
            "\n",
            "roles:\n",
            "  ban: 111111111111111111\n",
            "  admin: 222222222222222222\n",
            "  newbie: 0\n",
            "  constant: 0\n",
            "  old: 0\n",
            "  eternalold: 0\n",
            "  pseudoowner: 0\n",
            "\n",
            "commands:\n",
            "  ask:\n",
            "    cooldown_seconds: 30\n",
            "    model:\n",
            "      model: \"text-babbage-001\"\n",
            "      temperature: 0.4\n",
            "      max_tokens: 1024\n",
            "      top_p: 0.1\n",
            "      frequency_penalty: 0.1\n",
            "      presence_penalty: 0.1\n",
            "  image:\n",
            "    cooldown_seconds: 70\n",
            "    model:\n",
            "      n: 1\n",
            "      size: \"1024x1024\"\n",
            "\n",
            "logging:\n",
            "  level: \"relay_bot=debug\"\n",
            "  json: true\n"
        )
    }
}
