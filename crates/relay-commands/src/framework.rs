//! Poise framework setup and command registration logic.

use crate::access::AccessGate;
use crate::cooldown::CooldownTracker;
use crate::error::CommandError;
use crate::reply::Reply;
use crate::roles::RoleRegistry;
use relay_config::Config;
use relay_openai::Generator;
use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Role-based access decisions.
    pub gate: AccessGate,
    /// Per-user command cooldowns.
    pub cooldowns: Arc<CooldownTracker>,
    /// Off-task provider dispatcher.
    pub generator: Generator,
}

impl Data {
    /// Builds the command context from a validated configuration.
    #[must_use]
    pub fn new(config: Arc<Config>, generator: Generator) -> Self {
        let gate = AccessGate::new(RoleRegistry::from_config(&config.roles));
        Self {
            config,
            gate,
            cooldowns: Arc::new(CooldownTracker::new()),
            generator,
        }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("gate", &self.gate)
            .field("active_cooldowns", &self.cooldowns.active_cooldowns())
            .finish_non_exhaustive()
    }
}

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, CommandError>;

/// Every command exposed by the bot.
#[must_use]
pub fn commands() -> Vec<poise::Command<Data, CommandError>> {
    vec![
        crate::ask::ask(),
        crate::image::image(),
        crate::member::member(),
        crate::help::help(),
    ]
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, CommandError> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Reply for a failed check, or `None` when the failure must be escalated.
fn check_failure_reply(error: Option<&CommandError>) -> Option<Reply> {
    error.and_then(CommandError::user_reply)
}

/// Turns expected failures into replies and escalates everything else.
async fn on_error(error: poise::FrameworkError<'_, Data, CommandError>) {
    let expected = match &error {
        poise::FrameworkError::CommandCheckFailed { error, ctx, .. } => {
            check_failure_reply(error.as_ref()).map(|reply| (*ctx, reply))
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            Some((*ctx, Reply::insufficient_permissions()))
        }
        _ => None,
    };

    if let Some((ctx, reply)) = expected {
        if let Err(e) = ctx.send(reply.into()).await {
            warn!("Failed to send reply for /{}: {}", ctx.command().qualified_name, e);
        }
        return;
    }

    error!("Unhandled error: {}", error);
    if let Err(e) = poise::builtins::on_error(error).await {
        error!("Error while handling error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use relay_config::{ImageModelConfig, TextModelConfig};
    use relay_openai::{GenerativeClient, ProviderError};

    struct Offline;

    #[async_trait]
    impl GenerativeClient for Offline {
        async fn complete(&self, _: &str, _: &TextModelConfig) -> Result<String, ProviderError> {
            Err(ProviderError::Empty("completion"))
        }

        async fn create_image(&self, _: &str, _: &ImageModelConfig) -> Result<String, ProviderError> {
            Err(ProviderError::Empty("image"))
        }
    }

    #[test]
    fn test_command_tree() {
        let commands = commands();
        let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ask", "image", "member", "help"]);

        let sub = |parent: &str| -> Vec<String> {
            commands
                .iter()
                .find(|c| c.name == parent)
                .map(|c| c.subcommands.iter().map(|s| s.name.clone()).collect())
                .unwrap_or_default()
        };
        assert_eq!(sub("ask"), ["babbage"]);
        assert_eq!(sub("image"), ["generate"]);
        assert_eq!(sub("member"), ["block", "unblock"]);
    }

    #[test]
    fn test_generation_commands_have_checks() {
        for command in commands() {
            if command.name == "ask" || command.name == "image" {
                for sub in &command.subcommands {
                    assert_eq!(sub.checks.len(), 2, "/{} {}", command.name, sub.name);
                }
            }
        }
    }

    #[test]
    fn test_check_failures_without_reply_escalate() {
        let discord = CommandError::Discord(poise::serenity_prelude::Error::Other("gateway closed"));
        assert!(check_failure_reply(Some(&discord)).is_none());
        assert!(check_failure_reply(None).is_none());

        let denied = CommandError::AccessDenied("Bot access denied".to_string());
        let reply = check_failure_reply(Some(&denied)).unwrap();
        assert_eq!(reply.content.as_deref(), Some("Bot access denied"));
    }

    #[test]
    fn test_data_from_config() {
        let config = Arc::new(Config::default());
        let generator = Generator::new(Arc::new(Offline));
        let data = Data::new(config, generator);
        assert_eq!(data.cooldowns.active_cooldowns(), 0);
        assert!(format!("{data:?}").contains("Data"));
    }
}
