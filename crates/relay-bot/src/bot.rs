//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use relay_commands::{create_framework, start_cooldown_prune_task, Data};
use relay_config::Config;
use relay_openai::{Generator, OpenAiClient};
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct RelayBot {
    config: Arc<Config>,
}

impl RelayBot {
    /// Creates a new bot instance from a validated configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builds the command context. Fails before any connection is made if
    /// the provider client cannot be created.
    pub fn data(&self) -> BotResult<Data> {
        let client = OpenAiClient::new(&self.config.openai)?;
        info!("Using provider at {}", client.base_url());
        Ok(Data::new(
            Arc::clone(&self.config),
            Generator::new(Arc::new(client)),
        ))
    }

    /// Starts the bot and runs until the gateway connection closes.
    pub async fn start(&self) -> BotResult<()> {
        let data = self.data()?;
        let guild_id = self.config.discord.guild_id.map(serenity::GuildId::new);
        let activity = self.config.discord.activity.clone();
        let prune_age = self.config.commands.max_cooldown();

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Bot connected as: {}", ready.user.name);

                    let commands = &framework.options().commands;
                    match guild_id {
                        Some(guild_id) => {
                            poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                            info!("Slash commands registered in guild {}", guild_id);
                        }
                        None => {
                            poise::builtins::register_globally(ctx, commands).await?;
                            info!("Slash commands registered globally");
                        }
                    }

                    ctx.set_presence(
                        Some(serenity::ActivityData::playing(activity)),
                        serenity::OnlineStatus::Online,
                    );

                    start_cooldown_prune_task(Arc::clone(&data.cooldowns), prune_age);
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            &self.config.discord.token,
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }

            info!("Received shutdown signal, starting graceful shutdown");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        info!("Relay bot has shut down");
        Ok(())
    }
}
