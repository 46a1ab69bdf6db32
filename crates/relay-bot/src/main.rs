//! Main entry point for Relay Bot.

use relay_bot::{init_tracing, BotResult, RelayBot};
use relay_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let loaded = ConfigLoader::load();

    // Logging comes up even when the configuration is broken.
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging)?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Relay Bot");
    let bot = RelayBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot failed: {}", e);
        return Err(e);
    }

    Ok(())
}
