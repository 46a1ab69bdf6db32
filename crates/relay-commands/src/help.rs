//! Help command backed by Poise's built-in help.

use crate::error::CommandError;
use crate::framework::Context;

/// Show available commands
#[poise::command(slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to show help for"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> Result<(), CommandError> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            ephemeral: true,
            extra_text_at_bottom: "Generation commands have a per-user cooldown.",
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}
