//! Text generation commands.

use crate::checks::{command_cooldown, not_banned};
use crate::error::CommandError;
use crate::framework::Context;
use crate::generation::run_generation;
use relay_config::ASK_COMMAND;
use relay_openai::GenerationRequest;

/// Ask different OpenAI models
#[poise::command(slash_command, guild_only, subcommands("babbage"), subcommand_required)]
pub async fn ask(_ctx: Context<'_>) -> Result<(), CommandError> {
    Ok(())
}

/// Ask the Babbage model
#[poise::command(
    slash_command,
    guild_only,
    check = "not_banned",
    check = "command_cooldown"
)]
pub async fn babbage(
    ctx: Context<'_>,
    #[description = "What to ask the model"] prompt: String,
) -> Result<(), CommandError> {
    let params = ctx.data().config.commands.ask.model.clone();
    run_generation(ctx, GenerationRequest::text(ASK_COMMAND, prompt, params)).await
}
