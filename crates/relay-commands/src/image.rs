//! Image generation commands.

use crate::checks::{command_cooldown, not_banned};
use crate::error::CommandError;
use crate::framework::Context;
use crate::generation::run_generation;
use relay_config::IMAGE_COMMAND;
use relay_openai::GenerationRequest;

/// Image processing commands
#[poise::command(slash_command, guild_only, subcommands("generate"), subcommand_required)]
pub async fn image(_ctx: Context<'_>) -> Result<(), CommandError> {
    Ok(())
}

/// Generate an image with DALL-E
#[poise::command(
    slash_command,
    guild_only,
    check = "not_banned",
    check = "command_cooldown"
)]
pub async fn generate(
    ctx: Context<'_>,
    #[description = "Description of the image"] prompt: String,
) -> Result<(), CommandError> {
    let params = ctx.data().config.commands.image.model.clone();
    run_generation(ctx, GenerationRequest::image(IMAGE_COMMAND, prompt, params)).await
}
