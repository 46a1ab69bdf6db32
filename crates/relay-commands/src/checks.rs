//! Framework checks run before a command body.
//!
//! Poise runs a command's checks in declaration order and stops at the
//! first failure, so listing `not_banned` before `command_cooldown` keeps
//! denied callers from consuming their cooldown.

use crate::access::{Access, Action};
use crate::error::CommandError;
use crate::framework::Context;
use crate::roles::Caller;
use tracing::info;

/// Rejects callers holding the ban role.
pub async fn not_banned(ctx: Context<'_>) -> Result<bool, CommandError> {
    let caller = Caller::from_context(ctx).await;

    match ctx.data().gate.check(&caller, Action::Generate) {
        Access::Allowed => Ok(true),
        Access::Denied(reason) => {
            info!(
                "Blocked user {} tried /{}",
                caller.name,
                ctx.command().qualified_name
            );
            Err(CommandError::AccessDenied(reason.to_string()))
        }
    }
}

/// Enforces the per-user cooldown configured for the invoked command.
pub async fn command_cooldown(ctx: Context<'_>) -> Result<bool, CommandError> {
    let command = ctx.command().qualified_name.as_str();
    let Some(window) = ctx.data().config.commands.cooldown_for(command) else {
        return Ok(true);
    };

    ctx.data()
        .cooldowns
        .try_acquire(ctx.author().id, command, window)?;
    Ok(true)
}
