//! Member access management: blocking and unblocking bot use.

use crate::access::{Access, Action};
use crate::error::CommandError;
use crate::framework::Context;
use crate::reply::Reply;
use crate::roles::Caller;
use async_trait::async_trait;
use poise::serenity_prelude::{self as serenity, Mentionable, RoleId};
use relay_common::Role;
use std::sync::Arc;
use tracing::{info, warn};

/// Reply sent when the ban role id is missing from configuration.
pub const BAN_ROLE_UNSET: &str = "The ban role is not configured";

/// Role mutations on a target member.
#[async_trait]
pub trait RoleEditor: Send {
    /// Whether the member currently holds `role`.
    fn has_role(&self, role: RoleId) -> bool;

    /// Grants `role`.
    async fn add_role(&mut self, role: RoleId) -> Result<(), serenity::Error>;

    /// Revokes `role`.
    async fn remove_role(&mut self, role: RoleId) -> Result<(), serenity::Error>;
}

/// A guild member edited through the Discord HTTP API.
pub struct GuildMember {
    http: Arc<serenity::Http>,
    member: serenity::Member,
}

impl GuildMember {
    /// Wraps `member` for editing.
    pub fn new(http: Arc<serenity::Http>, member: serenity::Member) -> Self {
        Self { http, member }
    }
}

#[async_trait]
impl RoleEditor for GuildMember {
    fn has_role(&self, role: RoleId) -> bool {
        self.member.roles.contains(&role)
    }

    async fn add_role(&mut self, role: RoleId) -> Result<(), serenity::Error> {
        self.member.add_role(&self.http, role).await?;
        if !self.member.roles.contains(&role) {
            self.member.roles.push(role);
        }
        Ok(())
    }

    async fn remove_role(&mut self, role: RoleId) -> Result<(), serenity::Error> {
        self.member.remove_role(&self.http, role).await?;
        self.member.roles.retain(|held| *held != role);
        Ok(())
    }
}

/// Result of a block or unblock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// The member now holds the ban role.
    Blocked,
    /// The ban role was removed.
    Unblocked,
    /// Unblock was requested for a member without the ban role.
    NotBlocked,
}

impl BlockOutcome {
    /// Confirmation text for the member described by `label`.
    #[must_use]
    pub fn message(self, label: &str) -> String {
        match self {
            Self::Blocked => format!("{label} blocked"),
            Self::Unblocked => format!("{label} unblocked"),
            Self::NotBlocked => format!("{label} is not blocked"),
        }
    }
}

/// Gives `target` the ban role. Already blocked members are left as is.
pub async fn block_member<E>(target: &mut E, ban: RoleId) -> Result<BlockOutcome, serenity::Error>
where
    E: RoleEditor + ?Sized,
{
    if !target.has_role(ban) {
        target.add_role(ban).await?;
    }
    Ok(BlockOutcome::Blocked)
}

/// Removes the ban role from `target`, if held.
pub async fn unblock_member<E>(target: &mut E, ban: RoleId) -> Result<BlockOutcome, serenity::Error>
where
    E: RoleEditor + ?Sized,
{
    if !target.has_role(ban) {
        return Ok(BlockOutcome::NotBlocked);
    }
    target.remove_role(ban).await?;
    Ok(BlockOutcome::Unblocked)
}

/// `<@id> (name)` label used in confirmations.
#[must_use]
pub fn member_label(member: &serenity::Member) -> String {
    format!("{} ({})", member.mention(), member.user.name)
}

/// Access management commands
#[poise::command(
    slash_command,
    guild_only,
    subcommands("block", "unblock"),
    subcommand_required,
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn member(_ctx: Context<'_>) -> Result<(), CommandError> {
    Ok(())
}

/// Block bot access for a user
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn block(
    ctx: Context<'_>,
    #[description = "Member to block"] member: serenity::Member,
) -> Result<(), CommandError> {
    let Some(ban) = authorize(ctx).await? else {
        return Ok(());
    };

    let label = member_label(&member);
    let mut target = GuildMember::new(ctx.serenity_context().http.clone(), member);
    let outcome = block_member(&mut target, ban).await?;

    ctx.send(Reply::notice(outcome.message(&label)).into()).await?;
    info!("{} blocked {}", ctx.author().name, label);
    Ok(())
}

/// Unblock bot access for a user
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn unblock(
    ctx: Context<'_>,
    #[description = "Member to unblock"] member: serenity::Member,
) -> Result<(), CommandError> {
    let Some(ban) = authorize(ctx).await? else {
        return Ok(());
    };

    let label = member_label(&member);
    let mut target = GuildMember::new(ctx.serenity_context().http.clone(), member);
    let outcome = unblock_member(&mut target, ban).await?;

    ctx.send(Reply::notice(outcome.message(&label)).into()).await?;
    if outcome == BlockOutcome::Unblocked {
        info!("{} unblocked {}", ctx.author().name, label);
    }
    Ok(())
}

/// Runs the admin role check and resolves the ban role. Replies to the
/// caller and returns `None` when the command cannot proceed.
async fn authorize(ctx: Context<'_>) -> Result<Option<RoleId>, CommandError> {
    let caller = Caller::from_context(ctx).await;
    if let Access::Denied(reason) = ctx.data().gate.check(&caller, Action::ManageMembers) {
        ctx.send(Reply::denied(reason).into()).await?;
        return Ok(None);
    }

    match ctx.data().gate.registry().id(Role::Ban) {
        Some(ban) => Ok(Some(ban)),
        None => {
            warn!("/{} used while roles.ban is unset", ctx.command().qualified_name);
            ctx.send(Reply::notice(BAN_ROLE_UNSET).into()).await?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const BAN: RoleId = RoleId::new(10);

    #[derive(Default)]
    struct FakeMember {
        roles: HashSet<RoleId>,
        mutations: usize,
    }

    #[async_trait]
    impl RoleEditor for FakeMember {
        fn has_role(&self, role: RoleId) -> bool {
            self.roles.contains(&role)
        }

        async fn add_role(&mut self, role: RoleId) -> Result<(), serenity::Error> {
            self.mutations += 1;
            self.roles.insert(role);
            Ok(())
        }

        async fn remove_role(&mut self, role: RoleId) -> Result<(), serenity::Error> {
            self.mutations += 1;
            self.roles.remove(&role);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_unblock_without_ban_role_does_nothing() {
        let mut target = FakeMember::default();
        let outcome = unblock_member(&mut target, BAN).await.unwrap();

        assert_eq!(outcome, BlockOutcome::NotBlocked);
        assert_eq!(target.mutations, 0);
        assert_eq!(outcome.message("<@1> (dave)"), "<@1> (dave) is not blocked");
    }

    #[tokio::test]
    async fn test_block_then_unblock() {
        let mut target = FakeMember::default();

        let blocked = block_member(&mut target, BAN).await.unwrap();
        assert!(target.has_role(BAN));

        let unblocked = unblock_member(&mut target, BAN).await.unwrap();
        assert!(!target.has_role(BAN));

        assert_eq!(target.mutations, 2);
        assert_ne!(blocked.message("x"), unblocked.message("x"));
        assert_eq!(blocked.message("<@1> (dave)"), "<@1> (dave) blocked");
        assert_eq!(unblocked.message("<@1> (dave)"), "<@1> (dave) unblocked");
    }

    #[tokio::test]
    async fn test_block_is_idempotent() {
        let mut target = FakeMember::default();
        target.roles.insert(BAN);

        assert_eq!(block_member(&mut target, BAN).await.unwrap(), BlockOutcome::Blocked);
        assert_eq!(target.mutations, 0);
    }
}
