//! Role registry and the caller's view of their own roles.

use crate::framework::Context;
use poise::serenity_prelude::{RoleId, UserId};
use relay_common::Role;
use relay_config::RolesConfig;
use std::collections::{HashMap, HashSet};

/// Mapping from logical roles to guild role ids, fixed at startup.
///
/// Roles configured as `0` are absent, so membership checks against them
/// are always false.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    ids: HashMap<Role, RoleId>,
}

impl RoleRegistry {
    /// Builds the registry from configuration.
    #[must_use]
    pub fn from_config(config: &RolesConfig) -> Self {
        let ids = Role::ALL
            .into_iter()
            .filter_map(|role| match config.id(role) {
                0 => None,
                id => Some((role, RoleId::new(id))),
            })
            .collect();

        Self { ids }
    }

    /// Returns the guild role id for `role`, if configured.
    #[must_use]
    pub fn id(&self, role: Role) -> Option<RoleId> {
        self.ids.get(&role).copied()
    }

    #[cfg(test)]
    fn lookup(&self, name: &str) -> Option<RoleId> {
        name.parse::<Role>().ok().and_then(|role| self.id(role))
    }

    /// Whether `caller` holds `role`.
    #[must_use]
    pub fn holds(&self, caller: &Caller, role: Role) -> bool {
        self.id(role).is_some_and(|id| caller.has_role(id))
    }

    /// Unknown names are never held.
    #[cfg(test)]
    fn holds_named(&self, caller: &Caller, name: &str) -> bool {
        self.lookup(name).is_some_and(|id| caller.has_role(id))
    }
}

/// The invoking user and the roles they hold right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Discord user id.
    pub id: UserId,
    /// Username, for logs.
    pub name: String,
    /// Guild roles held by the user.
    pub roles: HashSet<RoleId>,
}

impl Caller {
    /// Creates a caller view.
    pub fn new(id: UserId, name: impl Into<String>, roles: impl IntoIterator<Item = RoleId>) -> Self {
        Self {
            id,
            name: name.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Builds the caller from an interaction. Outside a guild the caller
    /// holds no roles.
    pub async fn from_context(ctx: Context<'_>) -> Self {
        let roles: Vec<RoleId> = ctx
            .author_member()
            .await
            .map(|member| member.roles.clone())
            .unwrap_or_default();

        Self::new(ctx.author().id, ctx.author().name.clone(), roles)
    }

    /// Whether the caller holds `role`.
    #[must_use]
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }
}
