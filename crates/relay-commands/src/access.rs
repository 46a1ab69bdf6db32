//! Access decisions for bot commands.

use crate::roles::{Caller, RoleRegistry};
use relay_common::Role;
use tracing::debug;

/// Reply shown when a caller may not manage members.
pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// Reply shown when a blocked caller tries to use the bot.
pub const ACCESS_DENIED: &str = "Bot access denied";

/// What the caller is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Block or unblock another member.
    ManageMembers,
    /// Ask for text or image generation.
    Generate,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The caller may proceed.
    Allowed,
    /// The caller may not proceed, with a user-facing reason.
    Denied(&'static str),
}

/// Role-based access gate.
///
/// The Discord `ADMINISTRATOR` permission required for member management is
/// enforced by the framework before a command body runs; the gate adds the
/// role checks on top.
#[derive(Debug, Clone)]
pub struct AccessGate {
    registry: RoleRegistry,
}

impl AccessGate {
    /// Creates a gate over `registry`.
    #[must_use]
    pub const fn new(registry: RoleRegistry) -> Self {
        Self { registry }
    }

    /// Returns the role registry.
    #[must_use]
    pub const fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Decides whether `caller` may perform `action`.
    #[must_use]
    pub fn check(&self, caller: &Caller, action: Action) -> Access {
        let access = match action {
            Action::ManageMembers if self.registry.holds(caller, Role::Admin) => Access::Allowed,
            Action::ManageMembers => Access::Denied(INSUFFICIENT_PERMISSIONS),
            Action::Generate if self.registry.holds(caller, Role::Ban) => {
                Access::Denied(ACCESS_DENIED)
            }
            Action::Generate => Access::Allowed,
        };

        if let Access::Denied(reason) = access {
            debug!("Denied {:?} for user {} ({}): {}", action, caller.name, caller.id, reason);
        }
        access
    }
}
