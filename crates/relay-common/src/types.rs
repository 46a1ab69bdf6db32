//! Common type definitions shared by configuration and command handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical guild roles the bot knows about.
///
/// Each role maps to a guild-specific role id in the configuration. Only
/// [`Role::Ban`] and [`Role::Admin`] drive behaviour today; the remaining
/// roles are carried so the registry mirrors the server's role ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Members blocked from using the bot.
    Ban,
    /// Bot administrators.
    Admin,
    /// Newly joined members.
    Newbie,
    /// Regular members.
    Constant,
    /// Long-standing members.
    Old,
    /// Members since the server's early days.
    EternalOld,
    /// Trusted members with owner-like standing.
    PseudoOwner,
}

impl Role {
    /// Every known role, in ladder order.
    pub const ALL: [Self; 7] = [
        Self::Ban,
        Self::Admin,
        Self::Newbie,
        Self::Constant,
        Self::Old,
        Self::EternalOld,
        Self::PseudoOwner,
    ];

    /// Returns the configuration key for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Admin => "admin",
            Self::Newbie => "newbie",
            Self::Constant => "constant",
            Self::Old => "old",
            Self::EternalOld => "eternalold",
            Self::PseudoOwner => "pseudoowner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not one of the known roles.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role name: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = "moderator".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("moderator".to_string()));
    }

    #[test]
    fn test_role_serde_names_match_config_keys() {
        let yaml = serde_yaml::to_string(&Role::EternalOld).unwrap();
        assert_eq!(yaml.trim(), "eternalold");
    }
}
