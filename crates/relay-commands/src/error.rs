//! Command error type used as Poise's error parameter.

use crate::cooldown::CooldownError;
use crate::reply::Reply;
use poise::serenity_prelude as serenity;

/// Errors raised while running a command or one of its checks.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// The caller may not run this command.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The caller invoked the command again inside its cooldown window.
    #[error(transparent)]
    Cooldown(#[from] CooldownError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

impl CommandError {
    /// Returns the reply shown to the caller for errors that are expected
    /// outcomes. `None` means the error is unhandled and must be escalated.
    #[must_use]
    pub fn user_reply(&self) -> Option<Reply> {
        match self {
            Self::AccessDenied(reason) => Some(Reply::denied(reason)),
            Self::Cooldown(CooldownError::UserOnCooldown { retry_after, .. }) => {
                Some(Reply::cooldown(*retry_after))
            }
            Self::Discord(_) => None,
        }
    }
}
