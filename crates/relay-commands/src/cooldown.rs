//! Per-user command cooldowns.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use poise::serenity_prelude::UserId;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

/// How often stale cooldown entries are swept.
pub const PRUNE_INTERVAL: Duration = Duration::from_secs(600);

/// Errors that can occur during cooldown operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CooldownError {
    /// The user invoked the command inside its window.
    #[error("User {user_id} is on cooldown for command '{command}' (remaining: {retry_after:?})")]
    UserOnCooldown {
        /// Discord user id.
        user_id: u64,
        /// Qualified command name.
        command: String,
        /// Time left until the window closes.
        retry_after: Duration,
    },
}

/// Cooldown key: (user id, qualified command name).
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CooldownKey {
    user_id: u64,
    command: String,
}

/// Tracks the last admitted invocation of each command per user.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    cooldowns: DashMap<CooldownKey, Instant>,
}

impl CooldownTracker {
    /// Create a new cooldown tracker
    #[must_use]
    pub fn new() -> Self {
        Self {
            cooldowns: DashMap::new(),
        }
    }

    /// Admits the invocation and starts a new window, or reports how long
    /// the caller must wait.
    pub fn try_acquire(
        &self,
        user_id: UserId,
        command: &str,
        window: Duration,
    ) -> Result<(), CooldownError> {
        self.try_acquire_at(user_id, command, window, Instant::now())
    }

    /// [`try_acquire`](Self::try_acquire) against an explicit clock reading.
    ///
    /// The check and the update happen under the map's entry lock, so two
    /// concurrent calls for the same key never both succeed.
    pub fn try_acquire_at(
        &self,
        user_id: UserId,
        command: &str,
        window: Duration,
        now: Instant,
    ) -> Result<(), CooldownError> {
        let key = CooldownKey {
            user_id: user_id.get(),
            command: command.to_string(),
        };

        match self.cooldowns.entry(key) {
            Entry::Occupied(mut entry) => {
                let elapsed = now.saturating_duration_since(*entry.get());
                if elapsed < window {
                    return Err(CooldownError::UserOnCooldown {
                        user_id: user_id.get(),
                        command: command.to_string(),
                        retry_after: window - elapsed,
                    });
                }
                entry.insert(now);
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
            }
        }

        debug!("Started cooldown for command '{}' (user: {})", command, user_id);
        Ok(())
    }

    /// Get the number of tracked cooldowns
    #[must_use]
    pub fn active_cooldowns(&self) -> usize {
        self.cooldowns.len()
    }

    /// Removes entries whose window started more than `max_age` ago and
    /// returns how many were dropped.
    pub fn prune(&self, max_age: Duration) -> usize {
        self.prune_at(max_age, Instant::now())
    }

    fn prune_at(&self, max_age: Duration, now: Instant) -> usize {
        let before = self.cooldowns.len();
        self.cooldowns
            .retain(|_, started| now.saturating_duration_since(*started) <= max_age);
        before.saturating_sub(self.cooldowns.len())
    }
}

/// Start background task that periodically prunes expired cooldowns.
///
/// `max_age` should be the longest configured window; older entries can no
/// longer deny anything.
pub fn start_cooldown_prune_task(
    tracker: Arc<CooldownTracker>,
    max_age: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(PRUNE_INTERVAL);

        loop {
            interval.tick().await;

            let removed = tracker.prune(max_age);
            if removed > 0 {
                debug!(
                    "Pruned {} expired cooldowns ({} remaining)",
                    removed,
                    tracker.active_cooldowns()
                );
            }
        }
    })
}
