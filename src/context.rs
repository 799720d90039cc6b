//! Explicit bot context shared by the dispatcher, announcer, rescraper and
//! dashboard.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::chat::ChatRoom;
use crate::config::BotConfig;
use crate::domain::{BotFlags, ElectionState};
use crate::error::BotError;
use crate::scrape::ElectionSource;

/// Everything the bot's components share.
///
/// Locks guard plain data only and are released before any network call.
#[derive(Debug, Clone)]
pub struct BotContext {
    /// Immutable configuration.
    pub config: Arc<BotConfig>,
    /// Latest election snapshot.
    pub election: Arc<RwLock<ElectionState>>,
    /// One-time announcement flags.
    pub flags: Arc<Mutex<BotFlags>>,
    /// Room the bot posts into.
    pub room: Arc<dyn ChatRoom>,
    /// Where fresh snapshots come from.
    pub source: Arc<dyn ElectionSource>,
    /// Process start, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl BotContext {
    /// Builds a context around an initial snapshot.
    #[must_use]
    pub fn new(
        config: BotConfig,
        election: ElectionState,
        room: Arc<dyn ChatRoom>,
        source: Arc<dyn ElectionSource>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            election: Arc::new(RwLock::new(election)),
            flags: Arc::new(Mutex::new(BotFlags::default())),
            room,
            source,
            started_at,
        }
    }

    /// Copy of the current election snapshot.
    pub async fn election(&self) -> ElectionState {
        self.election.read().await.clone()
    }

    /// Copy of the current flags.
    pub async fn flags(&self) -> BotFlags {
        *self.flags.lock().await
    }

    /// Scrapes a fresh snapshot and swaps it in.
    ///
    /// Boundary firings refresh too, so the stored snapshot is not a
    /// baseline for change detection.
    ///
    /// # Errors
    ///
    /// Propagates the scrape error; the stored snapshot is left untouched.
    pub async fn refresh_election(&self, now: DateTime<Utc>) -> Result<ElectionState, BotError> {
        let fresh = self.source.scrape(now).await?;
        *self.election.write().await = fresh.clone();
        Ok(fresh)
    }

    /// Re-scrapes, falling back to the stored snapshot on failure.
    pub async fn refresh_or_stale(&self, now: DateTime<Utc>) -> ElectionState {
        match self.refresh_election(now).await {
            Ok(current) => current,
            Err(err) => {
                tracing::warn!(error = %err, "rescrape failed, using stale election state");
                self.election().await
            }
        }
    }

    /// Posts to the room, logging a failure instead of returning it.
    ///
    /// Returns whether the message went out.
    pub async fn say(&self, text: &str) -> bool {
        match self.room.send_message(text).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to send chat message");
                false
            }
        }
    }

    /// Says goodbye (debug mode only) and leaves the room.
    pub async fn farewell(&self) {
        if self.config.debug {
            self.say("Goodbye!").await;
        }
        if let Err(err) = self.room.leave().await {
            tracing::warn!(error = %err, "failed to leave chat room");
        }
    }
}
