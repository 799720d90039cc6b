//! Election page scraping: source trait, HTTP fetcher, HTML parser.

pub mod fetcher;
pub mod parser;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::BotConfig;
use crate::domain::ElectionState;
use crate::error::BotError;

pub use fetcher::HttpElectionSource;
pub use parser::{PageContext, parse_election_page};

/// Anything that can produce a fresh [`ElectionState`].
#[async_trait::async_trait]
pub trait ElectionSource: Send + Sync + fmt::Debug {
    /// Fetches and parses the election page as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] when the page cannot be fetched and
    /// [`BotError::Parse`] when it lacks the expected structure.
    async fn scrape(&self, now: DateTime<Utc>) -> Result<ElectionState, BotError>;
}

/// Bounded retry policy for the startup scrape and chat reconnects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled after every failure.
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Policy taken from `SCRAPE_MAX_ATTEMPTS` / `SCRAPE_RETRY_BACKOFF_SECS`.
    #[must_use]
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            max_attempts: config.scrape_max_attempts.max(1),
            initial_backoff: Duration::from_secs(config.scrape_retry_backoff_secs),
        }
    }
}

/// Scrapes the election once at startup, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the error of the last attempt once `policy.max_attempts`
/// attempts have failed.
pub async fn initial_scrape(
    source: &dyn ElectionSource,
    policy: RetryPolicy,
) -> Result<ElectionState, BotError> {
    let mut backoff = policy.initial_backoff;
    let mut attempt = 1;
    loop {
        match source.scrape(Utc::now()).await {
            Ok(election) => {
                tracing::info!(
                    attempt,
                    phase = ?election.phase,
                    nominees = election.nominees.len(),
                    "initial election scrape succeeded"
                );
                return Ok(election);
            }
            Err(err) if attempt < policy.max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    backoff_secs = backoff.as_secs(),
                    error = %err,
                    "election scrape failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff = backoff.saturating_mul(2);
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(attempt, error = %err, "election scrape failed, giving up");
                return Err(err);
            }
        }
    }
}
