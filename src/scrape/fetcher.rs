//! HTTP election source backed by `reqwest`.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::ElectionSource;
use super::parser::{PageContext, parse_election_page};
use crate::config::BotConfig;
use crate::domain::ElectionState;
use crate::error::BotError;

/// User agent sent with every election page request.
pub const USER_AGENT: &str = concat!("election-bot/", env!("CARGO_PKG_VERSION"));

/// Fetches the nomination tab of the configured election page.
#[derive(Debug, Clone)]
pub struct HttpElectionSource {
    client: reqwest::Client,
    election_url: String,
    fallback_qa: Option<String>,
    fallback_chat: Option<String>,
}

impl HttpElectionSource {
    /// Builds a source with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BotConfig) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(Duration::from_secs(config.scrape_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            election_url: config.election_url.trim_end_matches('/').to_string(),
            fallback_qa: config.election_qa.clone(),
            fallback_chat: config.election_chatroom.clone(),
        })
    }

    /// URL actually requested.
    #[must_use]
    pub fn page_url(&self) -> String {
        format!("{}?tab=nomination", self.election_url)
    }
}

#[async_trait::async_trait]
impl ElectionSource for HttpElectionSource {
    async fn scrape(&self, now: DateTime<Utc>) -> Result<ElectionState, BotError> {
        let url = self.page_url();
        tracing::debug!(%url, "fetching election page");

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let page = PageContext {
            election_url: &self.election_url,
            fallback_qa: self.fallback_qa.as_deref(),
            fallback_chat: self.fallback_chat.as_deref(),
        };
        let election = parse_election_page(&html, &page, now)?;
        tracing::debug!(
            phase = ?election.phase,
            nominees = election.nominees.len(),
            "election page scraped"
        );
        Ok(election)
    }
}
