//! Chat event dispatcher.
//!
//! Turns incoming chat events into at most one reply each. Events pass a
//! fixed filter chain (sender, event type, length, throttle) before they
//! are classified. A reply is composed from the current election snapshot.

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use tokio::time::Instant;

use super::responses::{ResponseContext, compose};
use crate::context::BotContext;
use crate::domain::{ChatEvent, EventType};
use crate::error::BotError;
use crate::intent::{self, ClassifyContext, GENERAL_INTENTS, Intent};

/// What happened to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Filtered out before classification.
    Ignored,
    /// Dropped because the bot spoke too recently.
    Throttled,
    /// No intent matched, or the reply could not be composed.
    Unmatched,
    /// A reply for the intent was sent.
    Replied(Intent),
    /// A reply was composed but sending it failed.
    Failed(Intent),
}

/// Sequential consumer of the chat event stream.
#[derive(Debug)]
pub struct Dispatcher {
    ctx: BotContext,
    last_sent: Option<Instant>,
    mention: Regex,
}

/// Decodes the HTML of a chat message into plain text.
#[must_use]
pub fn decode_content(html: &str) -> String {
    scraper::Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
}

impl Dispatcher {
    /// Creates a dispatcher for the bot described by `ctx.config`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] if the bot name cannot be turned into a
    /// mention pattern.
    pub fn new(ctx: BotContext) -> Result<Self, BotError> {
        let name: String = ctx
            .config
            .bot_user_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let mention = RegexBuilder::new(&format!(r"^@{}\b[\s,:]*", regex::escape(&name)))
            .case_insensitive(true)
            .build()
            .map_err(|e| BotError::Config(format!("BOT_USER_NAME: {e}")))?;
        Ok(Self {
            ctx,
            last_sent: None,
            mention,
        })
    }

    fn throttled(&self) -> bool {
        self.last_sent
            .is_some_and(|last| Instant::now() < last + self.ctx.config.throttle())
    }

    /// Handles one event as of `now`.
    pub async fn handle(&mut self, event: &ChatEvent, now: DateTime<Utc>) -> DispatchOutcome {
        let config = &self.ctx.config;
        if event.user_id == config.bot_user_id || event.is_from_system_user() {
            return DispatchOutcome::Ignored;
        }
        if event.event_type.is_ignored() {
            return DispatchOutcome::Ignored;
        }
        let Some(content) = event.content.as_deref() else {
            return DispatchOutcome::Ignored;
        };

        let decoded = decode_content(content).to_lowercase();
        if config.verbose {
            tracing::debug!(
                user_id = event.user_id,
                user_name = %event.user_name,
                event_type = ?event.event_type,
                content = %decoded,
                "chat event"
            );
        }
        if decoded.chars().count() > config.max_message_length {
            tracing::debug!(length = decoded.chars().count(), "ignoring long message");
            return DispatchOutcome::Ignored;
        }
        if self.throttled() {
            tracing::debug!("throttling, too close to previous message");
            return DispatchOutcome::Throttled;
        }

        let election = self.ctx.election().await;
        let classify_ctx = ClassifyContext {
            api_slug: election.api_slug(),
        };

        let targets_bot = event.event_type.is_targeted()
            && event.target_user_id == Some(config.bot_user_id);
        let prefix = self.mention.find(&decoded).map(|m| m.end());
        let is_mention = targets_bot || prefix.is_some();

        let classified = if is_mention {
            if !config.answers_mentions() {
                return DispatchOutcome::Ignored;
            }
            let text = decoded.get(prefix.unwrap_or(0)..).unwrap_or_default().trim();
            intent::classify_mention(text, &classify_ctx).map(|i| (i, text))
        } else if event.event_type == EventType::MessagePosted && event.target_user_id.is_none() {
            let text = decoded.trim();
            intent::classify(GENERAL_INTENTS, text, &classify_ctx).map(|i| (i, text))
        } else {
            return DispatchOutcome::Ignored;
        };
        let Some((intent, text)) = classified else {
            return DispatchOutcome::Unmatched;
        };

        let response_ctx = ResponseContext {
            election: &election,
            config,
            now,
            started_at: self.ctx.started_at,
            asker_name: &event.user_name,
        };
        let Some(reply) = compose(intent, &response_ctx, text) else {
            return DispatchOutcome::Unmatched;
        };

        let sent = match event.message_id.filter(|_| is_mention) {
            Some(id) => self.ctx.room.reply(id, &reply).await,
            None => self.ctx.room.send_message(&reply).await,
        };
        match sent {
            Ok(()) => {
                self.last_sent = Some(Instant::now());
                tracing::info!(intent = intent.as_str(), user_id = event.user_id, "replied");
                DispatchOutcome::Replied(intent)
            }
            Err(err) => {
                tracing::error!(intent = intent.as_str(), error = %err, "failed to send reply");
                DispatchOutcome::Failed(intent)
            }
        }
    }
}
