//! Chat room adapter: outbound messages behind a trait, inbound events
//! from the Stack Exchange chat websocket.

pub mod client;
pub mod frames;

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::ChatEvent;
use crate::error::BotError;
use crate::scrape::RetryPolicy;

pub use client::SeChatRoom;

/// A chat room the bot can post into.
#[async_trait::async_trait]
pub trait ChatRoom: Send + Sync + fmt::Debug {
    /// Posts a new message.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] or [`BotError::Chat`] if the chat server
    /// rejects the message.
    async fn send_message(&self, text: &str) -> Result<(), BotError>;

    /// Posts `text` as a reply to message `message_id`.
    ///
    /// # Errors
    ///
    /// Same as [`ChatRoom::send_message`].
    async fn reply(&self, message_id: u64, text: &str) -> Result<(), BotError> {
        self.send_message(&reply_text(message_id, text)).await
    }

    /// Leaves the room.
    ///
    /// # Errors
    ///
    /// Same as [`ChatRoom::send_message`].
    async fn leave(&self) -> Result<(), BotError>;
}

/// Chat reply syntax: `:<message id> <text>`.
#[must_use]
pub fn reply_text(message_id: u64, text: &str) -> String {
    format!(":{message_id} {text}")
}

/// Keeps the chat event stream alive across dropped sockets.
///
/// `watch` opens a socket that forwards into the sender it is given and
/// returns the socket task. When that task ends, the socket is reopened
/// after a backoff that starts at `policy.initial_backoff` and doubles
/// while connects fail. After `policy.max_attempts` consecutive failed
/// connects this returns and drops `events`, so the receiver sees the
/// stream close. It also returns once the receiver is gone.
pub async fn keep_watching<F, Fut>(mut watch: F, events: mpsc::Sender<ChatEvent>, policy: RetryPolicy)
where
    F: FnMut(mpsc::Sender<ChatEvent>) -> Fut,
    Fut: Future<Output = Result<JoinHandle<()>, BotError>>,
{
    let mut backoff = policy.initial_backoff;
    let mut failures = 0;
    loop {
        match watch(events.clone()).await {
            Ok(task) => {
                failures = 0;
                backoff = policy.initial_backoff;
                if let Err(err) = task.await {
                    tracing::warn!(error = %err, "chat socket task failed");
                }
                if events.is_closed() {
                    return;
                }
            }
            Err(err) => {
                failures += 1;
                if failures >= policy.max_attempts {
                    tracing::error!(attempts = failures, error = %err, "giving up on chat websocket");
                    return;
                }
                tracing::warn!(attempt = failures, error = %err, "chat websocket connect failed");
            }
        }

        tracing::info!(backoff_secs = backoff.as_secs(), "reconnecting to chat websocket");
        tokio::time::sleep(backoff).await;
        if failures > 0 {
            backoff = backoff.saturating_mul(2);
        }
    }
}
