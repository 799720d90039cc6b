//! Stack Exchange chat client.
//!
//! Outbound messages go through the chat HTTP API with the session cookie
//! and the room's `fkey`; inbound events arrive over the websocket URL
//! handed out by `/ws-auth`.

use std::time::Duration;

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use scraper::{Html, Selector};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;

use super::ChatRoom;
use super::frames::parse_frame;
use crate::config::BotConfig;
use crate::domain::ChatEvent;
use crate::error::BotError;
use crate::scrape::fetcher::USER_AGENT;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response body of `POST /ws-auth`.
#[derive(Debug, Deserialize)]
struct WsAuth {
    url: String,
}

/// A joined chat room on a Stack Exchange chat server.
#[derive(Debug, Clone)]
pub struct SeChatRoom {
    client: reqwest::Client,
    base_url: String,
    room_id: u64,
    fkey: String,
}

impl SeChatRoom {
    /// Opens the room page with the session cookie and reads its `fkey`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] for an unusable cookie,
    /// [`BotError::Http`] if the room page cannot be loaded, and
    /// [`BotError::Chat`] if the page has no `fkey` (expired session).
    pub async fn connect(config: &BotConfig) -> Result<Self, BotError> {
        let mut headers = HeaderMap::new();
        let cookie = HeaderValue::from_str(&config.chat_cookie)
            .map_err(|e| BotError::Config(format!("CHAT_COOKIE: {e}")))?;
        headers.insert(COOKIE, cookie);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let room_url = config.chat_room_url();
        let html = client
            .get(&room_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let fkey = extract_fkey(&html)
            .ok_or_else(|| BotError::Chat(format!("no fkey on {room_url}; is the session cookie valid?")))?;

        tracing::info!(room = %room_url, "joined chat room");
        Ok(Self {
            client,
            base_url: config.chat_base_url(),
            room_id: config.chat_room_id,
            fkey,
        })
    }

    /// Opens the room websocket and forwards every event for this room to
    /// `events` until the socket closes or the receiver is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if `/ws-auth` fails and
    /// [`BotError::WebSocket`] if the socket cannot be opened.
    pub async fn watch(&self, events: mpsc::Sender<ChatEvent>) -> Result<JoinHandle<()>, BotError> {
        let auth: WsAuth = self
            .client
            .post(format!("{}/ws-auth", self.base_url))
            .form(&[("roomid", self.room_id.to_string()), ("fkey", self.fkey.clone())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut request = format!("{}?l={}", auth.url, Utc::now().timestamp()).into_client_request()?;
        let origin = tokio_tungstenite::tungstenite::http::HeaderValue::from_str(&self.base_url)
            .map_err(|e| BotError::Chat(format!("origin header: {e}")))?;
        request.headers_mut().insert("Origin", origin);

        let (socket, _) = tokio_tungstenite::connect_async(request).await?;
        tracing::info!(room_id = self.room_id, "chat websocket connected");

        let room_id = self.room_id;
        Ok(tokio::spawn(async move {
            let (mut ws_tx, mut ws_rx) = socket.split();
            while let Some(frame) = ws_rx.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        for event in parse_frame(text.as_str(), room_id) {
                            if events.send(event).await.is_err() {
                                tracing::debug!("event receiver dropped, closing websocket");
                                return;
                            }
                        }
                    }
                    Ok(Message::Ping(payload)) => {
                        if ws_tx.send(Message::Pong(payload)).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "chat websocket error");
                        break;
                    }
                }
            }
            tracing::warn!(room_id, "chat websocket closed");
        }))
    }
}

#[async_trait::async_trait]
impl ChatRoom for SeChatRoom {
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/chats/{}/messages/new", self.base_url, self.room_id);
        let response = self
            .client
            .post(&url)
            .form(&[("text", text), ("fkey", self.fkey.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Chat(format!("message rejected ({status}): {body}")));
        }
        tracing::debug!(room_id = self.room_id, chars = text.chars().count(), "message sent");
        Ok(())
    }

    async fn leave(&self) -> Result<(), BotError> {
        let url = format!("{}/chats/leave/{}", self.base_url, self.room_id);
        self.client
            .post(&url)
            .form(&[("quiet", "true"), ("fkey", self.fkey.as_str())])
            .send()
            .await?
            .error_for_status()?;
        tracing::info!(room_id = self.room_id, "left chat room");
        Ok(())
    }
}

/// Value of `input#fkey` on a chat page.
fn extract_fkey(html: &str) -> Option<String> {
    let selector = Selector::parse("input#fkey").ok()?;
    Html::parse_document(html)
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
