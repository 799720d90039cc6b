//! Privileged endpoint that posts a message into the room as the bot.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::{BotError, ErrorResponse};

/// Form body of `POST /say`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SayRequest {
    /// Dashboard password.
    #[serde(default)]
    pub password: String,
    /// Message to post.
    #[serde(default)]
    pub message: String,
}

/// Result of `POST /say`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SayResponse {
    /// The text that was posted.
    pub sent: String,
}

/// `POST /say`: Post a message as the bot.
///
/// # Errors
///
/// Returns [`BotError::Unauthorized`] on a wrong or unset password,
/// [`BotError::InvalidRequest`] on an empty message, and the chat error
/// if the room rejects it.
#[utoipa::path(
    post,
    path = "/say",
    tag = "Chat",
    summary = "Say something in the room",
    description = "Posts `message` to the bot's room. Requires the dashboard password.",
    request_body(content = SayRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message posted", body = SayResponse),
        (status = 400, description = "Empty message", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 502, description = "Chat server rejected the message", body = ErrorResponse),
    )
)]
pub async fn say_handler(
    State(state): State<AppState>,
    Form(req): Form<SayRequest>,
) -> Result<impl IntoResponse, BotError> {
    let authorized = state
        .ctx
        .config
        .dashboard_password
        .as_deref()
        .is_some_and(|expected| !expected.is_empty() && expected == req.password);
    if !authorized {
        tracing::warn!("rejected /say with wrong password");
        return Err(BotError::Unauthorized);
    }

    let message = req.message.trim();
    if message.is_empty() {
        return Err(BotError::InvalidRequest("message is empty".to_string()));
    }

    state.ctx.room.send_message(message).await?;
    tracing::info!(length = message.len(), "posted message from dashboard");
    Ok((
        StatusCode::OK,
        Json(SayResponse {
            sent: message.to_string(),
        }),
    ))
}

/// Chat routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/say", post(say_handler))
}
