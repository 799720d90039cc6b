//! Bot status overview.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::{BotFlags, ElectionState};
use crate::service::BoundarySchedule;

/// Everything the dashboard shows about the running bot.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Chat name of the bot account.
    pub bot_user_name: String,
    /// Chat user id of the bot account.
    pub bot_user_id: i64,
    /// Room the bot lives in.
    pub room_url: String,
    /// Current UTC time.
    pub now: DateTime<Utc>,
    /// Process start.
    pub started_at: DateTime<Utc>,
    /// Seconds since start.
    pub uptime_secs: i64,
    /// Whether debug mode is on.
    pub debug: bool,
    /// Seconds between replies.
    pub throttle_secs: u64,
    /// Latest election snapshot.
    pub election: ElectionState,
    /// One-time announcement flags.
    pub flags: BotFlags,
    /// Phase announcement slots.
    pub schedules: Vec<BoundarySchedule>,
}

/// `GET /`: Bot and election status.
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    summary = "Bot status",
    description = "Returns the bot identity, the latest election snapshot, the announcement flags and the state of every phase announcement.",
    responses(
        (status = 200, description = "Current status", body = StatusResponse),
    )
)]
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let ctx = &state.ctx;
    let now = Utc::now();
    let election = ctx.election().await;
    let flags = ctx.flags().await;
    let schedules = state.announcer.lock().await.schedules();

    Json(StatusResponse {
        bot_user_name: ctx.config.bot_user_name.clone(),
        bot_user_id: ctx.config.bot_user_id,
        room_url: ctx.config.chat_room_url(),
        now,
        started_at: ctx.started_at,
        uptime_secs: (now - ctx.started_at).num_seconds(),
        debug: ctx.config.debug,
        throttle_secs: ctx.config.throttle_secs,
        election,
        flags,
        schedules,
    })
}

/// Status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(status_handler))
}
