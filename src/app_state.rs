//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::context::BotContext;
use crate::service::ScheduledAnnouncer;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bot context (config, election snapshot, flags, room).
    pub ctx: BotContext,
    /// Phase announcer, for the schedule overview.
    pub announcer: Arc<Mutex<ScheduledAnnouncer>>,
}
