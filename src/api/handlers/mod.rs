//! Dashboard endpoint handlers.

pub mod say;
pub mod status;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(say::routes())
        .merge(system::routes())
}
