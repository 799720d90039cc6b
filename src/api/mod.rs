//! Dashboard HTTP API: route handlers, OpenAPI document and router
//! composition.

pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the dashboard.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "election-bot dashboard"),
    paths(
        handlers::status::status_handler,
        handlers::say::say_handler,
        handlers::system::ping_handler,
        handlers::system::health_handler,
    ),
    components(schemas(
        handlers::status::StatusResponse,
        handlers::say::SayRequest,
        handlers::say::SayResponse,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    ))
)]
pub struct ApiDoc;

/// Builds the complete dashboard router.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = router
        .merge(utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()));

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        OPENAPI_PATH,
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::service::{RescraperHandle, ScheduledAnnouncer};
    use crate::testing::{QueuedSource, RecordingRoom, sample_election, test_context};

    fn app() -> (Router, Arc<RecordingRoom>) {
        let now = chrono::Utc::now();
        let room = Arc::new(RecordingRoom::default());
        let ctx = test_context(
            sample_election(now),
            Arc::clone(&room) as _,
            Arc::new(QueuedSource::fixed(sample_election(now))),
        );
        let announcer = ScheduledAnnouncer::new(ctx.clone(), RescraperHandle::new());
        let state = AppState {
            ctx,
            announcer: Arc::new(Mutex::new(announcer)),
        };
        (build_router().with_state(state), room)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body should be JSON");
        };
        value
    }

    fn get(uri: &str) -> Request<Body> {
        match Request::builder().uri(uri).body(Body::empty()) {
            Ok(request) => request,
            Err(err) => panic!("request should build: {err}"),
        }
    }

    fn say(form: &'static str) -> Request<Body> {
        let request = Request::builder()
            .method("POST")
            .uri("/say")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form));
        match request {
            Ok(request) => request,
            Err(err) => panic!("request should build: {err}"),
        }
    }

    #[tokio::test]
    async fn status_reports_election_and_schedule() {
        let (app, _) = app();
        let Ok(response) = app.oneshot(get("/")).await else {
            panic!("router should respond");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["bot_user_name"], "ElectionBot");
        assert_eq!(json["room_url"], "https://chat.stackoverflow.com/rooms/190503");
        assert_eq!(json["election"]["phase"], "nomination");
        assert_eq!(json["election"]["nominees"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["flags"]["announced_winners"], false);
        assert_eq!(json["schedules"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["schedules"][0]["status"], "unscheduled");
    }

    #[tokio::test]
    async fn ping_and_health() {
        let (app, _) = app();
        let Ok(ping) = app.clone().oneshot(get("/ping")).await else {
            panic!("router should respond");
        };
        assert_eq!(ping.status(), StatusCode::OK);

        let Ok(health) = app.oneshot(get("/health")).await else {
            panic!("router should respond");
        };
        assert_eq!(body_json(health).await["status"], "healthy");
    }

    #[tokio::test]
    async fn say_requires_password() {
        let (app, room) = app();
        let Ok(response) = app.oneshot(say("password=wrong&message=hello")).await else {
            panic!("router should respond");
        };
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"]["code"], 2001);
        assert!(room.messages().is_empty());
    }

    #[tokio::test]
    async fn say_posts_to_room() {
        let (app, room) = app();
        let Ok(response) = app
            .clone()
            .oneshot(say("password=hunter2&message=Hello+room%21"))
            .await
        else {
            panic!("router should respond");
        };
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(room.messages(), vec!["Hello room!".to_string()]);

        let Ok(empty) = app.oneshot(say("password=hunter2&message=+")).await else {
            panic!("router should respond");
        };
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let (app, _) = app();
        let Ok(response) = app.oneshot(get(OPENAPI_PATH)).await else {
            panic!("router should respond");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/say"].is_object());
    }
}
