//! Bot error types with HTTP status code mapping.
//!
//! [`BotError`] is the central error type of the crate. Scraping, chat and
//! dashboard code all return it; on the dashboard each variant maps to a
//! specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All dashboard error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "unauthorized"
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Crate-wide error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Access          | 401 Unauthorized          |
/// | 3000–3999 | Configuration   | 500 Internal Server Error |
/// | 4000–4999 | Upstream        | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Request to the election site or chat server failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Chat websocket failure.
    #[error("websocket error: {0}")]
    WebSocket(#[from] Box<tokio_tungstenite::tungstenite::Error>),

    /// The election page did not have the expected structure.
    #[error("failed to parse election page: {0}")]
    Parse(String),

    /// The chat server rejected a request or returned something unexpected.
    #[error("chat error: {0}")]
    Chat(String),

    /// Missing or malformed configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Privileged dashboard route called without the right password.
    #[error("unauthorized")]
    Unauthorized,

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for BotError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

impl BotError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::Unauthorized => 2001,
            Self::Config(_) => 3001,
            Self::Http(_) => 4001,
            Self::WebSocket(_) => 4002,
            Self::Parse(_) => 4003,
            Self::Chat(_) => 4004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Http(_) | Self::WebSocket(_) | Self::Parse(_) | Self::Chat(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
