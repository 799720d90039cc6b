//! Bot configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Chat credentials and the election URL are required; every
//! other key falls back to a default.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::BotError;

/// Highest throttle (in seconds) at which mentions are still answered.
pub const MENTION_THROTTLE_LIMIT_SECS: u64 = 15;

/// Top-level bot configuration.
///
/// Loaded once at startup via [`BotConfig::from_env`] and shared read-only
/// through the bot context.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Socket address for the dashboard HTTP server.
    pub listen_addr: SocketAddr,

    /// Chat host without the `chat.` prefix (e.g. `stackoverflow.com`).
    pub chat_domain: String,

    /// Numeric id of the room the bot lives in.
    pub chat_room_id: u64,

    /// Raw `Cookie` header of an authenticated chat session.
    pub chat_cookie: String,

    /// Chat user id of the bot account.
    pub bot_user_id: i64,

    /// Chat display name of the bot account.
    pub bot_user_name: String,

    /// Election page URL, e.g. `https://stackoverflow.com/election/12`.
    pub election_url: String,

    /// Fallback election questionnaire URL.
    pub election_qa: Option<String>,

    /// Fallback election chat room URL.
    pub election_chatroom: Option<String>,

    /// Debug mode: short throttle, test trigger, chattier logs.
    pub debug: bool,

    /// Verbose logging of incoming events.
    pub verbose: bool,

    /// Minimum seconds between two bot responses.
    pub throttle_secs: u64,

    /// Minutes between periodic rescrapes.
    pub scrape_interval_mins: u64,

    /// Messages longer than this (in characters) are ignored.
    pub max_message_length: usize,

    /// Per-request timeout for election page fetches.
    pub scrape_timeout_secs: u64,

    /// Attempts for the initial scrape before giving up.
    pub scrape_max_attempts: u32,

    /// Initial backoff between initial-scrape attempts (doubles each retry).
    pub scrape_retry_backoff_secs: u64,

    /// Window before the end of the election in which "ending soon" is said.
    pub ending_soon_mins: i64,

    /// Password for privileged dashboard routes. `None` disables them.
    pub dashboard_password: Option<String>,
}

impl BotConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    /// `ELECTION_URL` may be replaced by `ELECTION_SITE` + `ELECTION_NUM`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] if a required variable is missing or
    /// `LISTEN_ADDR` / `CHAT_ROOM_ID` / `BOT_USER_ID` cannot be parsed.
    pub fn from_env() -> Result<Self, BotError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .map_err(|e| BotError::Config(format!("LISTEN_ADDR: {e}")))?;

        let chat_domain = required("CHAT_DOMAIN")?;
        let chat_room_id = required_parsed("CHAT_ROOM_ID")?;
        let chat_cookie = required("CHAT_COOKIE")?;
        let bot_user_id = required_parsed("BOT_USER_ID")?;
        let bot_user_name = required("BOT_USER_NAME")?;

        let election_url = match std::env::var("ELECTION_URL") {
            Ok(url) => url,
            Err(_) => {
                let site = required("ELECTION_SITE")?;
                let num = required("ELECTION_NUM")?;
                format!("{}/election/{num}", site.trim_end_matches('/'))
            }
        };

        let debug = parse_env_bool("DEBUG", false);
        let verbose = parse_env_bool("VERBOSE", false);

        // Debug mode always uses a short throttle.
        let throttle_secs = if debug {
            5
        } else {
            parse_env("THROTTLE_SECS", 10)
        };

        Ok(Self {
            listen_addr,
            chat_domain,
            chat_room_id,
            chat_cookie,
            bot_user_id,
            bot_user_name,
            election_url,
            election_qa: optional("ELECTION_QA"),
            election_chatroom: optional("ELECTION_CHATROOM"),
            debug,
            verbose,
            throttle_secs,
            scrape_interval_mins: parse_env("SCRAPE_INTERVAL_MINS", 5),
            max_message_length: parse_env("MAX_MESSAGE_LENGTH", 120),
            scrape_timeout_secs: parse_env("SCRAPE_TIMEOUT_SECS", 30),
            scrape_max_attempts: parse_env("SCRAPE_MAX_ATTEMPTS", 3),
            scrape_retry_backoff_secs: parse_env("SCRAPE_RETRY_BACKOFF_SECS", 5),
            ending_soon_mins: parse_env("ENDING_SOON_MINS", 60),
            dashboard_password: optional("PASSWORD"),
        })
    }

    /// Minimum interval between two bot responses.
    #[must_use]
    pub const fn throttle(&self) -> Duration {
        Duration::from_secs(self.throttle_secs)
    }

    /// Interval between periodic rescrapes.
    #[must_use]
    pub const fn scrape_interval(&self) -> Duration {
        Duration::from_secs(self.scrape_interval_mins * 60)
    }

    /// Whether mentions of the bot are answered at the configured throttle.
    #[must_use]
    pub const fn answers_mentions(&self) -> bool {
        self.throttle_secs <= MENTION_THROTTLE_LIMIT_SECS
    }

    /// Chat server base URL, e.g. `https://chat.stackoverflow.com`.
    #[must_use]
    pub fn chat_base_url(&self) -> String {
        format!("https://chat.{}", self.chat_domain)
    }

    /// Browser URL of the bot's room.
    #[must_use]
    pub fn chat_room_url(&self) -> String {
        format!("{}/rooms/{}", self.chat_base_url(), self.chat_room_id)
    }
}

fn required(key: &str) -> Result<String, BotError> {
    std::env::var(key).map_err(|_| BotError::Config(format!("{key} is not set")))
}

fn required_parsed<T: std::str::FromStr>(key: &str) -> Result<T, BotError> {
    required(key)?
        .parse()
        .map_err(|_| BotError::Config(format!("{key} is not a valid value")))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
