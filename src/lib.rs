//! # election-bot
//!
//! Chat bot that watches a Stack Exchange moderator election page and
//! answers questions about it in a chat room.
//!
//! The election page is scraped into an [`domain::ElectionState`] snapshot
//! whose phase is derived from the page's timestamps. Chat messages are
//! matched against an ordered list of regex intents and answered from the
//! latest snapshot. Phase boundaries are announced with one-shot timers,
//! and a periodic rescrape keeps the snapshot fresh and drives the one-time
//! announcements (new nominees, withdrawals, cancellation, winners).
//!
//! ## Architecture
//!
//! ```text
//! Stack Exchange chat (websocket)      Election page (HTTP)
//!     │                                   │
//!     ├── SeChatRoom (chat/)              ├── HttpElectionSource (scrape/)
//!     │                                   │
//!     ├── Dispatcher (service/)           ├── Rescraper (service/)
//!     │     └── intents (intent/)         └── ScheduledAnnouncer (service/)
//!     │
//!     └── BotContext (config, election, flags, room, source)
//!             │
//!             └── Dashboard (api/)
//! ```

pub mod api;
pub mod app_state;
pub mod chat;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod intent;
pub mod scrape;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
