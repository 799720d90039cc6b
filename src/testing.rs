//! Test doubles and fixtures shared by the unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use crate::chat::ChatRoom;
use crate::config::BotConfig;
use crate::context::BotContext;
use crate::domain::{ElectionState, Nominee, Phase};
use crate::error::BotError;
use crate::scrape::ElectionSource;

pub(crate) fn test_config() -> BotConfig {
    BotConfig {
        listen_addr: ([127, 0, 0, 1], 0).into(),
        chat_domain: "stackoverflow.com".to_string(),
        chat_room_id: 190503,
        chat_cookie: "acct=t=test".to_string(),
        bot_user_id: 99,
        bot_user_name: "ElectionBot".to_string(),
        election_url: "https://stackoverflow.com/election/12".to_string(),
        election_qa: None,
        election_chatroom: None,
        debug: false,
        verbose: false,
        throttle_secs: 10,
        scrape_interval_mins: 5,
        max_message_length: 120,
        scrape_timeout_secs: 30,
        scrape_max_attempts: 3,
        scrape_retry_backoff_secs: 5,
        ending_soon_mins: 60,
        dashboard_password: Some("hunter2".to_string()),
    }
}

pub(crate) fn nominee(user_id: u64, name: &str) -> Nominee {
    Nominee {
        user_id,
        user_name: name.to_string(),
        user_years: "member for 5 years".to_string(),
        score: "30/40".to_string(),
        permalink: format!(
            "https://stackoverflow.com/election/12?tab=nomination#post-{user_id}"
        ),
    }
}

/// An election in its nomination phase at `now`, with a primary ahead.
pub(crate) fn sample_election(now: DateTime<Utc>) -> ElectionState {
    ElectionState {
        election_url: "https://stackoverflow.com/election/12".to_string(),
        site_url: "https://stackoverflow.com".to_string(),
        title: "2021 Moderator Election".to_string(),
        updated: now,
        date_nomination: now - Duration::days(1),
        date_primary: Some(now + Duration::days(6)),
        date_election: now + Duration::days(13),
        date_ended: now + Duration::days(20),
        num_candidates: 2,
        num_positions: 2,
        rep_vote: ElectionState::DEFAULT_REP_VOTE,
        rep_nominate: 3000,
        nominees: vec![nominee(1, "alice"), nominee(2, "bob")],
        winners: Vec::new(),
        phase: Some(Phase::Nomination),
        results_url: None,
        stat_voters: None,
        qna_url: Some("https://meta.stackoverflow.com/q/400000".to_string()),
        chat_url: Some("https://chat.stackoverflow.com/rooms/217".to_string()),
        cancelled_text: None,
    }
}

/// The same election once it has ended with `winners`.
pub(crate) fn ended_election(now: DateTime<Utc>, winners: Vec<Nominee>) -> ElectionState {
    let mut election = sample_election(now);
    election.date_nomination = now - Duration::days(21);
    election.date_primary = Some(now - Duration::days(14));
    election.date_election = now - Duration::days(7);
    election.date_ended = now - Duration::hours(1);
    election.phase = Some(Phase::Ended);
    election.results_url = Some("https://www.opavote.com/results/5551234".to_string());
    election.stat_voters = Some("Votes were cast by 2,345 voters.".to_string());
    election.winners = winners;
    election
}

/// Chat room that records every message instead of sending it.
#[derive(Debug, Default)]
pub(crate) struct RecordingRoom {
    sent: Mutex<Vec<String>>,
    fail: AtomicBool,
    left: AtomicBool,
}

impl RecordingRoom {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn fail_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn has_left(&self) -> bool {
        self.left.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ChatRoom for RecordingRoom {
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(BotError::Chat("room unavailable".to_string()));
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }

    async fn leave(&self) -> Result<(), BotError> {
        self.left.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Election source that serves queued results, then a fixed snapshot.
#[derive(Debug)]
pub(crate) struct QueuedSource {
    queue: Mutex<VecDeque<Result<ElectionState, BotError>>>,
    fallback: Mutex<ElectionState>,
    calls: AtomicUsize,
}

impl QueuedSource {
    pub(crate) fn fixed(election: ElectionState) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(election),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn push(&self, election: ElectionState) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(election));
    }

    pub(crate) fn push_err(&self, err: BotError) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(err));
    }

    /// Replaces the snapshot served once the queue is drained.
    pub(crate) fn set_fallback(&self, election: ElectionState) {
        *self.fallback.lock().unwrap_or_else(PoisonError::into_inner) = election;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ElectionSource for QueuedSource {
    async fn scrape(&self, _now: DateTime<Utc>) -> Result<ElectionState, BotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let queued = self
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        queued.unwrap_or_else(|| {
            Ok(self
                .fallback
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone())
        })
    }
}

pub(crate) fn test_context(
    election: ElectionState,
    room: Arc<dyn ChatRoom>,
    source: Arc<dyn ElectionSource>,
) -> BotContext {
    BotContext::new(test_config(), election, room, source, Utc::now())
}
