//! Periodic rescrape of the election page.
//!
//! Each pass swaps in a fresh snapshot, keeps the boundary schedule in
//! line with the page dates and triggers the one-time announcements.
//! Changes are detected against the snapshot the previous pass saw, not
//! the shared one, which boundary firings also refresh.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use super::announcer::{ScheduledAnnouncer, new_nominee_messages, withdrawn_nominee_messages};
use super::responses::{make_url, pluralize};
use crate::context::BotContext;
use crate::domain::{ElectionState, Phase};
use crate::error::BotError;

/// Stop switch shared between the rescraper and whoever may stop it.
#[derive(Debug, Clone)]
pub struct RescraperHandle {
    stop: Arc<watch::Sender<bool>>,
}

impl Default for RescraperHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl RescraperHandle {
    /// A handle in the running state.
    #[must_use]
    pub fn new() -> Self {
        let (stop, _) = watch::channel(false);
        Self {
            stop: Arc::new(stop),
        }
    }

    /// Stops future rescrapes. A pass already under way completes.
    pub fn stop(&self) {
        if !self.stop.send_replace(true) {
            tracing::info!("rescraper stopped");
        }
    }

    /// Whether [`RescraperHandle::stop`] has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.stop.subscribe()
    }
}

/// What one rescrape pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RescrapeReport {
    /// Phase dates moved and the schedule was rebuilt.
    pub dates_changed: bool,
    /// Boundary slots newly armed.
    pub armed: usize,
    /// New-nominee messages sent.
    pub new_nominees: usize,
    /// Withdrawal messages sent.
    pub withdrawn_nominees: usize,
    /// The cancellation notice went out.
    pub announced_cancelled: bool,
    /// The winners went out.
    pub announced_winners: bool,
    /// The "ending soon" reminder went out.
    pub said_ending_soon: bool,
}

/// Periodic election refresher.
#[derive(Debug, Clone)]
pub struct Rescraper {
    ctx: BotContext,
    announcer: Arc<Mutex<ScheduledAnnouncer>>,
    handle: RescraperHandle,
    last_seen: Arc<Mutex<ElectionState>>,
}

impl Rescraper {
    /// Creates a rescraper controlled by `handle`. The first pass diffs
    /// against `baseline`.
    #[must_use]
    pub fn new(
        ctx: BotContext,
        announcer: Arc<Mutex<ScheduledAnnouncer>>,
        handle: RescraperHandle,
        baseline: ElectionState,
    ) -> Self {
        Self {
            ctx,
            announcer,
            handle,
            last_seen: Arc::new(Mutex::new(baseline)),
        }
    }

    /// Runs one rescrape pass as of `now`.
    ///
    /// # Errors
    ///
    /// Returns the scrape error; nothing else happens in that case.
    pub async fn rescrape(&self, now: DateTime<Utc>) -> Result<RescrapeReport, BotError> {
        let mut report = RescrapeReport::default();
        if self.handle.is_stopped() {
            return Ok(report);
        }

        let current = self.ctx.refresh_election(now).await?;
        let previous = std::mem::replace(&mut *self.last_seen.lock().await, current.clone());
        if self.ctx.config.verbose {
            tracing::debug!(?current, "rescraped election");
        }

        let (cancelled, winners) = {
            let mut announcer = self.announcer.lock().await;
            if current.dates_changed(&previous) {
                tracing::info!("election dates changed, rebuilding schedule");
                announcer.stop_all();
                report.dates_changed = true;
            }
            report.armed = announcer.init_all(&current, now);
            (
                announcer.take_cancellation(&current).await,
                announcer.take_winners(&current).await,
            )
        };

        for message in new_nominee_messages(&current, &previous) {
            if self.ctx.say(&message).await {
                report.new_nominees += 1;
            }
        }
        for message in withdrawn_nominee_messages(&current, &previous) {
            if self.ctx.say(&message).await {
                report.withdrawn_nominees += 1;
            }
        }
        if let Some(notice) = cancelled {
            self.ctx.say(&notice).await;
            report.announced_cancelled = true;
        }
        if let Some(message) = winners {
            self.ctx.say(&message).await;
            report.announced_winners = true;
        }

        report.said_ending_soon = self.remind_ending_soon(&current, now).await;

        tracing::info!(
            phase = ?current.phase,
            nominees = current.nominees.len(),
            armed = report.armed,
            "rescrape complete"
        );
        Ok(report)
    }

    /// Sends the "ending soon" reminder once, inside the configured window
    /// before the end of the final voting phase.
    async fn remind_ending_soon(&self, election: &ElectionState, now: DateTime<Utc>) -> bool {
        if election.phase != Some(Phase::Election) {
            return false;
        }
        let remaining = election.date_ended - now;
        if remaining <= Duration::zero()
            || remaining > Duration::minutes(self.ctx.config.ending_soon_mins)
        {
            return false;
        }
        {
            let mut flags = self.ctx.flags.lock().await;
            if flags.said_election_ending_soon {
                return false;
            }
            flags.said_election_ending_soon = true;
        }

        let minutes = remaining.num_minutes().max(1);
        self.ctx
            .say(&format!(
                "**The {} is ending soon.** There are {minutes} minute{} left to cast your ballot!",
                make_url("election", &election.tab_url("election")),
                pluralize(usize::try_from(minutes).unwrap_or(usize::MAX))
            ))
            .await
    }

    /// Spawns the interval loop. The first pass runs one interval from now.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        let period = self.ctx.config.scrape_interval();
        let mut stopped = self.handle.subscribe();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            tracing::info!(interval_secs = period.as_secs(), "rescraper started");
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(err) = self.rescrape(Utc::now()).await {
                            tracing::error!(error = %err, "rescrape failed");
                        }
                    }
                    changed = stopped.changed() => {
                        if changed.is_err() || *stopped.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::info!("rescraper loop exited");
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::OnceLock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration as StdDuration;

    use super::*;
    use crate::chat::ChatRoom;
    use crate::service::announcer::Boundary;
    use crate::testing::{
        QueuedSource, RecordingRoom, ended_election, nominee, sample_election, test_context,
    };

    struct Harness {
        rescraper: Rescraper,
        announcer: Arc<Mutex<ScheduledAnnouncer>>,
        room: Arc<RecordingRoom>,
        source: Arc<QueuedSource>,
        handle: RescraperHandle,
    }

    fn harness(initial: ElectionState) -> Harness {
        let room = Arc::new(RecordingRoom::default());
        let source = Arc::new(QueuedSource::fixed(initial.clone()));
        let ctx = test_context(initial.clone(), Arc::clone(&room) as _, Arc::clone(&source) as _);
        let handle = RescraperHandle::new();
        let announcer = Arc::new(Mutex::new(ScheduledAnnouncer::new(ctx.clone(), handle.clone())));
        Harness {
            rescraper: Rescraper::new(ctx, Arc::clone(&announcer), handle.clone(), initial),
            announcer,
            room,
            source,
            handle,
        }
    }

    async fn pass(h: &Harness, now: DateTime<Utc>) -> RescrapeReport {
        match h.rescraper.rescrape(now).await {
            Ok(report) => report,
            Err(err) => panic!("rescrape should succeed: {err}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_page_is_idempotent() {
        let now = Utc::now();
        let h = harness(sample_election(now));

        let first = pass(&h, now).await;
        let second = pass(&h, now).await;
        assert_eq!(first.armed, 3);
        assert_eq!(second, RescrapeReport::default());
        assert!(h.room.messages().is_empty());
        assert_eq!(h.announcer.lock().await.active_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn moved_dates_rebuild_schedule() {
        let now = Utc::now();
        let initial = sample_election(now);
        let h = harness(initial.clone());
        pass(&h, now).await;

        let mut moved = initial;
        moved.date_ended += Duration::days(2);
        h.source.set_fallback(moved.clone());

        let report = pass(&h, now).await;
        assert!(report.dates_changed);
        assert_eq!(report.armed, 3);
        let announcer = h.announcer.lock().await;
        let end = announcer
            .schedules()
            .into_iter()
            .find(|s| s.boundary == Boundary::ElectionEnd);
        assert_eq!(end.and_then(|s| s.at), Some(moved.date_ended));
    }

    #[tokio::test(start_paused = true)]
    async fn nominee_changes_are_announced() {
        let now = Utc::now();
        let initial = sample_election(now);
        let h = harness(initial.clone());

        let mut next = initial;
        next.nominees.push(nominee(3, "carol"));
        h.source.push(next);

        let report = pass(&h, now).await;
        assert_eq!(report.new_nominees, 1);
        assert_eq!(report.withdrawn_nominees, 0);
        assert_eq!(h.room.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn boundary_refresh_does_not_hide_changes() {
        let now = Utc::now();
        let initial = sample_election(now);
        let h = harness(initial.clone());

        let mut next = initial;
        next.nominees.push(nominee(3, "carol"));
        next.date_ended += Duration::days(1);
        h.source.set_fallback(next);

        // A phase boundary fires first and swaps the shared snapshot.
        assert!(h.announcer.lock().await.init_primary(Some(now + Duration::hours(1)), now));
        tokio::time::sleep(StdDuration::from_secs(61 * 60)).await;
        assert_eq!(h.source.calls(), 1);

        let report = pass(&h, now).await;
        assert!(report.dates_changed);
        assert_eq!(report.new_nominees, 1);
        assert!(h.room.messages().iter().any(|m| m.contains("latest candidate [carol]")));
    }

    /// Room that notes whether the announcer was locked while it sent.
    #[derive(Debug, Default)]
    struct LockCheckingRoom {
        announcer: OnceLock<Arc<Mutex<ScheduledAnnouncer>>>,
        sends: AtomicUsize,
        sends_under_lock: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ChatRoom for LockCheckingRoom {
        async fn send_message(&self, _text: &str) -> Result<(), BotError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            if self.announcer.get().is_some_and(|a| a.try_lock().is_err()) {
                self.sends_under_lock.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        async fn leave(&self) -> Result<(), BotError> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn announcements_are_sent_without_the_announcer_lock() {
        let now = Utc::now();
        let initial = sample_election(now);
        let mut next = initial.clone();
        next.nominees.push(nominee(3, "carol"));
        let source = Arc::new(QueuedSource::fixed(initial.clone()));
        source.push(next);
        source.push(ended_election(now, vec![nominee(1, "alice")]));

        let room = Arc::new(LockCheckingRoom::default());
        let ctx = test_context(initial.clone(), Arc::clone(&room) as _, source as _);
        let handle = RescraperHandle::new();
        let announcer = Arc::new(Mutex::new(ScheduledAnnouncer::new(ctx.clone(), handle.clone())));
        if room.announcer.set(Arc::clone(&announcer)).is_err() {
            panic!("announcer set twice");
        }
        let rescraper = Rescraper::new(ctx, announcer, handle, initial);

        let Ok(first) = rescraper.rescrape(now).await else {
            panic!("first pass should succeed");
        };
        let Ok(second) = rescraper.rescrape(now).await else {
            panic!("second pass should succeed");
        };
        assert_eq!(first.new_nominees, 1);
        assert!(second.announced_winners);
        assert!(room.sends.load(Ordering::SeqCst) >= 2);
        assert_eq!(room.sends_under_lock.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn winners_stop_the_rescraper() {
        let now = Utc::now();
        let h = harness(sample_election(now));
        h.source.push(ended_election(now, vec![nominee(1, "alice")]));

        let report = pass(&h, now).await;
        assert!(report.announced_winners);
        assert!(h.handle.is_stopped());

        // A stopped rescraper does not scrape again.
        let calls = h.source.calls();
        assert_eq!(pass(&h, now).await, RescrapeReport::default());
        assert_eq!(h.source.calls(), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn ending_soon_said_once() {
        let now = Utc::now();
        let mut voting = sample_election(now);
        voting.date_nomination = now - Duration::days(14);
        voting.date_primary = Some(now - Duration::days(7));
        voting.date_election = now - Duration::days(3);
        voting.date_ended = now + Duration::minutes(30);
        voting.phase = Some(Phase::Election);
        let h = harness(voting);

        assert!(pass(&h, now).await.said_ending_soon);
        assert!(!pass(&h, now).await.said_ending_soon);
        let messages = h.room.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages.iter().all(|m| m.contains("30 minutes left")));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_scrape_changes_nothing() {
        let now = Utc::now();
        let initial = sample_election(now);
        let h = harness(initial.clone());
        h.source.push_err(BotError::Parse("bad page".to_string()));

        assert!(h.rescraper.rescrape(now).await.is_err());
        assert_eq!(h.rescraper.ctx.election().await, initial);
        assert_eq!(h.announcer.lock().await.active_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn loop_runs_on_interval_until_stopped() {
        let now = Utc::now();
        let h = harness(sample_election(now));
        let task = h.rescraper.clone().spawn();

        tokio::time::sleep(StdDuration::from_secs(5 * 60 + 1)).await;
        assert_eq!(h.source.calls(), 1);
        tokio::time::sleep(StdDuration::from_secs(5 * 60)).await;
        assert_eq!(h.source.calls(), 2);

        h.handle.stop();
        assert!(task.await.is_ok());
    }
}
