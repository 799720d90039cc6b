//! Scheduled phase announcements and one-time election announcements.
//!
//! Each phase boundary owns one slot that moves
//! `unscheduled → scheduled → fired`, or `scheduled → cancelled` when
//! stopped. Cancelled slots can be armed again; scheduled and fired slots
//! ignore further arming.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::rescraper::RescraperHandle;
use super::responses::{make_url, pluralize};
use super::timer::OneShotTimer;
use crate::context::BotContext;
use crate::domain::{ElectionState, Nominee, Phase};

/// Phase boundary that gets an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Nomination phase opens.
    Nomination,
    /// Primary phase opens.
    Primary,
    /// Final voting phase opens.
    ElectionStart,
    /// Election ends.
    ElectionEnd,
}

impl Boundary {
    /// All boundaries in chronological order.
    pub const ALL: [Self; 4] = [
        Self::Nomination,
        Self::Primary,
        Self::ElectionStart,
        Self::ElectionEnd,
    ];

    /// Snake-case name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nomination => "nomination",
            Self::Primary => "primary",
            Self::ElectionStart => "election_start",
            Self::ElectionEnd => "election_end",
        }
    }

    /// Instant of this boundary in `election`, if it has one.
    #[must_use]
    pub const fn date(self, election: &ElectionState) -> Option<DateTime<Utc>> {
        match self {
            Self::Nomination => Some(election.date_nomination),
            Self::Primary => election.date_primary,
            Self::ElectionStart => Some(election.date_election),
            Self::ElectionEnd => Some(election.date_ended),
        }
    }

    /// Chat message posted when the boundary is reached.
    #[must_use]
    pub fn message(self, election: &ElectionState) -> String {
        match self {
            Self::Nomination => format!(
                "**The {} is now open.** Users may now nominate themselves for the election. **You cannot vote yet.**",
                make_url("nomination phase", &election.tab_url("nomination"))
            ),
            Self::Primary => format!(
                "**The {} is now open.** You can now vote on the candidates' nomination posts. Don't forget to come back in a week for the final election phase!",
                make_url("primary phase", &election.tab_url("primary"))
            ),
            Self::ElectionStart => format!(
                "**The {} is now open.** You may now rank the candidates in your preferred order. Good luck to all candidates!",
                make_url("election's final voting phase", &election.tab_url("election"))
            ),
            Self::ElectionEnd => format!(
                "**The {} has now ended.** The winners will be announced shortly.",
                make_url("election", &election.tab_url("election"))
            ),
        }
    }
}

/// Externally visible state of a boundary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Never armed.
    Unscheduled,
    /// Armed and waiting for its instant.
    Scheduled,
    /// Its instant has been reached.
    Fired,
    /// Stopped before firing.
    Cancelled,
}

/// One row of the schedule overview.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoundarySchedule {
    /// Which boundary.
    pub boundary: Boundary,
    /// Slot state.
    pub status: ScheduleStatus,
    /// Instant the slot is or was armed for.
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Unscheduled,
    Armed(OneShotTimer),
    Cancelled,
}

impl Slot {
    fn status(&self) -> ScheduleStatus {
        match self {
            Self::Unscheduled => ScheduleStatus::Unscheduled,
            Self::Armed(timer) if timer.is_fired() => ScheduleStatus::Fired,
            Self::Armed(_) => ScheduleStatus::Scheduled,
            Self::Cancelled => ScheduleStatus::Cancelled,
        }
    }
}

/// Owner of the boundary timers and the one-time announcements.
#[derive(Debug)]
pub struct ScheduledAnnouncer {
    ctx: BotContext,
    rescraper: RescraperHandle,
    nomination: Slot,
    primary: Slot,
    election_start: Slot,
    election_end: Slot,
    test: Option<OneShotTimer>,
}

impl ScheduledAnnouncer {
    /// Creates an announcer with every slot unscheduled.
    #[must_use]
    pub fn new(ctx: BotContext, rescraper: RescraperHandle) -> Self {
        Self {
            ctx,
            rescraper,
            nomination: Slot::default(),
            primary: Slot::default(),
            election_start: Slot::default(),
            election_end: Slot::default(),
            test: None,
        }
    }

    fn slot(&self, boundary: Boundary) -> &Slot {
        match boundary {
            Boundary::Nomination => &self.nomination,
            Boundary::Primary => &self.primary,
            Boundary::ElectionStart => &self.election_start,
            Boundary::ElectionEnd => &self.election_end,
        }
    }

    fn slot_mut(&mut self, boundary: Boundary) -> &mut Slot {
        match boundary {
            Boundary::Nomination => &mut self.nomination,
            Boundary::Primary => &mut self.primary,
            Boundary::ElectionStart => &mut self.election_start,
            Boundary::ElectionEnd => &mut self.election_end,
        }
    }

    /// Arms `boundary` for `date`.
    ///
    /// Does nothing (and returns `false`) when the date is missing, not
    /// strictly after `now`, or the slot is already scheduled or fired.
    pub fn init_boundary(
        &mut self,
        boundary: Boundary,
        date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(date) = date.filter(|d| *d > now) else {
            return false;
        };
        if matches!(self.slot(boundary), Slot::Armed(_)) {
            return false;
        }

        let ctx = self.ctx.clone();
        let timer = OneShotTimer::schedule(date, now, async move {
            tracing::info!(boundary = boundary.as_str(), "phase boundary reached");
            let election = ctx.refresh_or_stale(Utc::now()).await;
            ctx.say(&boundary.message(&election)).await;
        });
        *self.slot_mut(boundary) = Slot::Armed(timer);
        tracing::info!(boundary = boundary.as_str(), at = %date, "announcement scheduled");
        true
    }

    /// Arms the nomination-phase announcement.
    pub fn init_nomination(&mut self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.init_boundary(Boundary::Nomination, Some(date), now)
    }

    /// Arms the primary-phase announcement; a missing primary is a no-op.
    pub fn init_primary(&mut self, date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        self.init_boundary(Boundary::Primary, date, now)
    }

    /// Arms the final-voting announcement.
    pub fn init_election_start(&mut self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.init_boundary(Boundary::ElectionStart, Some(date), now)
    }

    /// Arms the election-end announcement.
    pub fn init_election_end(&mut self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.init_boundary(Boundary::ElectionEnd, Some(date), now)
    }

    /// Arms every boundary of `election` that lies in the future. Returns
    /// how many slots were newly armed.
    pub fn init_all(&mut self, election: &ElectionState, now: DateTime<Utc>) -> usize {
        Boundary::ALL
            .into_iter()
            .filter(|b| self.init_boundary(*b, b.date(election), now))
            .count()
    }

    /// Debug helper: rescrapes and posts a test message two minutes out.
    pub fn init_test(&mut self, now: DateTime<Utc>) {
        if let Some(previous) = self.test.take() {
            previous.cancel();
        }
        let ctx = self.ctx.clone();
        let at = now + Duration::minutes(2);
        self.test = Some(OneShotTimer::schedule(at, now, async move {
            tracing::info!("test announcement started");
            let election = ctx.refresh_or_stale(Utc::now()).await;
            ctx.say(&format!(
                "Test announcement completed at {}.",
                election.updated.format("%Y-%m-%d %H:%M:%SZ")
            ))
            .await;
        }));
        tracing::info!(%at, "test announcement scheduled");
    }

    /// Cancels every slot that has not fired. In-flight firings finish.
    pub fn stop_all(&mut self) -> usize {
        let mut stopped = 0;
        for boundary in Boundary::ALL {
            let slot = self.slot_mut(boundary);
            if let Slot::Armed(timer) = slot
                && timer.cancel()
            {
                *slot = Slot::Cancelled;
                stopped += 1;
                tracing::info!(boundary = boundary.as_str(), "announcement stopped");
            }
        }
        stopped
    }

    /// State of one boundary slot.
    #[must_use]
    pub fn status(&self, boundary: Boundary) -> ScheduleStatus {
        self.slot(boundary).status()
    }

    /// Overview of all boundary slots.
    #[must_use]
    pub fn schedules(&self) -> Vec<BoundarySchedule> {
        Boundary::ALL
            .into_iter()
            .map(|boundary| {
                let slot = self.slot(boundary);
                BoundarySchedule {
                    boundary,
                    status: slot.status(),
                    at: match slot {
                        Slot::Armed(timer) => Some(timer.deadline()),
                        Slot::Unscheduled | Slot::Cancelled => None,
                    },
                }
            })
            .collect()
    }

    /// Number of slots waiting to fire.
    #[must_use]
    pub fn active_count(&self) -> usize {
        Boundary::ALL
            .into_iter()
            .filter(|b| self.status(*b) == ScheduleStatus::Scheduled)
            .count()
    }

    /// Claims the winners announcement once the election has ended.
    ///
    /// Returns the message the first time only; afterwards every slot is
    /// stopped and the rescraper is told to stop. Sending is left to the
    /// caller so no lock is held while the message goes out.
    pub async fn take_winners(&mut self, election: &ElectionState) -> Option<String> {
        if election.phase != Some(Phase::Ended) || election.winners.is_empty() {
            tracing::debug!(phase = ?election.phase, "no winners to announce");
            return None;
        }
        {
            let mut flags = self.ctx.flags.lock().await;
            if flags.announced_winners {
                tracing::debug!("winners already announced");
                return None;
            }
            flags.announced_winners = true;
            flags.said_election_ending_soon = true;
        }

        self.stop_all();
        self.rescraper.stop();

        let winners = election
            .winners
            .iter()
            .map(|w| make_url(&w.user_name, &election.user_url(w.user_id)))
            .collect::<Vec<_>>()
            .join(", ");
        let mut message = format!(
            "**Congratulations to the winner{}** {winners}!",
            pluralize(election.winners.len())
        );
        if let Some(results) = &election.results_url {
            message.push_str(&format!(
                " You can {}.",
                make_url("view the results online via OpaVote", results)
            ));
        }
        tracing::info!(winners = election.winners.len(), "winners announcement claimed");
        Some(message)
    }

    /// Claims the cancellation notice once, stopping all announcements.
    pub async fn take_cancellation(&mut self, election: &ElectionState) -> Option<String> {
        let notice = election
            .cancelled_text
            .as_deref()
            .filter(|_| election.phase == Some(Phase::Cancelled))?;
        {
            let mut flags = self.ctx.flags.lock().await;
            if flags.announced_cancelled {
                return None;
            }
            flags.announced_cancelled = true;
        }

        self.stop_all();
        self.rescraper.stop();
        tracing::info!("cancellation announcement claimed");
        Some(notice.to_string())
    }
}

/// Welcome messages for candidates that appeared since `previous`.
#[must_use]
pub fn new_nominee_messages(current: &ElectionState, previous: &ElectionState) -> Vec<String> {
    let nomination_tab = current.tab_url("nomination");
    announceable(current.newly_nominated(previous))
        .map(|nominee| {
            format!(
                "**We have a new {}!** Please welcome our latest candidate {}!",
                make_url("nomination", &nomination_tab),
                make_url(&nominee.user_name, &nominee.permalink)
            )
        })
        .collect()
}

/// Notices for candidates that disappeared since `previous`.
#[must_use]
pub fn withdrawn_nominee_messages(current: &ElectionState, previous: &ElectionState) -> Vec<String> {
    announceable(current.newly_withdrawn(previous))
        .map(|nominee| {
            format!(
                "**Attention:** Candidate {} has withdrawn from the election.",
                make_url(&nominee.user_name, &nominee.permalink)
            )
        })
        .collect()
}

/// Drops nominee records that cannot be linked, with a warning each.
fn announceable(nominees: Vec<&Nominee>) -> impl Iterator<Item = &Nominee> {
    nominees.into_iter().filter(|n| {
        let complete = !n.user_name.is_empty() && !n.permalink.is_empty();
        if !complete {
            tracing::warn!(
                user_id = n.user_id,
                user_name = %n.user_name,
                permalink = %n.permalink,
                "missing nominee info, skipping announcement"
            );
        }
        complete
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    use super::*;
    use crate::testing::{
        QueuedSource, RecordingRoom, ended_election, nominee, sample_election, test_context,
    };

    fn setup(election: ElectionState) -> (ScheduledAnnouncer, Arc<RecordingRoom>, Arc<QueuedSource>, RescraperHandle) {
        let room = Arc::new(RecordingRoom::default());
        let source = Arc::new(QueuedSource::fixed(election.clone()));
        let ctx = test_context(election, Arc::clone(&room) as _, Arc::clone(&source) as _);
        let handle = RescraperHandle::new();
        (ScheduledAnnouncer::new(ctx, handle.clone()), room, source, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn scheduling_twice_keeps_one_trigger() {
        let now = Utc::now();
        let election = sample_election(now);
        let (mut announcer, ..) = setup(election.clone());

        // Nomination already opened; the other three lie ahead.
        assert_eq!(announcer.init_all(&election, now), 3);
        assert_eq!(announcer.init_all(&election, now), 0);
        assert_eq!(announcer.active_count(), 3);
        assert_eq!(announcer.status(Boundary::Nomination), ScheduleStatus::Unscheduled);
        assert!(!announcer.init_primary(election.date_primary, now));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_all_then_init_rearms_future_boundaries() {
        let now = Utc::now();
        let election = sample_election(now);
        let (mut announcer, ..) = setup(election.clone());

        announcer.init_all(&election, now);
        assert_eq!(announcer.stop_all(), 3);
        assert_eq!(announcer.active_count(), 0);
        assert_eq!(announcer.status(Boundary::Primary), ScheduleStatus::Cancelled);

        assert_eq!(announcer.init_all(&election, now), 3);
        assert_eq!(announcer.active_count(), 3);
        assert_eq!(announcer.status(Boundary::Nomination), ScheduleStatus::Unscheduled);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_primary_is_skipped() {
        let now = Utc::now();
        let mut election = sample_election(now);
        election.date_primary = None;
        let (mut announcer, ..) = setup(election.clone());

        assert_eq!(announcer.init_all(&election, now), 2);
        assert_eq!(announcer.status(Boundary::Primary), ScheduleStatus::Unscheduled);
    }

    #[tokio::test(start_paused = true)]
    async fn firing_rescrapes_and_announces() {
        let now = Utc::now();
        let election = sample_election(now);
        let (mut announcer, room, source, _) = setup(election);

        assert!(announcer.init_primary(Some(now + Duration::hours(1)), now));
        tokio::time::sleep(StdDuration::from_secs(61 * 60)).await;

        assert_eq!(announcer.status(Boundary::Primary), ScheduleStatus::Fired);
        assert_eq!(source.calls(), 1);
        let messages = room.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages.iter().all(|m| m.contains("[primary phase](https://stackoverflow.com/election/12?tab=primary)")));

        // Fired slots are neither stopped nor re-armed.
        assert_eq!(announcer.stop_all(), 0);
        assert!(!announcer.init_primary(Some(now + Duration::hours(2)), now));
    }

    #[tokio::test(start_paused = true)]
    async fn winners_announced_once() {
        let now = Utc::now();
        let election = ended_election(now, vec![nominee(1, "alice"), nominee(2, "bob")]);
        let (mut announcer, room, _, handle) = setup(sample_election(now));
        announcer.init_all(&sample_election(now), now);

        let message = announcer.take_winners(&election).await;
        assert_eq!(announcer.take_winners(&election).await, None);
        assert_eq!(
            message.as_deref(),
            Some(
                "**Congratulations to the winners** [alice](https://stackoverflow.com/users/1), \
                 [bob](https://stackoverflow.com/users/2)! You can \
                 [view the results online via OpaVote](https://www.opavote.com/results/5551234)."
            )
        );
        // Claiming sends nothing on its own.
        assert!(room.messages().is_empty());
        assert!(handle.is_stopped());
        assert_eq!(announcer.active_count(), 0);
        let flags = announcer.ctx.flags().await;
        assert!(flags.announced_winners && flags.said_election_ending_soon);
    }

    #[tokio::test]
    async fn winners_need_ended_phase() {
        let now = Utc::now();
        let mut election = sample_election(now);
        election.winners = vec![nominee(1, "alice")];
        let (mut announcer, _, _, handle) = setup(election.clone());

        assert_eq!(announcer.take_winners(&election).await, None);
        assert!(!handle.is_stopped());
        assert!(!announcer.ctx.flags().await.announced_winners);
    }

    #[tokio::test]
    async fn cancellation_relayed_once() {
        let now = Utc::now();
        let mut election = sample_election(now);
        election.phase = Some(Phase::Cancelled);
        election.cancelled_text = Some("This election has been cancelled.".to_string());
        let (mut announcer, _, _, handle) = setup(election.clone());

        assert_eq!(
            announcer.take_cancellation(&election).await.as_deref(),
            Some("This election has been cancelled.")
        );
        assert_eq!(announcer.take_cancellation(&election).await, None);
        assert!(handle.is_stopped());
    }

    #[test]
    fn nominee_changes_skip_incomplete_records() {
        let now = Utc::now();
        let previous = sample_election(now);
        let mut current = previous.clone();
        current.nominees = vec![nominee(2, "bob"), nominee(3, "carol"), nominee(4, "")];

        let welcomed = new_nominee_messages(&current, &previous);
        let withdrawn = withdrawn_nominee_messages(&current, &previous);
        assert_eq!(welcomed.len(), 1);
        assert_eq!(withdrawn.len(), 1);
        assert!(welcomed.iter().all(|m| m.contains("Please welcome our latest candidate [carol]")));
        assert!(withdrawn.iter().all(|m| m.contains("Candidate [alice]") && m.contains("withdrawn")));
    }
}
