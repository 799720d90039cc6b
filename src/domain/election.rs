//! Election snapshot produced by the scraper.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::phase::{Phase, PhaseDates, derive_phase};

/// A candidate as listed on the election page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Nominee {
    /// Site user id of the candidate.
    pub user_id: u64,
    /// Display name at scrape time.
    pub user_name: String,
    /// Tenure text, e.g. "member for 9 years".
    pub user_years: String,
    /// Candidate score fraction, e.g. `"27/40"`.
    pub score: String,
    /// Link to the nomination post.
    pub permalink: String,
}

/// Derived snapshot of a moderator election.
///
/// Built by a scrape and replaced wholesale by the next one; nothing
/// mutates a snapshot in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ElectionState {
    /// Election page URL (stable key).
    pub election_url: String,
    /// Scheme and host of the election site.
    pub site_url: String,
    /// Page title.
    pub title: String,
    /// Instant of the scrape that produced this snapshot.
    pub updated: DateTime<Utc>,
    /// Start of the nomination phase.
    pub date_nomination: DateTime<Utc>,
    /// Start of the primary phase, if the election has one.
    pub date_primary: Option<DateTime<Utc>>,
    /// Start of the final voting phase.
    pub date_election: DateTime<Utc>,
    /// End of the election.
    pub date_ended: DateTime<Utc>,
    /// Number of candidates shown in the sidebar.
    pub num_candidates: u32,
    /// Number of moderator positions to fill.
    pub num_positions: u32,
    /// Reputation needed to vote.
    pub rep_vote: u32,
    /// Reputation needed to nominate.
    pub rep_nominate: u32,
    /// Candidates in page order.
    pub nominees: Vec<Nominee>,
    /// Elected candidates; empty until the election has ended.
    pub winners: Vec<Nominee>,
    /// Phase at `updated`.
    pub phase: Option<Phase>,
    /// OpaVote results link, once posted.
    pub results_url: Option<String>,
    /// Voter participation text, once posted.
    pub stat_voters: Option<String>,
    /// Election questionnaire link.
    pub qna_url: Option<String>,
    /// Election chat room link.
    pub chat_url: Option<String>,
    /// Cancellation notice, when the election was cancelled.
    pub cancelled_text: Option<String>,
}

impl ElectionState {
    /// Reputation required to vote on every Stack Exchange site.
    pub const DEFAULT_REP_VOTE: u32 = 150;

    /// The phase timestamps of this snapshot.
    #[must_use]
    pub const fn phase_dates(&self) -> PhaseDates {
        PhaseDates {
            nomination: self.date_nomination,
            primary: self.date_primary,
            election: self.date_election,
            ended: self.date_ended,
        }
    }

    /// Phase at an arbitrary instant. Cancellation always wins.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> Option<Phase> {
        if self.cancelled_text.is_some() {
            return Some(Phase::Cancelled);
        }
        derive_phase(&self.phase_dates(), now)
    }

    /// Whether the election has a primary phase.
    #[must_use]
    pub const fn has_primary(&self) -> bool {
        self.date_primary.is_some()
    }

    /// Whether any phase timestamp differs from `other`.
    #[must_use]
    pub fn dates_changed(&self, other: &Self) -> bool {
        self.phase_dates() != other.phase_dates()
    }

    /// Election page link for a tab, e.g. `...?tab=primary`.
    #[must_use]
    pub fn tab_url(&self, tab: &str) -> String {
        format!("{}?tab={tab}", self.election_url)
    }

    /// Profile URL of a site user.
    #[must_use]
    pub fn user_url(&self, user_id: u64) -> String {
        format!("{}/users/{user_id}", self.site_url)
    }

    /// Host name of the election site, e.g. `stackoverflow.com`.
    #[must_use]
    pub fn site_hostname(&self) -> &str {
        self.site_url
            .split_once("://")
            .map_or(self.site_url.as_str(), |(_, host)| host)
            .trim_end_matches('/')
    }

    /// Short site name as used by the Stack Exchange API.
    #[must_use]
    pub fn api_slug(&self) -> &str {
        let host = self.site_hostname();
        host.strip_suffix(".stackexchange.com")
            .or_else(|| host.strip_suffix(".com"))
            .unwrap_or(host)
    }

    /// Nominees present here but not in `previous`.
    #[must_use]
    pub fn newly_nominated<'a>(&'a self, previous: &Self) -> Vec<&'a Nominee> {
        let known: HashSet<u64> = previous.nominees.iter().map(|n| n.user_id).collect();
        self.nominees
            .iter()
            .filter(|n| !known.contains(&n.user_id))
            .collect()
    }

    /// Nominees of `previous` that are no longer listed here.
    #[must_use]
    pub fn newly_withdrawn<'a>(&self, previous: &'a Self) -> Vec<&'a Nominee> {
        let current: HashSet<u64> = self.nominees.iter().map(|n| n.user_id).collect();
        previous
            .nominees
            .iter()
            .filter(|n| !current.contains(&n.user_id))
            .collect()
    }

    /// Next phase start after `now`, if any remains.
    #[must_use]
    pub fn next_phase(&self, now: DateTime<Utc>) -> Option<(Phase, DateTime<Utc>)> {
        if self.cancelled_text.is_some() {
            return None;
        }
        [
            (Phase::Nomination, Some(self.date_nomination)),
            (Phase::Primary, self.date_primary),
            (Phase::Election, Some(self.date_election)),
            (Phase::Ended, Some(self.date_ended)),
        ]
        .into_iter()
        .find_map(|(phase, date)| date.filter(|d| *d > now).map(|d| (phase, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{nominee, sample_election};
    use chrono::Duration;

    #[test]
    fn site_helpers_derive_from_url() {
        let election = sample_election(Utc::now());
        assert_eq!(election.site_hostname(), "stackoverflow.com");
        assert_eq!(election.api_slug(), "stackoverflow");
        assert_eq!(election.user_url(42), "https://stackoverflow.com/users/42");
        assert_eq!(
            election.tab_url("primary"),
            "https://stackoverflow.com/election/12?tab=primary"
        );
    }

    #[test]
    fn stackexchange_subdomain_slug() {
        let mut election = sample_election(Utc::now());
        election.site_url = "https://math.stackexchange.com".to_string();
        assert_eq!(election.api_slug(), "math");
    }

    #[test]
    fn nominee_diff_in_both_directions() {
        let now = Utc::now();
        let mut previous = sample_election(now);
        previous.nominees = vec![nominee(1, "alice"), nominee(2, "bob")];
        let mut current = previous.clone();
        current.nominees = vec![nominee(2, "bob"), nominee(3, "carol")];

        let added: Vec<u64> = current.newly_nominated(&previous).iter().map(|n| n.user_id).collect();
        let gone: Vec<u64> = current.newly_withdrawn(&previous).iter().map(|n| n.user_id).collect();
        assert_eq!(added, vec![3]);
        assert_eq!(gone, vec![1]);
    }

    #[test]
    fn cancellation_overrides_dates() {
        let now = Utc::now();
        let mut election = sample_election(now);
        election.cancelled_text = Some("This election has been cancelled.".to_string());
        assert_eq!(election.phase_at(now), Some(Phase::Cancelled));
        assert_eq!(election.next_phase(now), None);
    }

    #[test]
    fn next_phase_skips_missing_primary() {
        let now = Utc::now();
        let mut election = sample_election(now);
        election.date_nomination = now - Duration::days(1);
        election.date_primary = None;
        election.date_election = now + Duration::days(3);
        election.date_ended = now + Duration::days(10);
        assert_eq!(
            election.next_phase(now),
            Some((Phase::Election, election.date_election))
        );
    }

    #[test]
    fn dates_changed_detects_moved_boundary() {
        let now = Utc::now();
        let a = sample_election(now);
        let mut b = a.clone();
        assert!(!a.dates_changed(&b));
        b.date_ended += Duration::hours(2);
        assert!(a.dates_changed(&b));
    }
}
