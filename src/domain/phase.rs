//! Election phases and their derivation from the phase timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stage of a moderator election.
///
/// An election that has not started yet has no phase at all, which is
/// modelled as `Option<Phase>::None` throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Candidates may nominate themselves.
    Nomination,
    /// Up/down voting on nominations (only with many candidates).
    Primary,
    /// Final ranked-choice voting.
    Election,
    /// Voting closed; results may be posted.
    Ended,
    /// Cancelled by the community team.
    Cancelled,
}

impl Phase {
    /// Returns the phase name as used in election page tabs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nomination => "nomination",
            Self::Primary => "primary",
            Self::Election => "election",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four phase timestamps of an election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDates {
    /// Start of the nomination phase.
    pub nomination: DateTime<Utc>,
    /// Start of the primary phase, absent when there is none.
    pub primary: Option<DateTime<Utc>>,
    /// Start of the final voting phase.
    pub election: DateTime<Utc>,
    /// End of the election.
    pub ended: DateTime<Utc>,
}

/// Derives the phase at `now`.
///
/// Boundaries are checked latest first; the first one at or before `now`
/// decides. A missing primary is skipped. Returns `None` before nomination
/// opens.
#[must_use]
pub fn derive_phase(dates: &PhaseDates, now: DateTime<Utc>) -> Option<Phase> {
    if dates.ended <= now {
        Some(Phase::Ended)
    } else if dates.election <= now {
        Some(Phase::Election)
    } else if dates.primary.is_some_and(|primary| primary <= now) {
        Some(Phase::Primary)
    } else if dates.nomination <= now {
        Some(Phase::Nomination)
    } else {
        None
    }
}
