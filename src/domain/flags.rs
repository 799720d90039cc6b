//! One-time announcement flags held by the bot.

use serde::Serialize;

/// Flags that make one-time announcements fire at most once across
/// rescrapes. They belong to the bot, not to any election snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct BotFlags {
    /// Winners have been announced.
    pub announced_winners: bool,
    /// The "election ending soon" reminder has been sent.
    pub said_election_ending_soon: bool,
    /// The cancellation notice has been relayed.
    pub announced_cancelled: bool,
}
