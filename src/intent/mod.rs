//! Intent classification over lower-cased chat messages.
//!
//! Guards overlap, so classification walks an explicit ordered list and
//! returns the first intent whose guard matches. Mentions of the bot are
//! checked against [`MENTION_INTENTS`] before [`GENERAL_INTENTS`].

pub mod expressions;
pub mod guards;

use std::fmt;

/// Per-message inputs some guards need besides the text.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    /// API slug of the election site, e.g. `stackoverflow`.
    pub api_slug: &'a str,
}

/// A recognised kind of question or remark.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    NominatingInfo,
    NominateOthers,
    WhyNominationRemoved,
    ModsArePaid,
    ModsOrModPowers,
    Voting,
    CurrentMods,
    CurrentWinners,
    CurrentPositions,
    CurrentNominees,
    WithdrawnNominees,
    ElectionSchedule,
    UsernameDiamond,
    WhoMadeMe,
    WhoAmI,
    HowAmI,
    AmIAlive,
    MeaningOfLife,
    OwnScore,
    OtherScore,
    ScoreFormula,
    ScoreLeaderboard,
    ThankingTheBot,
    LovingTheBot,
    HatingTheBot,
    BotIsInsane,
    UserEligibility,
    Lightbulb,
    JonSkeetJokes,
    Jokes,
    ResponsesAreCanned,
    RequiredBadges,
    BadgesOfType,
    HowOrWhoToVote,
    MissingComments,
    BestCandidate,
    BestMod,
    Stv,
    ModsInTheRoom,
    CandidatesInTheRoom,
    Help,
    FullHelp,
    WhatElectionIs,
    ElectionStatus,
    NextPhase,
    WhenElectionEnds,
    EligibleToVoteCount,
    ElectionPage,
    BallotFile,
    ElectionPhases,
    HowManyVoted,
    OneHasVoted,
    CanVote,
    WhereToFindResults,
}

/// Intents answered only when the bot is mentioned, in evaluation order.
pub const MENTION_INTENTS: &[Intent] = &[
    Intent::AmIAlive,
    Intent::WhoMadeMe,
    Intent::WhoAmI,
    Intent::HowAmI,
    Intent::MeaningOfLife,
    Intent::FullHelp,
    Intent::Help,
    Intent::ThankingTheBot,
    Intent::LovingTheBot,
    Intent::HatingTheBot,
    Intent::BotIsInsane,
];

/// Intents answered for every message, in evaluation order.
///
/// Narrow questions come before the broad ones they overlap with: the
/// room-count guards before nominee listing, score guards before
/// nomination info, specific voting questions before plain "how to vote".
pub const GENERAL_INTENTS: &[Intent] = &[
    Intent::WhyNominationRemoved,
    Intent::WithdrawnNominees,
    Intent::ModsArePaid,
    Intent::ModsOrModPowers,
    Intent::CandidatesInTheRoom,
    Intent::ModsInTheRoom,
    Intent::OwnScore,
    Intent::OtherScore,
    Intent::ScoreLeaderboard,
    Intent::ScoreFormula,
    Intent::UserEligibility,
    Intent::NominateOthers,
    Intent::NominatingInfo,
    Intent::RequiredBadges,
    Intent::BadgesOfType,
    Intent::CurrentWinners,
    Intent::CurrentPositions,
    Intent::CurrentMods,
    Intent::CurrentNominees,
    Intent::HowOrWhoToVote,
    Intent::HowManyVoted,
    Intent::OneHasVoted,
    Intent::CanVote,
    Intent::EligibleToVoteCount,
    Intent::Voting,
    Intent::ElectionSchedule,
    Intent::ElectionPhases,
    Intent::WhenElectionEnds,
    Intent::NextPhase,
    Intent::ElectionStatus,
    Intent::WhatElectionIs,
    Intent::ElectionPage,
    Intent::BallotFile,
    Intent::WhereToFindResults,
    Intent::Stv,
    Intent::MissingComments,
    Intent::BestCandidate,
    Intent::BestMod,
    Intent::UsernameDiamond,
    Intent::Lightbulb,
    Intent::JonSkeetJokes,
    Intent::Jokes,
    Intent::ResponsesAreCanned,
];

impl Intent {
    /// Runs this intent's guard against `text`.
    #[must_use]
    pub fn matches(self, text: &str, ctx: &ClassifyContext<'_>) -> bool {
        use guards as g;
        match self {
            Self::NominatingInfo => g::is_asked_for_nominating_info(text),
            Self::NominateOthers => g::is_asked_if_can_nominate_others(text),
            Self::WhyNominationRemoved => g::is_asked_why_nomination_removed(text),
            Self::ModsArePaid => g::is_asked_if_mods_are_paid(text),
            Self::ModsOrModPowers => g::is_asked_about_mods_or_mod_powers(text),
            Self::Voting => g::is_asked_about_voting(text),
            Self::CurrentMods => g::is_asked_for_current_mods(text, ctx.api_slug),
            Self::CurrentWinners => g::is_asked_for_current_winners(text),
            Self::CurrentPositions => g::is_asked_for_current_positions(text),
            Self::CurrentNominees => g::is_asked_for_current_nominees(text),
            Self::WithdrawnNominees => g::is_asked_for_withdrawn_nominees(text),
            Self::ElectionSchedule => g::is_asked_for_election_schedule(text),
            Self::UsernameDiamond => g::is_asked_about_username_diamond(text),
            Self::WhoMadeMe => g::is_asked_who_made_me(text),
            Self::WhoAmI => g::is_asked_who_am_i(text),
            Self::HowAmI => g::is_asked_how_am_i(text),
            Self::AmIAlive => g::is_asked_am_i_alive(text),
            Self::MeaningOfLife => g::is_asked_meaning_of_life(text),
            Self::OwnScore => g::is_asked_for_own_score(text),
            Self::OtherScore => g::is_asked_for_other_score(text),
            Self::ScoreFormula => g::is_asked_for_score_formula(text),
            Self::ScoreLeaderboard => g::is_asked_for_score_leaderboard(text),
            Self::ThankingTheBot => g::is_thanking_the_bot(text),
            Self::LovingTheBot => g::is_loving_the_bot(text),
            Self::HatingTheBot => g::is_hating_the_bot(text),
            Self::BotIsInsane => g::is_saying_bot_is_insane(text),
            Self::UserEligibility => g::is_asked_for_user_eligibility(text),
            Self::Lightbulb => g::is_asked_about_lightbulb(text),
            Self::JonSkeetJokes => g::is_asked_about_jon_skeet_jokes(text),
            Self::Jokes => g::is_asked_about_jokes(text),
            Self::ResponsesAreCanned => g::is_asked_if_responses_are_canned(text),
            Self::RequiredBadges => g::is_asked_about_required_badges(text),
            Self::BadgesOfType => g::is_asked_about_badges_of_type(text),
            Self::HowOrWhoToVote => g::is_asked_how_or_who_to_vote(text),
            Self::MissingComments => g::is_asked_about_missing_comments(text),
            Self::BestCandidate => g::is_asked_who_is_the_best_candidate(text),
            Self::BestMod => g::is_asked_who_is_the_best_mod(text),
            Self::Stv => g::is_asked_about_stv(text),
            Self::ModsInTheRoom => g::is_asked_how_many_mods_in_the_room(text),
            Self::CandidatesInTheRoom => g::is_asked_how_many_candidates_in_the_room(text),
            Self::Help => g::is_asked_for_help(text),
            Self::FullHelp => g::is_asked_for_full_help(text),
            Self::WhatElectionIs => g::is_asked_what_election_is(text),
            Self::ElectionStatus => g::is_asked_what_is_election_status(text),
            Self::NextPhase => g::is_asked_when_is_the_next_phase(text),
            Self::WhenElectionEnds => g::is_asked_when_the_election_ends(text),
            Self::EligibleToVoteCount => g::is_asked_how_many_are_eligible_to_vote(text),
            Self::ElectionPage => g::is_asked_for_election_page(text),
            Self::BallotFile => g::is_asked_about_ballot_file(text),
            Self::ElectionPhases => g::is_asked_about_election_phases(text),
            Self::HowManyVoted => g::is_asked_how_many_voted(text),
            Self::OneHasVoted => g::is_asked_if_one_has_voted(text),
            Self::CanVote => g::is_asked_if_can_vote(text),
            Self::WhereToFindResults => g::is_asked_where_to_find_results(text),
        }
    }

    /// Snake-case name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NominatingInfo => "nominating_info",
            Self::NominateOthers => "nominate_others",
            Self::WhyNominationRemoved => "why_nomination_removed",
            Self::ModsArePaid => "mods_are_paid",
            Self::ModsOrModPowers => "mods_or_mod_powers",
            Self::Voting => "voting",
            Self::CurrentMods => "current_mods",
            Self::CurrentWinners => "current_winners",
            Self::CurrentPositions => "current_positions",
            Self::CurrentNominees => "current_nominees",
            Self::WithdrawnNominees => "withdrawn_nominees",
            Self::ElectionSchedule => "election_schedule",
            Self::UsernameDiamond => "username_diamond",
            Self::WhoMadeMe => "who_made_me",
            Self::WhoAmI => "who_am_i",
            Self::HowAmI => "how_am_i",
            Self::AmIAlive => "am_i_alive",
            Self::MeaningOfLife => "meaning_of_life",
            Self::OwnScore => "own_score",
            Self::OtherScore => "other_score",
            Self::ScoreFormula => "score_formula",
            Self::ScoreLeaderboard => "score_leaderboard",
            Self::ThankingTheBot => "thanking_the_bot",
            Self::LovingTheBot => "loving_the_bot",
            Self::HatingTheBot => "hating_the_bot",
            Self::BotIsInsane => "bot_is_insane",
            Self::UserEligibility => "user_eligibility",
            Self::Lightbulb => "lightbulb",
            Self::JonSkeetJokes => "jon_skeet_jokes",
            Self::Jokes => "jokes",
            Self::ResponsesAreCanned => "responses_are_canned",
            Self::RequiredBadges => "required_badges",
            Self::BadgesOfType => "badges_of_type",
            Self::HowOrWhoToVote => "how_or_who_to_vote",
            Self::MissingComments => "missing_comments",
            Self::BestCandidate => "best_candidate",
            Self::BestMod => "best_mod",
            Self::Stv => "stv",
            Self::ModsInTheRoom => "mods_in_the_room",
            Self::CandidatesInTheRoom => "candidates_in_the_room",
            Self::Help => "help",
            Self::FullHelp => "full_help",
            Self::WhatElectionIs => "what_election_is",
            Self::ElectionStatus => "election_status",
            Self::NextPhase => "next_phase",
            Self::WhenElectionEnds => "when_election_ends",
            Self::EligibleToVoteCount => "eligible_to_vote_count",
            Self::ElectionPage => "election_page",
            Self::BallotFile => "ballot_file",
            Self::ElectionPhases => "election_phases",
            Self::HowManyVoted => "how_many_voted",
            Self::OneHasVoted => "one_has_voted",
            Self::CanVote => "can_vote",
            Self::WhereToFindResults => "where_to_find_results",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First intent in `order` whose guard matches `text`.
#[must_use]
pub fn classify(order: &[Intent], text: &str, ctx: &ClassifyContext<'_>) -> Option<Intent> {
    order.iter().copied().find(|intent| intent.matches(text, ctx))
}

/// Classifies a message addressed to the bot: mention-only intents first,
/// then the general list.
#[must_use]
pub fn classify_mention(text: &str, ctx: &ClassifyContext<'_>) -> Option<Intent> {
    classify(MENTION_INTENTS, text, ctx).or_else(|| classify(GENERAL_INTENTS, text, ctx))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const CTX: ClassifyContext<'static> = ClassifyContext {
        api_slug: "stackoverflow",
    };

    #[test]
    fn every_intent_is_listed_once() {
        let all: Vec<Intent> = MENTION_INTENTS.iter().chain(GENERAL_INTENTS).copied().collect();
        let unique: HashSet<Intent> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(unique.len(), 54);
    }

    #[test]
    fn nomination_scenarios_classify_apart() {
        assert_eq!(
            classify(GENERAL_INTENTS, "how do i nominate myself", &CTX),
            Some(Intent::NominatingInfo)
        );
        assert_eq!(
            classify(GENERAL_INTENTS, "how can others nominate someone", &CTX),
            Some(Intent::NominateOthers)
        );
    }

    #[test]
    fn narrow_questions_win_over_broad_ones() {
        assert_eq!(
            classify(GENERAL_INTENTS, "how many candidates are in the room?", &CTX),
            Some(Intent::CandidatesInTheRoom)
        );
        assert_eq!(
            classify(GENERAL_INTENTS, "can i nominate myself?", &CTX),
            Some(Intent::OwnScore)
        );
        assert_eq!(
            classify(GENERAL_INTENTS, "who should i vote for?", &CTX),
            Some(Intent::HowOrWhoToVote)
        );
        assert_eq!(classify(GENERAL_INTENTS, "how do i vote", &CTX), Some(Intent::Voting));
    }

    #[test]
    fn mention_intents_only_for_mentions() {
        assert_eq!(classify(GENERAL_INTENTS, "thank you", &CTX), None);
        assert_eq!(classify_mention("thank you", &CTX), Some(Intent::ThankingTheBot));
        assert_eq!(classify_mention("who are the candidates?", &CTX), Some(Intent::CurrentNominees));
    }

    #[test]
    fn unrelated_chatter_is_unmatched() {
        assert_eq!(classify(GENERAL_INTENTS, "good morning everyone", &CTX), None);
    }
}
