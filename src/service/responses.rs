//! Response texts for every intent.
//!
//! [`compose`] is pure: it reads the election snapshot and a few facts
//! about the bot and the asker, and never touches the network.

use chrono::{DateTime, Utc};

use crate::config::BotConfig;
use crate::domain::{ElectionState, Nominee, Phase};
use crate::intent::Intent;
use crate::intent::expressions::pattern;
use crate::intent::guards::badge_type;

const ELECTION_INFO_URL: &str = "https://meta.stackexchange.com/q/135360";
const DIAMOND_INFO_URL: &str = "https://meta.stackexchange.com/q/75189";
const SCORE_INFO_URL: &str = "https://meta.stackexchange.com/a/252643";
const STV_INFO_URL: &str = "https://www.opavote.com/methods/single-transferable-vote";

const MODERATION_BADGES: &str = "Civic Duty, Cleanup, Deputy, Electorate, Marshal, Sportsmanship, Reviewer, Steward";
const PARTICIPATION_BADGES: &str = "Constituent, Convention, Enthusiast, Investor, Quorum, Yearling";
const EDITING_BADGES: &str = "Organizer, Copy Editor, Explainer, Refiner, Tag Editor, Strunk & White";
const STACKOVERFLOW_REQUIRED_BADGES: &str = "Civic Duty, Strunk & White, Deputy, Convention";

const JOKES: &[&str] = &[
    "Why did the moderator cross the road? To close the duplicate on the other side.",
    "I would tell you a joke about reputation, but you'd need 150 of it to vote on it.",
    "A SQL query walks into a bar, walks up to two tables and asks: \"Can I join you?\"",
    "There are 10 kinds of voters: those who read the Q&A and those who don't.",
];

const JON_SKEET_JOKES: &[&str] = &[
    "Jon Skeet's code doesn't follow a coding convention. It is the coding convention.",
    "Jon Skeet doesn't need a primary phase. The candidates vote for him.",
    "When Jon Skeet points to null, null quakes in fear.",
    "Jon Skeet can divide by zero.",
];

/// Markdown link in chat syntax.
#[must_use]
pub fn make_url(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Plural suffix for a count.
#[must_use]
pub const fn pluralize(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// UTC timestamp as shown in chat, e.g. `2021-01-08 20:00:00Z`.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%SZ").to_string()
}

/// Relative phrase for `to` seen from `now`: "in 3 days", "in 5 hours" or
/// "soon".
#[must_use]
pub fn time_until(now: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let remaining = to - now;
    let days = remaining.num_days();
    let hours = remaining.num_hours();
    if days >= 1 {
        let n = usize::try_from(days).unwrap_or(usize::MAX);
        format!("in {days} day{}", pluralize(n))
    } else if hours >= 1 {
        let n = usize::try_from(hours).unwrap_or(usize::MAX);
        format!("in {hours} hour{}", pluralize(n))
    } else {
        "soon".to_string()
    }
}

/// Compact uptime, `DDd HHh MMm`.
fn format_uptime(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - since).num_seconds().max(0);
    format!(
        "{:02}d {:02}h {:02}m",
        secs / 86_400,
        secs / 3_600 % 24,
        secs / 60 % 60
    )
}

/// Everything a response may depend on.
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    /// Current election snapshot.
    pub election: &'a ElectionState,
    /// Bot configuration.
    pub config: &'a BotConfig,
    /// Instant the response is composed at.
    pub now: DateTime<Utc>,
    /// Process start.
    pub started_at: DateTime<Utc>,
    /// Chat display name of the asker.
    pub asker_name: &'a str,
}

impl ResponseContext<'_> {
    fn election_link(&self) -> String {
        make_url("moderator election", &self.election.election_url)
    }

    fn user_link(&self, nominee: &Nominee) -> String {
        make_url(&nominee.user_name, &self.election.user_url(nominee.user_id))
    }

    fn user_links(&self, nominees: &[Nominee]) -> String {
        nominees
            .iter()
            .map(|n| self.user_link(n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn qna_link(&self, text: &str) -> String {
        make_url(
            text,
            self.election
                .qna_url
                .as_deref()
                .unwrap_or(&self.election.election_url),
        )
    }

    fn mods_url(&self) -> String {
        format!("{}/users?tab=moderators", self.election.site_url)
    }

    fn not_started_yet(&self) -> String {
        format!(
            "The {} has not started yet. Come back at {}.",
            self.election_link(),
            format_date(self.election.date_nomination)
        )
    }

    fn is_stackoverflow(&self) -> bool {
        self.election.site_hostname().contains("stackoverflow.com")
    }

    fn pick<'s>(&self, options: &[&'s str]) -> &'s str {
        let len = i64::try_from(options.len()).unwrap_or(1).max(1);
        let index = usize::try_from(self.now.timestamp().rem_euclid(len)).unwrap_or(0);
        options.get(index).copied().unwrap_or_default()
    }
}

/// Composes the reply for `intent`. `text` is the lower-cased message the
/// intent matched. Returns `None` when the message lacks something the
/// reply needs, such as a user id.
#[must_use]
pub fn compose(intent: Intent, ctx: &ResponseContext<'_>, text: &str) -> Option<String> {
    let e = ctx.election;
    let reply = match intent {
        Intent::NominatingInfo => nominating_info(ctx),
        Intent::NominateOthers => format!(
            "You cannot nominate another user. Users can only nominate themselves, during the {}.",
            make_url("nomination phase", &e.tab_url("nomination"))
        ),
        Intent::WhyNominationRemoved => "Candidates may withdraw their nomination any time before the election phase. \
             Nominations that break the rules or come from ineligible users can also be removed by a community manager."
            .to_string(),
        Intent::ModsArePaid => format!(
            "No. {} are volunteers and are not paid by Stack Exchange.",
            make_url("Diamond ♦ moderators", DIAMOND_INFO_URL)
        ),
        Intent::ModsOrModPowers => format!(
            "{} are elected community members who handle flags and keep the site running. \
             They can close or delete posts, suspend users and lock content.",
            make_url("Diamond ♦ moderators", DIAMOND_INFO_URL)
        ),
        Intent::Voting => voting(ctx),
        Intent::CurrentMods => format!(
            "The current moderators can be found here: {}",
            make_url(&ctx.mods_url(), &ctx.mods_url())
        ),
        Intent::CurrentWinners => current_winners(ctx),
        Intent::CurrentPositions => {
            let n = usize::try_from(e.num_positions).unwrap_or(usize::MAX);
            format!(
                "There {} {n} moderator position{} to fill in this {}.",
                if n == 1 { "is" } else { "are" },
                pluralize(n),
                make_url("election", &e.election_url)
            )
        }
        Intent::CurrentNominees => current_nominees(ctx),
        Intent::WithdrawnNominees => format!(
            "Withdrawals are announced in this room as they happen. The {} only lists active nominations.",
            make_url("nomination tab", &e.tab_url("nomination"))
        ),
        Intent::ElectionSchedule => schedule(ctx),
        Intent::UsernameDiamond => "The ♦ next to a name is added automatically for moderators. \
             Adding one to your own username is not allowed."
            .to_string(),
        Intent::WhoMadeMe => "I was made by volunteers from the community. My source is open for anyone to improve."
            .to_string(),
        Intent::WhoAmI => format!(
            "I'm {}, a bot that answers questions about the {}.",
            ctx.config.bot_user_name,
            ctx.election_link()
        ),
        Intent::HowAmI => "I'm doing fine, thanks for asking! The election keeps me busy.".to_string(),
        Intent::AmIAlive => {
            let mut reply = format!(
                "I'm alive on {}/{} with an uptime of {}.",
                std::env::consts::OS,
                std::env::consts::ARCH,
                format_uptime(ctx.started_at, ctx.now)
            );
            if ctx.config.debug {
                reply.push_str(" I am in debug mode.");
            }
            reply
        }
        Intent::MeaningOfLife => "The answer to life, the universe and everything is 42.".to_string(),
        Intent::OwnScore => own_score(ctx),
        Intent::OtherScore => other_score(ctx, text)?,
        Intent::ScoreFormula => format!(
            "The {} is calculated as such: 1 point for each 1,000 reputation up to 20,000 reputation \
             (maximum of 20 points), and 1 point for each of the 8 moderation, 6 participation and 6 editing badges.",
            make_url("candidate score", SCORE_INFO_URL)
        ),
        Intent::ScoreLeaderboard => score_leaderboard(ctx),
        Intent::ThankingTheBot => "You're welcome!".to_string(),
        Intent::LovingTheBot => "Thank you, I try my best!".to_string(),
        Intent::HatingTheBot => "Sorry to hear that. I'm still learning.".to_string(),
        Intent::BotIsInsane => "I'm not insane. My mind is made of regular expressions.".to_string(),
        Intent::UserEligibility => user_eligibility(ctx, text)?,
        Intent::Lightbulb => "None. Moderators only change the lightbulb after it has been flagged.".to_string(),
        Intent::JonSkeetJokes => ctx.pick(JON_SKEET_JOKES).to_string(),
        Intent::Jokes => ctx.pick(JOKES).to_string(),
        Intent::ResponsesAreCanned => "My responses are canned, but the can was picked with care.".to_string(),
        Intent::RequiredBadges => required_badges(ctx),
        Intent::BadgesOfType => badges_of_type(text)?,
        Intent::HowOrWhoToVote => {
            if e.phase.is_none() {
                ctx.not_started_yet()
            } else {
                format!(
                    "If you want to make an informed decision on who to vote for, you can read the candidates' answers in the {}.",
                    ctx.qna_link("election Q&A")
                )
            }
        }
        Intent::MissingComments => format!(
            "Comments on nominations are only shown during the nomination phase. \
             Once the {} starts they are hidden, but not deleted.",
            make_url(
                if e.has_primary() { "primary" } else { "election phase" },
                &e.tab_url(if e.has_primary() { "primary" } else { "election" })
            )
        ),
        Intent::BestCandidate => format!(
            "I can't pick favourites. Read the {} and decide for yourself!",
            make_url("nominations", &e.tab_url("nomination"))
        ),
        Intent::BestMod => format!(
            "I like all the {} equally.",
            make_url("current moderators", &ctx.mods_url())
        ),
        Intent::Stv => format!(
            "The final phase uses {}. You rank the candidates in order of preference, \
             and votes transfer to your next choice as candidates are elected or eliminated.",
            make_url("Meek STV", STV_INFO_URL)
        ),
        Intent::ModsInTheRoom => format!(
            "I can't see who is in the room. The {} are listed on the site.",
            make_url("current moderators", &ctx.mods_url())
        ),
        Intent::CandidatesInTheRoom => {
            let n = e.nominees.len();
            format!(
                "I can't see who is in the room, but there {} {n} candidate{} in the {}.",
                if n == 1 { "is" } else { "are" },
                pluralize(n),
                make_url("election", &e.tab_url("nomination"))
            )
        }
        Intent::Help => help(false),
        Intent::FullHelp => help(true),
        Intent::WhatElectionIs => format!(
            "An {} is where users nominate themselves as candidates for the role of {}, \
             and users with at least {} reputation can vote for them.",
            make_url("election", ELECTION_INFO_URL),
            make_url("diamond ♦ moderator", DIAMOND_INFO_URL),
            e.rep_vote
        ),
        Intent::ElectionStatus => status(ctx),
        Intent::NextPhase => next_phase(ctx),
        Intent::WhenElectionEnds => match e.phase {
            Some(Phase::Ended) => format!(
                "The {} ended at {}.",
                make_url("election", &e.election_url),
                format_date(e.date_ended)
            ),
            Some(Phase::Cancelled) => format!("The {} has been cancelled.", make_url("election", &e.election_url)),
            _ => format!(
                "The {} ends {} ({}).",
                make_url("election", &e.election_url),
                time_until(ctx.now, e.date_ended),
                format_date(e.date_ended)
            ),
        },
        Intent::EligibleToVoteCount => format!(
            "Every user with at least {} reputation is eligible to vote. I don't have an exact count.",
            e.rep_vote
        ),
        Intent::ElectionPage => format!(
            "The election page can be found here: {}",
            make_url(&e.election_url, &e.election_url)
        ),
        Intent::BallotFile => match (e.phase, &e.results_url) {
            (Some(Phase::Ended), Some(results)) => format!(
                "The ballot file can be downloaded from the {}.",
                make_url("results on OpaVote", results)
            ),
            _ => "The ballot file is published together with the results once the election ends.".to_string(),
        },
        Intent::ElectionPhases => phases(ctx),
        Intent::HowManyVoted => match (e.phase, &e.stat_voters) {
            (Some(Phase::Ended), Some(stats)) if !stats.is_empty() => stats.clone(),
            _ => "We won't know for sure until the election ends.".to_string(),
        },
        Intent::OneHasVoted => match e.phase {
            Some(Phase::Primary | Phase::Election) => format!(
                "I can't see ballots. Check the {} to see whether your vote was recorded.",
                make_url("election page", &e.tab_url(e.phase.map_or("election", Phase::as_str)))
            ),
            _ => "Voting is not open right now.".to_string(),
        },
        Intent::CanVote => can_vote(ctx),
        Intent::WhereToFindResults => match (e.phase, &e.results_url) {
            (Some(Phase::Ended), Some(results)) => format!(
                "The results can be found {}.",
                make_url("online via OpaVote", results)
            ),
            _ => format!(
                "The results will be posted on the {} once the election ends ({}).",
                make_url("election page", &e.election_url),
                format_date(e.date_ended)
            ),
        },
    };
    Some(reply)
}

fn nominating_info(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    let mut reqs = vec![format!("at least {} reputation", e.rep_nominate)];
    if ctx.is_stackoverflow() {
        reqs.push(format!("awarded these badges ({STACKOVERFLOW_REQUIRED_BADGES})"));
    }
    if e.site_hostname().contains("askubuntu.com") {
        reqs.push(make_url("signed the Ubuntu Code of Conduct", "https://askubuntu.com/q/100275"));
    }
    reqs.push("and cannot have been suspended in the past year".to_string());

    format!(
        "You can only nominate yourself as a candidate during the {}. You'll need {}.",
        make_url("nomination phase", &e.tab_url("nomination")),
        reqs.join(", ")
    )
}

fn voting(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    match e.phase {
        Some(Phase::Election) => format!(
            "If you have at least {} reputation, you can cast your ballot in order of preference on up to three candidates in {}. \
             If you want to make an informed decision, you can also read the candidates' answers in the {}.",
            e.rep_vote,
            make_url("the election", &e.tab_url("election")),
            ctx.qna_link("election Q&A")
        ),
        Some(Phase::Primary) => format!(
            "If you have at least {} reputation, you can freely up & down vote all the candidates in {}. \
             If you want to make an informed decision, you can also read the candidates' answers in the {}. \
             Don't forget to come back {} to also vote in the actual election!",
            e.rep_vote,
            make_url("the primary", &e.tab_url("primary")),
            ctx.qna_link("election Q&A"),
            time_until(ctx.now, e.date_election)
        ),
        Some(Phase::Nomination) => format!(
            "You cannot vote yet. In the meantime you can read and comment on the {}, as well as read the candidates' {}.",
            make_url("candidates' nominations", &e.tab_url("nomination")),
            ctx.qna_link("answers to your questions")
        ),
        Some(Phase::Ended) => format!("The {} has ended. You can no longer vote.", ctx.election_link()),
        Some(Phase::Cancelled) => format!("The {} has been cancelled. There is nothing to vote on.", ctx.election_link()),
        None => ctx.not_started_yet(),
    }
}

fn can_vote(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    match e.phase {
        Some(Phase::Primary | Phase::Election) => format!(
            "If you have at least {} reputation on the site, you can vote in the {}.",
            e.rep_vote,
            make_url("election", &e.tab_url(e.phase.map_or("election", Phase::as_str)))
        ),
        _ => voting(ctx),
    }
}

fn current_winners(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    match e.phase {
        Some(Phase::Ended) if !e.winners.is_empty() => format!(
            "The winner{} {}: {}.",
            pluralize(e.winners.len()),
            if e.winners.len() == 1 { "is" } else { "are" },
            ctx.user_links(&e.winners)
        ),
        Some(Phase::Ended) => "The winners have not been announced yet. Check back soon!".to_string(),
        None => ctx.not_started_yet(),
        _ => "The election is not over yet. Stay tuned for the winners!".to_string(),
    }
}

fn current_nominees(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    if e.phase.is_none() {
        return ctx.not_started_yet();
    }
    if e.nominees.is_empty() {
        return "There are no users who have nominated themselves yet.".to_string();
    }
    format!(
        "Here are the current {}: {}",
        make_url("candidates", &e.tab_url("nomination")),
        ctx.user_links(&e.nominees)
    )
}

fn schedule(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    let mut lines = vec![format!("The schedule of the {}:", make_url(&e.title, &e.election_url))];
    lines.push(format!("Nomination: {}", format_date(e.date_nomination)));
    if let Some(primary) = e.date_primary {
        lines.push(format!("Primary: {}", format_date(primary)));
    }
    lines.push(format!("Election: {}", format_date(e.date_election)));
    lines.push(format!("End: {}", format_date(e.date_ended)));
    lines.join("\n- ")
}

fn phases(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    let names = if e.has_primary() {
        "nomination, primary and election"
    } else {
        "nomination and election"
    };
    format!(
        "This {} has {} phases: {names}. Phases follow one another without a break.",
        make_url("election", &e.election_url),
        if e.has_primary() { "three" } else { "two" }
    )
}

fn status(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    match e.phase {
        None => ctx.not_started_yet(),
        Some(Phase::Ended) if !e.winners.is_empty() => {
            let mut reply = format!(
                "The {} is now concluded. The winners are: {}.",
                ctx.election_link(),
                ctx.user_links(&e.winners)
            );
            if let Some(results) = &e.results_url {
                reply.push_str(&format!(
                    " You can {}.",
                    make_url("view the results online via OpaVote", results)
                ));
            }
            reply
        }
        Some(Phase::Cancelled) => e
            .cancelled_text
            .clone()
            .unwrap_or_else(|| format!("The {} has been cancelled.", ctx.election_link())),
        Some(phase) => {
            let n = e.nominees.len();
            let mut reply = format!(
                "The {} is in the {phase} phase. There {} currently {n} candidate{}.",
                make_url("moderator election", &e.tab_url(phase.as_str())),
                if n == 1 { "is" } else { "are" },
                pluralize(n)
            );
            match phase {
                Phase::Primary => reply.push_str(&format!(
                    " You may freely cast up/down votes on the candidates' nominations, and come back {} to vote in the actual election.",
                    time_until(ctx.now, e.date_election)
                )),
                Phase::Election => reply.push_str(
                    " You may now cast your election ballot in order of your top three preferred candidates.",
                ),
                _ => {}
            }
            reply
        }
    }
}

fn next_phase(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    match e.next_phase(ctx.now) {
        Some((Phase::Ended, at)) => format!(
            "The {} ends {} ({}).",
            make_url("election", &e.election_url),
            time_until(ctx.now, at),
            format_date(at)
        ),
        Some((phase, at)) => format!(
            "The next phase is the {} phase, starting {} ({}).",
            make_url(phase.as_str(), &e.tab_url(phase.as_str())),
            time_until(ctx.now, at),
            format_date(at)
        ),
        None if e.phase == Some(Phase::Cancelled) => {
            format!("The {} has been cancelled.", ctx.election_link())
        }
        None => format!("The {} has ended. There are no more phases.", ctx.election_link()),
    }
}

fn score_numerator(score: &str) -> Option<u32> {
    score.split_once('/').and_then(|(n, _)| n.trim().parse().ok())
}

fn own_score(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    let asker = ctx.asker_name.trim();
    match e
        .nominees
        .iter()
        .find(|n| n.user_name.eq_ignore_ascii_case(asker))
    {
        Some(nominee) => format!("Your candidate score is **{}**.", nominee.score),
        None => format!(
            "I can only look up the scores of current candidates. \
             You can see how the {} is calculated on meta.",
            make_url("candidate score", SCORE_INFO_URL)
        ),
    }
}

fn other_score(ctx: &ResponseContext<'_>, text: &str) -> Option<String> {
    let user_id = last_user_id(text)?;
    let reply = match ctx.election.nominees.iter().find(|n| n.user_id == user_id) {
        Some(nominee) => format!(
            "The candidate score of {} is **{}**.",
            ctx.user_link(nominee),
            nominee.score
        ),
        None => format!("I can only look up the scores of current candidates, and user {user_id} is not one of them."),
    };
    Some(reply)
}

fn user_eligibility(ctx: &ResponseContext<'_>, text: &str) -> Option<String> {
    let user_id = last_user_id(text)?;
    let e = ctx.election;
    let reply = match e.nominees.iter().find(|n| n.user_id == user_id) {
        Some(nominee) => format!(
            "{} is already a candidate in this election.",
            ctx.user_link(nominee)
        ),
        None => format!(
            "User {user_id} is not a candidate. To be eligible, a user needs at least {} reputation{} \
             and cannot have been suspended in the past year.",
            e.rep_nominate,
            if ctx.is_stackoverflow() {
                format!(", the badges {STACKOVERFLOW_REQUIRED_BADGES}")
            } else {
                String::new()
            }
        ),
    };
    Some(reply)
}

/// Last user id in `text`: a bare number or the id of a `/users/<id>` link.
fn last_user_id(text: &str) -> Option<u64> {
    pattern!(r"(?:/users/|\b)(\d+)")
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .last()
}

fn score_leaderboard(ctx: &ResponseContext<'_>) -> String {
    let e = ctx.election;
    if e.nominees.is_empty() {
        return "There are no candidates yet.".to_string();
    }
    let mut ranked: Vec<&Nominee> = e.nominees.iter().collect();
    ranked.sort_by_key(|n| std::cmp::Reverse(score_numerator(&n.score).unwrap_or(0)));
    let rows = ranked
        .iter()
        .map(|n| format!("{} ({})", ctx.user_link(n), n.score))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Candidates by score: {rows}")
}

fn required_badges(ctx: &ResponseContext<'_>) -> String {
    if ctx.is_stackoverflow() {
        format!("The badges required to nominate yourself are: {STACKOVERFLOW_REQUIRED_BADGES}.")
    } else {
        format!(
            "No badges are required to nominate yourself on this site, but they count towards the {}.",
            make_url("candidate score", SCORE_INFO_URL)
        )
    }
}

fn badges_of_type(text: &str) -> Option<String> {
    let kind = badge_type(text)?;
    let (count, list) = match kind {
        "moderation" => (8, MODERATION_BADGES),
        "participation" => (6, PARTICIPATION_BADGES),
        "editing" => (6, EDITING_BADGES),
        _ => return None,
    };
    Some(format!(
        "The {count} {kind} badges counting towards candidate score are: {list}"
    ))
}

fn help(full: bool) -> String {
    let mut topics = vec![
        "what are the moderation badges",
        "what are the participation badges",
        "what are the editing badges",
        "how is the candidate score calculated",
        "how does the election work",
        "who are the candidates",
        "how to nominate",
        "how to vote",
        "how to decide who to vote for",
        "how many voted",
        "election status",
        "who are the current moderators",
    ];
    if full {
        topics.extend([
            "what is the election schedule",
            "when is the next phase",
            "when does the election end",
            "what are the election phases",
            "what is my candidate score",
            "what is the candidate score of user 123",
            "who has the highest candidate score",
            "can user 123 be elected",
            "what are the required badges",
            "what is stv",
            "where can i find the results",
            "where is the ballot file",
            "are moderators paid",
        ]);
    }
    format!("\nExamples of election FAQs I can help with:\n- {}", topics.join("\n- "))
}
