//! Intent guards: one pure predicate per kind of question.
//!
//! Every guard takes message text that has already been HTML-decoded and
//! lower-cased. Guards are independent and may overlap; the order in
//! which they are consulted lives in [`super::GENERAL_INTENTS`].

use super::expressions::{all_match, none_match, pattern, some_match};

/// Asked how or where to nominate oneself.
#[must_use]
pub fn is_asked_for_nominating_info(text: &str) -> bool {
    some_match(
        &[
            pattern!(
                r"^(?:how|where|can i)(?:\s+(?:can|do|should|could)\s+(?:i|one|you))?(?:\s+to)?\s+(?:nominate|submit|register|enter|apply|elect)"
            ),
            pattern!(r"^(?:how|where|can i)\s+(?:to\s+|can i\s+)?be(?:come)?(?:\s+a)?\s+mod(?:erator)?"),
        ],
        text,
    ) && none_match(
        &[pattern!(
            r"(?:nominate|submit|register|enter|apply|elect)\s+(?:(?:an)?others?|some(?:one|body)|another)\b"
        )],
        text,
    )
}

/// Asked whether other users can be nominated.
#[must_use]
pub fn is_asked_if_can_nominate_others(text: &str) -> bool {
    some_match(
        &[pattern!(
            r"^(?:how\s+can|can|how\s+to|how\s+do)(?:\s+(?:one|i|we|you|others?|people|anyone))?(?:\s+users?)?\s+(?:nominate|register)\s+(?:(?:an)?others?(?:\s+users?)?|some(?:one|body)|another)"
        )],
        text,
    )
}

/// Asked why a nomination disappeared.
#[must_use]
pub fn is_asked_why_nomination_removed(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:why|what)\b"),
            pattern!(r"\b(?:nomination|nominee|candidate)s?\b"),
            pattern!(
                r"\b(?:deleted?|vanish(?:ed)?|erased?|removed?|unpublish(?:ed)?|cancel(?:led)?|withdrawn?|fewer|less(?:er)?|resign)\b"
            ),
        ],
        text,
    )
}

/// Asked whether moderators are paid.
#[must_use]
pub fn is_asked_if_mods_are_paid(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:why|what|are|how|do)\b"),
            pattern!(r"\b(?:reward|rewarded|paid|compensat(?:ed|ion)|money)\b"),
            pattern!(r"\b(?:mods|moderators)\b"),
        ],
        text,
    )
}

/// Asked what moderators do or which privileges they get.
#[must_use]
pub fn is_asked_about_mods_or_mod_powers(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:why|what|should|does)\b"),
            pattern!(
                r"\b(?:should i (?:be|become)|is a|(?:do|does)(?: a)? (?:mod|moderator)s?|benefits?|privileges?|powers?|responsibilit(?:y|ies))\b"
            ),
            pattern!(r"\b(?:mod|moderator)s?\b"),
        ],
        text,
    )
}

/// Asked how or where to vote.
#[must_use]
pub fn is_asked_about_voting(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:where|how|want|when)\b"),
            pattern!(r"\b(?:do|can|to|give|cast|should)\b"),
            pattern!(r"\b(?:voting|vote|elect)\b"),
        ],
        text,
    )
}

/// Asked who the current moderators are.
///
/// `api_slug` is the site's API name, accepted in `whois <slug> mods`.
#[must_use]
pub fn is_asked_for_current_mods(text: &str, api_slug: &str) -> bool {
    let whois = text
        .strip_prefix("whois ")
        .and_then(|rest| rest.strip_prefix(api_slug))
        .is_some_and(|rest| matches!(rest, " mods" | " moderators"));

    whois
        || some_match(
            &[
                pattern!(r"^who(?: are| is|'s) the current mod(?:erator)?s?"),
                pattern!(r"^how many mod(?:erator)?s? (?:are there|do we have)"),
                pattern!(r"^how.*\bcontact\b.*mod(?:erator)?s?"),
            ],
            text,
        )
}

/// Asked who won or will win.
#[must_use]
pub fn is_asked_for_current_winners(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:who|how\s+many)"),
            pattern!(r"winners|new\s+mod|will\s+win|future\s+mod"),
        ],
        text,
    )
}

/// Asked how many positions are being filled.
#[must_use]
pub fn is_asked_for_current_positions(text: &str) -> bool {
    pattern!(
        r"^how many (?:positions|mod(?:erator)?s) (?:are|were|will be)(?: being)? (?:elected|there)"
    )
    .is_match(text)
}

/// Asked who the nominees are.
#[must_use]
pub fn is_asked_for_current_nominees(text: &str) -> bool {
    some_match(
        &[
            pattern!(
                r"^(?:(?:are|is) there)?(?: ?any| a)?(?: new)? (?:nomination|nominee|candidate)s?(?: so far)?\b"
            ),
            pattern!(
                r"(?:who|what) (?:are|were|was|is|has)(?: the)? (?:nomin(?:ee|ation|ated)|particip(?:ant|ated)|candidate)s?\b"
            ),
            pattern!(r"how many (?:nomin(?:ee|ation|ated)|participant|candidate)s?\b"),
        ],
        text,
    ) && none_match(
        &[
            pattern!(r"(?:nomination|nominee|candidate)s?(?: so far)? in.+?room"),
            pattern!(r"(?:nomin(?:ee|ation|ated)|particip(?:ant|ated)|candidate)s?\s+score"),
            pattern!(
                r"how many (?:nomin(?:ee|ation|ated)|participant|candidate)s?\s+(?:are here|are in.+?room|(?:have|are|were) withdrawn)"
            ),
        ],
        text,
    )
}

/// Asked who withdrew.
#[must_use]
pub fn is_asked_for_withdrawn_nominees(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:who)\b.*\b(?:withdr[ae]wn?|removed|deleted)\b.*\b(?:election|nomination)"),
            pattern!(r"^(?:whom?) (?:has|have|was)\b.*\b(?:withdr[ae]wn?|removed|deleted)"),
            pattern!(
                r"^(?:how many|which|was|were)\b.*\b(?:candidate|nomin(?:ee|ation))s?\b.*\b(?:withdr[ae]wn?|removed|deleted)"
            ),
        ],
        text,
    )
}

/// Asked for the election schedule.
#[must_use]
pub fn is_asked_for_election_schedule(text: &str) -> bool {
    pattern!(r"(?:when|how|what)(?: is|'s) the election(?: scheduled)?|election schedule")
        .is_match(text)
}

/// Asked whether a ♦ can be added to a username.
#[must_use]
pub fn is_asked_about_username_diamond(text: &str) -> bool {
    pattern!(r"(?:edit|insert|add).+?(?:\x{2666}|diamond).+?(?:user)?name").is_match(text)
}

/// Asked who made or maintains the bot.
#[must_use]
pub fn is_asked_who_made_me(text: &str) -> bool {
    pattern!(
        r"who(?: (?:are|is) your)?\s+(?:made|created|own(?:s|ers?)|develop(?:s|ed|ers?)|maintain(?:s|ers?))(?:\s+you)?"
    )
    .is_match(text)
}

/// Asked who or what the bot is.
#[must_use]
pub fn is_asked_who_am_i(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:(?:who|what)\s+are\s+you|about)\b"),
            pattern!(r"^are\s+you(?:\s+(?:a|the))?\s+(?:bot|robot|chat\s*?bot|da?emon)"),
        ],
        text,
    )
}

/// Asked how the bot is doing.
#[must_use]
pub fn is_asked_how_am_i(text: &str) -> bool {
    pattern!(r"^(?:(?:hello|hi|heya)(?:\s+bot)?,?\s+)?how\s+are\s+you(?:\s+today)?(?:$|\?)")
        .is_match(text)
}

/// Asked whether the bot is alive.
#[must_use]
pub fn is_asked_am_i_alive(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:where\s+ar[et]\s+(?:you|thou)|alive|dead|ping)(?:$|\?)"),
            pattern!(r"^are\s+you\s+(?:t?here|alive|dead)(?:$|\?)"),
        ],
        text,
    )
}

/// Asked for the meaning of life.
#[must_use]
pub fn is_asked_meaning_of_life(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^what(?:'s| is)(?:\s+the|\s+an?)\s+(?:answer|meaning|reason)\s+(?:of|to|for)\s+life(?:$|\?)"),
            pattern!(r"^what\s+is\s+42(?:$|\?)"),
        ],
        text,
    )
}

/// Asked for one's own candidate score.
#[must_use]
pub fn is_asked_for_own_score(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"can i nominate myself"),
            pattern!(r"what(?: is|'s)\b.*\bm[ye](?: candidate)? score(?:$|\?)"),
        ],
        text,
    )
}

/// Asked for another user's candidate score.
#[must_use]
pub fn is_asked_for_other_score(text: &str) -> bool {
    all_match(
        &[pattern!(
            r"(?:(?:what)?(?: is|'s)(?: the)? |^)(?:candidate )?score (?:for |of )(?:the )?(?:(?:site )?user )?(?:@?-?\d+|https://.+/users/\d+.*)(?:$|\?)"
        )],
        text,
    ) && none_match(&[pattern!(r"\b(?:my|mine)\b")], text)
}

/// Asked how the candidate score is calculated.
#[must_use]
pub fn is_asked_for_score_formula(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"(?:what|how)\b.+\bcandidate score\b.*\b(?:calculated|formula)?(?:$|\?)"),
            pattern!(r"what\b.+\bformula\b.+\bcandidate score(?:$|\?)"),
        ],
        text,
    ) && none_match(&[pattern!(r"candidate score\s+of")], text)
}

/// Asked for the candidate score leaderboard.
#[must_use]
pub fn is_asked_for_score_leaderboard(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"who\b.*\b(?:highest|greatest|most)\b.*\bcandidate scores?"),
            pattern!(r"candidate scores? leaderboard(?:$|\?)"),
        ],
        text,
    )
}

/// Thanking the bot.
#[must_use]
pub fn is_thanking_the_bot(text: &str) -> bool {
    pattern!(r"thanks?(?: you|,? bot|[!?]|$)").is_match(text)
}

/// Praising the bot.
#[must_use]
pub fn is_loving_the_bot(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"\b(?:election)?bot\b"),
            pattern!(
                r"\b(?:awesome|brilliant|clever|correct|excellent|good|great|impressive|like|love|legit|marvell?ous|nice|neat|perfect|praise|right|smart|super|superb|swell|wise|wonderful)\b"
            ),
            pattern!(r"\b(?:is|the|this|bot|electionbot|wow|pretty|very)\b"),
        ],
        text,
    )
}

/// Complaining about the bot.
#[must_use]
pub fn is_hating_the_bot(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"\b(?:election)?bot\b"),
            pattern!(r"\b(?:bad|terrible|horrible|broken|buggy|dislike|hate|detest|poor)\b"),
            pattern!(r"\b(?:is|the|this|bot|electionbot|wow|pretty|very)\b"),
        ],
        text,
    )
}

/// Saying the bot is insane.
#[must_use]
pub fn is_saying_bot_is_insane(text: &str) -> bool {
    all_match(
        &[pattern!(r"\b(?:election)?bot\b"), pattern!(r"\b(?:insane|crazy)\b")],
        text,
    )
}

/// Asked whether a user id is eligible.
#[must_use]
pub fn is_asked_for_user_eligibility(text: &str) -> bool {
    pattern!(r"^(?:can|is) user \d+(?: be)? (?:eligible|nominated?|elected?)").is_match(text)
}

/// The lightbulb joke.
#[must_use]
pub fn is_asked_about_lightbulb(text: &str) -> bool {
    pattern!(
        r"how (?:many|much) mod(?:erator)?s(?: does)? it takes? to (?:change|fix|replace)(?: a| the)? light\s?bulb"
    )
    .is_match(text)
}

/// Asked for a Jon Skeet fact.
#[must_use]
pub fn is_asked_about_jon_skeet_jokes(text: &str) -> bool {
    pattern!(r"(?:tell|say)\b.*\bjon\s?skeet\s?(?:joke|fact|meme)?[!?]+$").is_match(text)
}

/// Asked for a joke.
#[must_use]
pub fn is_asked_about_jokes(text: &str) -> bool {
    pattern!(r"(?:tell|make|say)\b.+?\b(?:me|us)?\b.+?(?:(?: a)? joke|laugh)").is_match(text)
}

/// Asked whether the bot's responses are canned.
#[must_use]
pub fn is_asked_if_responses_are_canned(text: &str) -> bool {
    pattern!(r"bot\b.+?says?\b.+?canned").is_match(text)
}

/// Asked which badges are required to nominate.
#[must_use]
pub fn is_asked_about_required_badges(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:what\s+are|list)(?:\s+the)?\s+(?:required|mandatory|necessary)\s+badges"),
            pattern!(r"^(?:what|which)(?:\s+of)?(?:\s+the)?\s+badges\s+are\s+(?:required|mandatory|necessary)"),
        ],
        text,
    )
}

/// Asked to list badges of a type; the type is available via [`badge_type`].
#[must_use]
pub fn is_asked_about_badges_of_type(text: &str) -> bool {
    badge_type(text).is_some()
}

/// Extracts the badge type from a "what are the X badges" question.
#[must_use]
pub fn badge_type(text: &str) -> Option<&str> {
    pattern!(r"^(?:what|list)(?: are)?(?: the)?.+?\b(participation|editing|moderation)\s+badges")
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Asked how to decide who to vote for.
#[must_use]
pub fn is_asked_how_or_who_to_vote(text: &str) -> bool {
    // Short questions ("how to vote?") belong to the plain voting intent.
    text.chars().count() > 14
        && some_match(
            &[
                pattern!(
                    r"^(?:how|whom?)\s+(?:should(?:n't|\s+not)? i|to)\s+(?:(?:choose|pick|decide|determine)?.+?\bvote\b|vote)"
                ),
                pattern!(r"^how\s+do(?:es)?\s+(?:the\s+)?voting\s+(?:process)?work"),
            ],
            text,
        )
}

/// Asked where the nomination comments went.
#[must_use]
pub fn is_asked_about_missing_comments(text: &str) -> bool {
    all_match(
        &[
            pattern!(r"^(?:where|why|are|were|did|who|how|i|is|election)\b"),
            pattern!(
                r"\b(?:missing|hidden|cleared|deleted?|removed?|go|election|nominations?|all|view|find|bug|see)\b"
            ),
            pattern!(r"\bcomments?\b"),
        ],
        text,
    )
}

/// Asked who the best candidate is.
#[must_use]
pub fn is_asked_who_is_the_best_candidate(text: &str) -> bool {
    pattern!(
        r"^(?:who(?:'s)?|what(?:'s)?|which) (?:was |were |are |is )?(?:a |the )?.*\bbest(?:est)? (?:candidate|nomination|nominee)s?"
    )
    .is_match(text)
}

/// Asked who the best moderator is.
#[must_use]
pub fn is_asked_who_is_the_best_mod(text: &str) -> bool {
    pattern!(
        r"^(?:who|which)\s+(?:is|are)(?:\s+the)?(?:\s+most)?\s+(?:best|coolest|loved|favou?rite)\s+(?:mod|diamond)(?:erator)?"
    )
    .is_match(text)
}

/// Asked about single transferable vote.
#[must_use]
pub fn is_asked_about_stv(text: &str) -> bool {
    pattern!(r"^(?:what|how).*?(?:\s+meek)?\s+s(?:ingle\s+)?t(?:ransferable\s+)?v(?:ote)?\b")
        .is_match(text)
}

/// Asked how many moderators are in the room.
#[must_use]
pub fn is_asked_how_many_mods_in_the_room(text: &str) -> bool {
    pattern!(r"^how many mod(?:erator)?s are here(?:\?|$)").is_match(text)
}

/// Asked how many candidates are in the room.
#[must_use]
pub fn is_asked_how_many_candidates_in_the_room(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^how many (?:candidate|nominee)s are\s+(?:here|in\s+th(?:e|is)\s+room)(?:\?|$)"),
            pattern!(r"^are(?:\s+there)?\s+any\s+(?:candidate|nominee)s\s+(?:here|in\s+th(?:e|is)\s+room)(?:\?|$)"),
        ],
        text,
    )
}

/// Asked for help.
#[must_use]
pub fn is_asked_for_help(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^can you help(?:\s+me)?"),
            pattern!(r"^(?:please\s+)?(?:h[ae]lp|info)(?:(?:\s+me)?(?:,?\s+please)?)(?:[?!]|$)"),
        ],
        text,
    )
}

/// Asked for the full help list.
#[must_use]
pub fn is_asked_for_full_help(text: &str) -> bool {
    pattern!(r"^(?:(?:help|info|topics) (?:full|all|complete)|(?:full|all|complete) (?:help|info|topics))")
        .is_match(text)
}

/// Asked what an election is.
#[must_use]
pub fn is_asked_what_election_is(text: &str) -> bool {
    text.chars().count() <= 56
        && some_match(
            &[
                pattern!(r"^(?:what|what's) (?:is )?(?:a |an |the )?election(?:\?!?|$)"),
                pattern!(r"^how do(?:es)? (?:a |an |the )?elections? work"),
            ],
            text,
        )
}

/// Asked for the election status.
#[must_use]
pub fn is_asked_what_is_election_status(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:what|how)\s+is(?:\s+the)?\s+election\s+(?:stat(?:us|e)|progress(?:ing)?)(?:\?!?|$)"),
            pattern!(r"^election\s+(?:stat(?:us|e)|progress)(?:\?!?|$)"),
            pattern!(r"^what\s+is(?:\s+the)?\s+(?:stat(?:us|e)|progress)\s+of(?:\s+the)?\s+election(?:\?!?|$)"),
        ],
        text,
    )
}

/// Asked when the next phase starts.
#[must_use]
pub fn is_asked_when_is_the_next_phase(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^when(?:'s| is| does) (?:the )?next phase"),
            pattern!(r"^when(?:'s| is| does) (?:the )?(?:nomination|election) (?:phase )?(?:start|end)(?:ing)"),
            pattern!(r"is (?:it|election|nomination) (?:start|end)(?:ing|ed)\s?(?:soon|yet)?"),
        ],
        text,
    )
}

/// Asked when the election ends.
#[must_use]
pub fn is_asked_when_the_election_ends(text: &str) -> bool {
    pattern!(r"^when(?:\s+does)?(?:\s+the)?\s+(?:it|election)\s+ends?(?:\?!?|$)").is_match(text)
}

/// Asked how many users may vote.
#[must_use]
pub fn is_asked_how_many_are_eligible_to_vote(text: &str) -> bool {
    pattern!(r"^how many(?: (?:users|people|bots))?(?: are eligible to| can) vote").is_match(text)
}

/// Asked for the election page link.
#[must_use]
pub fn is_asked_for_election_page(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"(?:what|where)\s+is(?:\s+the)?\s+(?:(?:link|url)\s+(?:to|of)(?:\s+the)?\s+election|election\s+page)"),
            pattern!(r"(?:link|url)\b.*\belection\b(?:page)?\s?(?:[?!]|$)"),
            pattern!(r"election (?:page )?(?:link|url)(?:[?!]|$)"),
        ],
        text,
    )
}

/// Asked where the ballot file is.
#[must_use]
pub fn is_asked_about_ballot_file(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:where|how)\s+(?:can|is)(?:\s+i\s+find)?(?:\s+the)?\s+(?:ballot|blt)(?:\s+file)?"),
            pattern!(r"^is(?:\s+the)?\s+(?:ballot|blt)(?:\s+file)?\s+available"),
        ],
        text,
    )
}

/// Asked for the list of election phases.
#[must_use]
pub fn is_asked_about_election_phases(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^what\s+are(?:\s+the)?(?:\s+election(?:'s|s)?)?\s+phases(?:[?!]|$)"),
            pattern!(r"^list(?:\s+the)?\s+election(?:'s|s)?\s+phases(?:[?!]|$)"),
        ],
        text,
    )
}

/// Asked how many users voted.
#[must_use]
pub fn is_asked_how_many_voted(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^how\s+(?:many|much)(?:\s+users)?(?:\s+have)?\s+(?:vote|participate)d"),
            pattern!(r"^how\s+(?:many|much)\s+(?:participant|voter)s"),
        ],
        text,
    )
}

/// Asked whether one has voted.
#[must_use]
pub fn is_asked_if_one_has_voted(text: &str) -> bool {
    pattern!(r"^(?:did|have)\s+i\s+voted?(?:\s+in(?:\s+th[ei]s?)?\s+election)?(?:\?|$)").is_match(text)
}

/// Asked whether one can vote.
#[must_use]
pub fn is_asked_if_can_vote(text: &str) -> bool {
    pattern!(r"^can\s+i\s+vote(?:\s+in(?:\s+th[ei]s?)?\s+election)?(?:\?|$)").is_match(text)
}

/// Asked where the results are.
#[must_use]
pub fn is_asked_where_to_find_results(text: &str) -> bool {
    some_match(
        &[
            pattern!(r"^(?:where|how)\s+can\s+i\s+find(?:\s+th[ei]s?)?(?:\s+election)?\s+results(?:\?|$)"),
            pattern!(r"^(?:where|how)(?:\s+can)?(?:\s+th[ei]s?)?(?:\s+election)?\s+results(?:\s+can)?\s+be\s+found(?:\?|$)"),
        ],
        text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_nomination_versus_nominating_others() {
        let own = "how do i nominate myself";
        let others = "how can others nominate someone";

        assert!(is_asked_for_nominating_info(own));
        assert!(!is_asked_if_can_nominate_others(own));

        assert!(is_asked_if_can_nominate_others(others));
        assert!(!is_asked_for_nominating_info(others));
    }

    #[test]
    fn nominating_info_variants() {
        assert!(is_asked_for_nominating_info("where to nominate?"));
        assert!(is_asked_for_nominating_info("how can i become a moderator"));
        assert!(!is_asked_for_nominating_info("how to nominate someone else"));
        assert!(is_asked_if_can_nominate_others("can i nominate another user?"));
    }

    #[test]
    fn voting_questions() {
        assert!(is_asked_about_voting("how do i vote"));
        assert!(is_asked_about_voting("where can i cast my vote?"));
        assert!(!is_asked_about_voting("i voted yesterday"));
        assert!(is_asked_how_or_who_to_vote("who should i vote for?"));
        assert!(!is_asked_how_or_who_to_vote("how to vote?"));
        assert!(is_asked_if_can_vote("can i vote in this election?"));
        assert!(is_asked_if_one_has_voted("did i vote?"));
        assert!(is_asked_how_many_voted("how many users have voted?"));
        assert!(is_asked_how_many_are_eligible_to_vote("how many people can vote"));
    }

    #[test]
    fn nominee_questions_exclude_room_and_score() {
        assert!(is_asked_for_current_nominees("who are the candidates?"));
        assert!(is_asked_for_current_nominees("are there any nominees so far?"));
        assert!(is_asked_for_current_nominees("how many candidates are there"));
        assert!(!is_asked_for_current_nominees("how many candidates are in the room?"));
        assert!(!is_asked_for_current_nominees("what is the candidate score of 1"));
        assert!(is_asked_how_many_candidates_in_the_room("how many candidates are in the room?"));
    }

    #[test]
    fn withdrawn_and_removed() {
        assert!(is_asked_for_withdrawn_nominees("who has withdrawn from the election?"));
        assert!(is_asked_for_withdrawn_nominees("which candidates have withdrawn"));
        assert!(is_asked_why_nomination_removed("why was my nomination removed?"));
    }

    #[test]
    fn current_mods_uses_site_slug() {
        assert!(is_asked_for_current_mods("whois stackoverflow mods", "stackoverflow"));
        assert!(!is_asked_for_current_mods("whois superuser mods", "stackoverflow"));
        assert!(is_asked_for_current_mods("who are the current moderators?", "math"));
        assert!(is_asked_for_current_mods("how do i contact the mods", "math"));
    }

    #[test]
    fn score_questions() {
        assert!(is_asked_for_own_score("what is my candidate score?"));
        assert!(is_asked_for_own_score("can i nominate myself?"));
        assert!(is_asked_for_other_score("what is the candidate score of 12345"));
        assert!(is_asked_for_other_score("score for user 42?"));
        assert!(is_asked_for_score_formula("how is the candidate score calculated?"));
        assert!(!is_asked_for_score_formula("what is the candidate score of 12345"));
        assert!(is_asked_for_score_leaderboard("who has the highest candidate score"));
    }

    #[test]
    fn bot_identity_and_mood() {
        assert!(is_asked_am_i_alive("alive?"));
        assert!(is_asked_am_i_alive("are you there?"));
        assert!(is_asked_who_am_i("who are you?"));
        assert!(is_asked_who_am_i("are you a bot"));
        assert!(is_asked_how_am_i("hi, how are you today?"));
        assert!(is_asked_who_made_me("who made you?"));
        assert!(is_asked_meaning_of_life("what is the meaning of life?"));
        assert!(is_asked_meaning_of_life("what is 42"));
        assert!(is_thanking_the_bot("thank you"));
        assert!(is_thanking_the_bot("thanks!"));
        assert!(!is_thanking_the_bot("thanksgiving dinner"));
        assert!(is_loving_the_bot("this bot is awesome"));
        assert!(is_hating_the_bot("the bot is broken"));
        assert!(is_saying_bot_is_insane("this bot is crazy"));
        assert!(!is_saying_bot_is_insane("that was a crazy game"));
    }

    #[test]
    fn badge_questions() {
        assert!(is_asked_about_required_badges("what are the required badges?"));
        assert!(is_asked_about_required_badges("which badges are required"));
        assert_eq!(badge_type("what are the participation badges?"), Some("participation"));
        assert_eq!(badge_type("list the moderation badges"), Some("moderation"));
        assert!(!is_asked_about_badges_of_type("what are badges"));
    }

    #[test]
    fn schedule_and_phase_questions() {
        assert!(is_asked_for_election_schedule("what is the election schedule?"));
        assert!(is_asked_what_is_election_status("what is the election status?"));
        assert!(is_asked_what_is_election_status("election status"));
        assert!(is_asked_when_is_the_next_phase("when is the next phase?"));
        assert!(is_asked_when_is_the_next_phase("is election starting soon"));
        assert!(is_asked_when_the_election_ends("when does the election end?"));
        assert!(is_asked_about_election_phases("what are the election phases?"));
        assert!(is_asked_what_election_is("what is an election?"));
        assert!(is_asked_for_election_page("what is the link to the election"));
        assert!(is_asked_about_ballot_file("where can i find the ballot file"));
        assert!(is_asked_where_to_find_results("where can i find the results?"));
        assert!(is_asked_where_to_find_results("where can the election results be found?"));
    }

    #[test]
    fn mod_questions() {
        assert!(is_asked_if_mods_are_paid("are moderators paid?"));
        assert!(is_asked_about_mods_or_mod_powers("what privileges do moderators have?"));
        assert!(is_asked_for_current_winners("who are the winners?"));
        assert!(is_asked_for_current_positions("how many positions are there"));
        assert!(is_asked_how_many_mods_in_the_room("how many mods are here?"));
        assert!(is_asked_who_is_the_best_mod("who is the best mod"));
        assert!(is_asked_who_is_the_best_candidate("who is the best candidate?"));
        assert!(is_asked_about_username_diamond("can i add a diamond to my username"));
        assert!(is_asked_about_username_diamond("how to insert \u{2666} in username"));
    }

    #[test]
    fn help_and_fun() {
        assert!(is_asked_for_help("help"));
        assert!(is_asked_for_help("can you help me?"));
        assert!(is_asked_for_full_help("help full"));
        assert!(!is_asked_for_help("help full"));
        assert!(is_asked_about_lightbulb("how many mods does it take to change a lightbulb"));
        assert!(is_asked_about_jon_skeet_jokes("tell me a jon skeet fact!"));
        assert!(is_asked_about_jokes("tell us a joke"));
        assert!(is_asked_if_responses_are_canned("does the bot say canned responses"));
        assert!(is_asked_about_stv("what is stv?"));
        assert!(is_asked_about_stv("how does meek single transferable vote work"));
        assert!(is_asked_about_missing_comments("where did the comments go?"));
        assert!(is_asked_for_user_eligibility("can user 1234 be nominated"));
    }
}
