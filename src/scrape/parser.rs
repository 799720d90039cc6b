//! Election page HTML parser.
//!
//! Pure function of the page HTML, the election URL and `now`: the same
//! inputs always produce the same [`ElectionState`].

use chrono::{DateTime, NaiveDateTime, Utc};
use scraper::{ElementRef, Html, Selector};

use crate::domain::{ElectionState, Nominee, Phase, PhaseDates, derive_phase};
use crate::error::BotError;

/// Inputs besides the HTML that shape the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Election page URL without query string.
    pub election_url: &'a str,
    /// Questionnaire link used when the page does not have one.
    pub fallback_qa: Option<&'a str>,
    /// Chat room link used when the page does not have one.
    pub fallback_chat: Option<&'a str>,
}

/// Parses the nomination tab of an election page.
///
/// # Errors
///
/// Returns [`BotError::Parse`] if the sidebar does not carry the phase
/// dates or a date cannot be read.
pub fn parse_election_page(
    html: &str,
    page: &PageContext<'_>,
    now: DateTime<Utc>,
) -> Result<ElectionState, BotError> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selector("#content h1")?)
        .next()
        .map(|h1| collapse_whitespace(&text_of(h1)))
        .unwrap_or_default();

    let mut sidebar: Vec<Option<String>> = document
        .select(&selector("#sidebar .label-value")?)
        .map(|el| {
            let value = el
                .value()
                .attr("title")
                .filter(|t| !t.trim().is_empty())
                .map_or_else(|| text_of(el), str::to_string);
            Some(value.trim().to_string())
        })
        .collect();
    // Elections without a primary list five values.
    if sidebar.len() == 5 {
        sidebar.insert(1, None);
    }
    if sidebar.len() < 6 {
        return Err(BotError::Parse(format!(
            "expected 6 sidebar values, found {}",
            sidebar.len()
        )));
    }
    let value = |index: usize| sidebar.get(index).cloned().flatten();

    let dates = PhaseDates {
        nomination: required_date(value(0), "nomination")?,
        primary: value(1).map(|d| parse_date(&d, "primary")).transpose()?,
        election: required_date(value(2), "election")?,
        ended: required_date(value(3), "ended")?,
    };

    let rep_nominate = document
        .select(&selector("#sidebar .module.newuser b")?)
        .nth(1)
        .map_or(0, |b| parse_count(&text_of(b)));

    let nomination_tab = format!("{}?tab=nomination", page.election_url);
    let nominees = parse_nominees(&document, &nomination_tab)?;

    let post_links: Vec<String> = document
        .select(&selector("#mainbar .post-text .wiki-ph-content a[href]")?)
        .filter_map(|a| a.value().attr("href").map(str::to_string))
        .collect();
    let qna_url = post_links
        .iter()
        .find(|href| href.contains("questionnaire"))
        .cloned()
        .or_else(|| page.fallback_qa.map(str::to_string));
    let chat_url = post_links
        .iter()
        .find(|href| href.contains("/rooms/"))
        .cloned()
        .or_else(|| page.fallback_chat.map(str::to_string));

    let cancelled_text = document
        .select(&selector("#mainbar .question-status")?)
        .map(|status| collapse_whitespace(&text_of(status)))
        .find(|text| text.to_lowercase().contains("cancel"));

    let phase = if cancelled_text.is_some() {
        Some(Phase::Cancelled)
    } else {
        derive_phase(&dates, now)
    };

    let mut results_url = None;
    let mut stat_voters = None;
    let mut winners = Vec::new();
    if phase == Some(Phase::Ended) {
        let headings: Vec<ElementRef<'_>> = document
            .select(&selector("#mainbar .question-status h2")?)
            .collect();
        let link = selector("a[href]")?;

        results_url = headings
            .first()
            .and_then(|h2| h2.select(&link).next())
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        if let Some(h2) = headings.get(1) {
            let text = direct_text(*h2);
            stat_voters = (!text.is_empty()).then_some(text);
            let winner_ids: Vec<u64> = h2
                .select(&link)
                .filter_map(|a| a.value().attr("href").and_then(user_id_from_href))
                .collect();
            winners = nominees
                .iter()
                .filter(|n| winner_ids.contains(&n.user_id))
                .cloned()
                .collect();
        }
    }

    Ok(ElectionState {
        election_url: page.election_url.to_string(),
        site_url: site_root(page.election_url),
        title,
        updated: now,
        date_nomination: dates.nomination,
        date_primary: dates.primary,
        date_election: dates.election,
        date_ended: dates.ended,
        num_candidates: value(4).map_or(0, |v| parse_count(&v)),
        num_positions: value(5).map_or(0, |v| parse_count(&v)),
        rep_vote: ElectionState::DEFAULT_REP_VOTE,
        rep_nominate,
        nominees,
        winners,
        phase,
        results_url,
        stat_voters,
        qna_url,
        chat_url,
        cancelled_text,
    })
}

fn parse_nominees(document: &Html, nomination_tab: &str) -> Result<Vec<Nominee>, BotError> {
    let rows = selector("#mainbar .candidate-row")?;
    let details = selector(".user-details")?;
    let user_link = selector(".user-details a[href]")?;
    let score = selector(".candidate-score-breakdown b")?;

    let mut nominees = Vec::new();
    for row in document.select(&rows) {
        let Some(link) = row.select(&user_link).next() else {
            tracing::warn!(row_id = ?row.value().id(), "candidate row without user link, skipping");
            continue;
        };
        let Some(user_id) = link.value().attr("href").and_then(user_id_from_href) else {
            tracing::warn!(href = ?link.value().attr("href"), "candidate link without user id, skipping");
            continue;
        };

        let user_years = row
            .select(&details)
            .next()
            .map(direct_text)
            .unwrap_or_default();
        let score_text: String = row.select(&score).map(text_of).collect();

        nominees.push(Nominee {
            user_id,
            user_name: collapse_whitespace(&text_of(link)),
            user_years,
            score: score_fraction(&score_text).unwrap_or_default(),
            permalink: row
                .value()
                .id()
                .map(|id| format!("{nomination_tab}#{id}"))
                .unwrap_or_default(),
        });
    }
    Ok(nominees)
}

fn selector(css: &str) -> Result<Selector, BotError> {
    Selector::parse(css).map_err(|e| BotError::Parse(format!("selector `{css}`: {e:?}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text nodes that are direct children of `element`, trimmed and joined.
fn direct_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_count(text: &str) -> u32 {
    text.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

fn required_date(value: Option<String>, field: &str) -> Result<DateTime<Utc>, BotError> {
    let value = value.ok_or_else(|| BotError::Parse(format!("missing {field} date")))?;
    parse_date(&value, field)
}

fn parse_date(value: &str, field: &str) -> Result<DateTime<Utc>, BotError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%SZ", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| BotError::Parse(format!("unreadable {field} date `{value}`")))
}

/// Trailing `n/d` fraction of a score text such as `"candidate score 27/40"`.
fn score_fraction(text: &str) -> Option<String> {
    let (head, denominator) = text.trim().rsplit_once('/')?;
    if denominator.is_empty() || !denominator.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let numerator: String = head
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    (!numerator.is_empty()).then(|| format!("{numerator}/{denominator}"))
}

fn user_id_from_href(href: &str) -> Option<u64> {
    let (_, rest) = href.split_once("/users/")?;
    rest.split(['/', '?', '#']).next()?.parse().ok()
}

/// Scheme and host of a URL, e.g. `https://stackoverflow.com`.
fn site_root(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.trim_end_matches('/').to_string();
    };
    let host = rest.split('/').next().unwrap_or(rest);
    format!("{scheme}://{host}")
}
