//! Playoff bracket extraction.
//!
//! The playoffs page has no single bracket table; instead, any `<tr>` whose
//! cell text names a round holds one series: the first two anchors are the
//! teams, and the text node after the second anchor carries the running
//! series score, e.g. `" (4-2)"`.

use crate::models::{BracketRound, PlayoffBracket, PlayoffSeries};
use scraper::{Html, Selector};

/// Round names as they appear on the page, in bracket order.
pub(crate) const ROUND_NAMES: &[&str] = &[
    "Western Conference First Round",
    "Eastern Conference First Round",
    "Western Conference Semifinals",
    "Eastern Conference Semifinals",
    "Western Conference Finals",
    "Eastern Conference Finals",
    "Finals",
];

pub(crate) fn extract(doc: &Html) -> Result<PlayoffBracket, &'static str> {
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    let mut rounds: Vec<BracketRound> = ROUND_NAMES
        .iter()
        .map(|name| BracketRound {
            name: name.to_string(),
            series: Vec::new(),
        })
        .collect();

    let mut rows_seen = 0usize;
    for row in doc.select(&tr_sel) {
        rows_seen += 1;

        let Some(round_idx) = row.select(&td_sel).find_map(|td| {
            let text = td.text().collect::<String>();
            ROUND_NAMES.iter().position(|name| *name == text.trim())
        }) else {
            continue;
        };

        let mut anchors = row.select(&a_sel);
        let (Some(first), Some(second)) = (anchors.next(), anchors.next()) else {
            continue;
        };
        let team_a = first.text().collect::<String>().trim().to_string();
        let team_b = second.text().collect::<String>().trim().to_string();

        // Series score lives in the text node right after the second team link.
        let score_text = second
            .next_sibling()
            .and_then(|node| node.value().as_text().map(|t| t.to_string()))
            .unwrap_or_default();
        let (wins_a, wins_b) = parse_series_score(&score_text);

        rounds[round_idx].series.push(PlayoffSeries {
            team_a,
            wins_a,
            team_b,
            wins_b,
        });
    }

    if rows_seen == 0 {
        return Err("no table rows found");
    }
    Ok(PlayoffBracket { rounds })
}

/// Pull the two game counts out of a score fragment like `" (4-2)"`.
/// Tolerates surrounding whitespace and punctuation; missing counts read as 0.
fn parse_series_score(text: &str) -> (u32, u32) {
    let mut counts = [0u32; 2];
    let mut idx = 0;
    let mut current: Option<u32> = None;
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            // Saturate rather than overflow on absurdly long digit runs.
            let value = current.unwrap_or(0);
            current = Some(value.saturating_mul(10).saturating_add(digit));
        } else if let Some(value) = current.take() {
            if idx < counts.len() {
                counts[idx] = value;
                idx += 1;
            }
        }
    }
    if let (Some(value), true) = (current, idx < counts.len()) {
        counts[idx] = value;
    }
    (counts[0], counts[1])
}
