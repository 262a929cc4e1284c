//! Standings table on the site's front page.
//!
//! East teams occupy the first fifteen `tr.full_table` rows, West the next
//! fifteen; conference rank restarts at 1 for the West block.

use crate::models::{CONFERENCE_SIZE, Team};
use scraper::{ElementRef, Html, Selector};

pub(crate) fn extract(doc: &Html) -> Vec<Team> {
    let row_sel = Selector::parse("tr.full_table").unwrap();
    let a_sel = Selector::parse("a").unwrap();
    let wins_sel = Selector::parse(r#"td[data-stat="wins"]"#).unwrap();
    let losses_sel = Selector::parse(r#"td[data-stat="losses"]"#).unwrap();

    doc.select(&row_sel)
        .enumerate()
        .filter_map(|(i, row)| {
            let name = row.select(&a_sel).next()?.attr("title")?.to_string();
            Some(Team {
                name,
                wins: cell_number(row, &wins_sel),
                losses: cell_number(row, &losses_sel),
                rank: (i % CONFERENCE_SIZE + 1) as u32,
            })
        })
        .collect()
}

/// Numeric cell text; absent or non-numeric cells read as 0.
fn cell_number(row: ElementRef<'_>, sel: &Selector) -> u32 {
    row.select(sel)
        .next()
        .and_then(|td| td.text().collect::<String>().trim().parse().ok())
        .unwrap_or(0)
}
