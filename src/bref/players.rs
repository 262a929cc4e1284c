//! Per-game player tables: names and full stat rows.
//!
//! The league per-game page marks one row per player with `class="full_table"`
//! (partial-season rows for traded players carry other classes). The first
//! anchor in the row is the player's name; every `<td>` carries a `data-stat`
//! attribute naming the column.

use crate::models::PlayerStats;
use scraper::{Html, Selector};
use std::collections::HashMap;

pub(crate) fn extract_names(doc: &Html) -> Vec<String> {
    let row_sel = Selector::parse("tr.full_table").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    doc.select(&row_sel)
        .filter_map(|row| row.select(&a_sel).next())
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

pub(crate) fn extract_stats(doc: &Html) -> Vec<PlayerStats> {
    let row_sel = Selector::parse("tr.full_table").unwrap();
    let a_sel = Selector::parse("a").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    let mut rows = Vec::new();
    for row in doc.select(&row_sel) {
        let Some(name) = row
            .select(&a_sel)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string())
        else {
            continue;
        };

        let mut stats = HashMap::new();
        for td in row.select(&td_sel) {
            if let Some(key) = td.attr("data-stat") {
                let value = td.text().collect::<String>().trim().to_string();
                stats.insert(key.to_string(), value);
            }
        }
        rows.push(PlayerStats { name, stats });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table>
          <tr class="full_table">
            <th>1</th>
            <td data-stat="player"><a href="/players/j/jamesle01.html">LeBron James</a></td>
            <td data-stat="pts_per_g">25.7</td>
            <td data-stat="ast_per_g">8.3</td>
          </tr>
          <tr class="partial_table">
            <th>2</th>
            <td data-stat="player"><a href="/players/x/traded01.html">Traded Player</a></td>
            <td data-stat="pts_per_g">10.0</td>
          </tr>
          <tr class="full_table">
            <th>3</th>
            <td data-stat="player"><a href="/players/d/duranke01.html">Kevin Durant</a></td>
            <td data-stat="pts_per_g">27.1</td>
          </tr>
        </table>
    "#;

    #[test]
    fn names_come_from_full_table_rows_only() {
        let doc = Html::parse_document(PAGE);
        let names = extract_names(&doc);
        assert_eq!(names, vec!["LeBron James", "Kevin Durant"]);
    }

    #[test]
    fn stat_rows_map_data_stat_to_cell_text() {
        let doc = Html::parse_document(PAGE);
        let rows = extract_stats(&doc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "LeBron James");
        assert_eq!(rows[0].stats.get("pts_per_g").map(String::as_str), Some("25.7"));
        assert_eq!(rows[0].stats.get("ast_per_g").map(String::as_str), Some("8.3"));
        assert_eq!(rows[1].stats.get("ast_per_g"), None);
    }

    #[test]
    fn empty_document_yields_no_rows() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(extract_names(&doc).is_empty());
        assert!(extract_stats(&doc).is_empty());
    }
}
