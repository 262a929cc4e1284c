//! Advanced statistics: the league-wide PER table, per-letter roster index
//! pages, and per-player career values.
//!
//! Player pages ship the career advanced table commented out inside
//! `div#all_advanced` (it is injected client-side), so reading a value means
//! pulling the comment body back out and parsing it as its own fragment.

use scraper::{Html, Node, Selector};

/// Name and PER for every `tr.full_table` row; missing or non-numeric PER
/// cells read as 0.0.
pub(crate) fn extract_per(doc: &Html) -> Vec<(String, f64)> {
    let row_sel = Selector::parse("tr.full_table").unwrap();
    let a_sel = Selector::parse("a").unwrap();
    let per_sel = Selector::parse(r#"td[data-stat="per"]"#).unwrap();

    let mut list = Vec::new();
    for row in doc.select(&row_sel) {
        let Some(name) = row
            .select(&a_sel)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string())
        else {
            continue;
        };
        let per = row
            .select(&per_sel)
            .next()
            .and_then(|td| td.text().collect::<String>().trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        list.push((name, per));
    }
    list
}

/// `(display name, href)` pairs harvested from `<th><a>` entries on a
/// per-letter roster index page.
pub(crate) fn index_entries(doc: &Html) -> Vec<(String, String)> {
    let th_sel = Selector::parse("th").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    doc.select(&th_sel)
        .filter_map(|th| th.select(&a_sel).next())
        .filter_map(|a| {
            let href = a.attr("href")?;
            let name = a.text().collect::<String>().trim().to_string();
            Some((name, href.to_string()))
        })
        .collect()
}

/// Read `td[data-stat=<field>]` out of the commented career advanced table.
/// Returns 0.0 when the table, the comment, or the field is absent.
pub(crate) fn extract_stat(doc: &Html, field: &str) -> f64 {
    let div_sel = Selector::parse("div#all_advanced").unwrap();
    let Some(div) = doc.select(&div_sel).next() else {
        return 0.0;
    };
    let Some(fragment) = div.descendants().find_map(|node| match node.value() {
        Node::Comment(comment) => Some(comment.to_string()),
        _ => None,
    }) else {
        return 0.0;
    };
    stat_from_fragment(&Html::parse_fragment(&fragment), field)
}

fn stat_from_fragment(fragment: &Html, field: &str) -> f64 {
    let Ok(sel) = Selector::parse(&format!(r#"td[data-stat="{field}"]"#)) else {
        return 0.0;
    };
    fragment
        .select(&sel)
        .next()
        .and_then(|td| td.text().collect::<String>().trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_defaults_to_zero_when_cell_is_missing() {
        let html = r#"
            <table>
              <tr class="full_table">
                <td data-stat="player"><a href="/p/a01.html">Player A</a></td>
                <td data-stat="per">27.1</td>
              </tr>
              <tr class="full_table">
                <td data-stat="player"><a href="/p/b01.html">Player B</a></td>
                <td data-stat="ws">5.2</td>
              </tr>
            </table>
        "#;
        let list = extract_per(&Html::parse_document(html));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], ("Player A".to_string(), 27.1));
        assert_eq!(list[1], ("Player B".to_string(), 0.0));
    }

    #[test]
    fn index_entries_come_from_th_anchors() {
        let html = r#"
            <table>
              <tr>
                <th><a href="/players/j/jamesle01.html">LeBron James</a></th>
                <td><a href="/elsewhere.html">Not An Entry</a></td>
              </tr>
              <tr><th>No anchor here</th></tr>
              <tr><th><a href="/players/j/jordami01.html">Michael Jordan</a></th></tr>
            </table>
        "#;
        let entries = index_entries(&Html::parse_document(html));
        assert_eq!(
            entries,
            vec![
                (
                    "LeBron James".to_string(),
                    "/players/j/jamesle01.html".to_string()
                ),
                (
                    "Michael Jordan".to_string(),
                    "/players/j/jordami01.html".to_string()
                ),
            ]
        );
    }

    #[test]
    fn stat_is_read_out_of_the_comment() {
        let html = r#"
            <div id="all_advanced">
              <!-- <table><tr>
                <td data-stat="per">27.1</td>
                <td data-stat="ts_pct">0.588</td>
              </tr></table> -->
            </div>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(extract_stat(&doc, "per"), 27.1);
        assert_eq!(extract_stat(&doc, "ts_pct"), 0.588);
    }

    #[test]
    fn missing_field_in_comment_reads_as_zero() {
        let html = r#"
            <div id="all_advanced">
              <!-- <table><tr><td data-stat="per">27.1</td></tr></table> -->
            </div>
        "#;
        assert_eq!(extract_stat(&Html::parse_document(html), "dbpm"), 0.0);
    }

    #[test]
    fn missing_table_reads_as_zero() {
        let doc = Html::parse_document("<html><body><p>index page</p></body></html>");
        assert_eq!(extract_stat(&doc, "per"), 0.0);

        let no_comment = Html::parse_document(r#"<div id="all_advanced"></div>"#);
        assert_eq!(extract_stat(&no_comment, "per"), 0.0);
    }
}
