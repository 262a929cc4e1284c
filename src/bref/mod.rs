//! Client for scraping basketball statistics from basketball-reference.com.
//!
//! Every operation is fetch-then-parse: the client performs the HTTP GET and
//! hands the document to a pure extraction function in the matching dataset
//! module, so extraction stays unit-testable on inline HTML.

pub mod advanced;
pub mod bracket;
mod errors;
pub mod players;
pub mod standings;

pub use errors::BrefError;

use crate::models::{Conference, PlayerStats, PlayoffBracket, Team};
use crate::resolve;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Human-readable statistic names and the site's `data-stat` field ids.
const ADV_STAT_FIELDS: &[(&str, &str)] = &[
    ("true shooting percentage", "ts_pct"),
    ("total rebound percentage", "trb_pct"),
    ("defensive plus/minus", "dbpm"),
    ("offensive plus/minus", "obpm"),
    ("player efficiency rating", "per"),
    ("assist percentage", "ast_pct"),
];

/// Resolve a human-readable statistic name to its `data-stat` field id.
pub fn stat_field(name: &str) -> Result<&'static str, BrefError> {
    let wanted = name.trim().to_lowercase();
    ADV_STAT_FIELDS
        .iter()
        .find(|(human, _)| *human == wanted)
        .map(|(_, field)| *field)
        .ok_or_else(|| BrefError::UnknownStatistic(name.to_string()))
}

/// Client for fetching pages from basketball-reference.com.
pub struct BrefClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for BrefClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BrefClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET a page and return its body, treating non-2xx as failure.
    async fn get_text(&self, url: &str) -> Result<String, BrefError> {
        debug!(url, "fetching page");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| BrefError::RequestFailed {
                url: url.to_string(),
                source,
            })?;
        resp.text().await.map_err(|source| BrefError::RequestFailed {
            url: url.to_string(),
            source,
        })
    }

    /// Current playoff bracket for a season, all seven rounds in order.
    pub async fn playoff_bracket(&self, year: i32) -> Result<PlayoffBracket, BrefError> {
        let url = format!("{}/playoffs/NBA_{}.html", self.base_url, year);
        let body = self.get_text(&url).await?;
        let bracket = bracket::extract(&Html::parse_document(&body)).map_err(|reason| {
            BrefError::ParseFailed {
                url: url.clone(),
                reason: reason.to_string(),
            }
        })?;
        let series_count: usize = bracket.rounds.iter().map(|r| r.series.len()).sum();
        info!(year, series = series_count, "extracted playoff bracket");
        Ok(bracket)
    }

    /// Names of every player with a per-game row in the given season.
    pub async fn player_names(&self, year: i32) -> Result<Vec<String>, BrefError> {
        let url = format!("{}/leagues/NBA_{}_per_game.html", self.base_url, year);
        let body = self.get_text(&url).await?;
        let names = players::extract_names(&Html::parse_document(&body));
        info!(year, count = names.len(), "extracted player names");
        Ok(names)
    }

    /// Full per-game stat rows for the given season.
    pub async fn player_stats(&self, year: i32) -> Result<Vec<PlayerStats>, BrefError> {
        let url = format!("{}/leagues/NBA_{}_per_game.html", self.base_url, year);
        let body = self.get_text(&url).await?;
        let rows = players::extract_stats(&Html::parse_document(&body));
        info!(year, count = rows.len(), "extracted player stat rows");
        Ok(rows)
    }

    /// Current standings, sliced to the requested conference.
    pub async fn standings(&self, conference: Conference) -> Result<Vec<Team>, BrefError> {
        let body = self.get_text(&self.base_url).await?;
        let teams = standings::extract(&Html::parse_document(&body));
        info!(count = teams.len(), conference = ?conference, "extracted standings");
        Ok(conference.slice(teams))
    }

    /// Player efficiency rating for every player in the given season.
    /// Missing PER cells read as 0.0.
    pub async fn per_list(&self, year: i32) -> Result<Vec<(String, f64)>, BrefError> {
        let url = format!("{}/leagues/NBA_{}_advanced.html", self.base_url, year);
        let body = self.get_text(&url).await?;
        let list = advanced::extract_per(&Html::parse_document(&body));
        info!(year, count = list.len(), "extracted PER list");
        Ok(list)
    }

    /// A career advanced statistic for one player, fuzzy-matched by name
    /// against the injected roster.
    ///
    /// The full resolution procedure: fuzzy-match the name, derive the
    /// roster index page from the last-name initial, resolve the player's
    /// detail link by exact scan of the index entries, then read the
    /// requested field out of the commented-out career advanced table.
    /// With `min_confidence` set, a best match scoring below it fails with
    /// [`crate::resolve::ResolveError::NoConfidentMatch`].
    pub async fn adv_stat(
        &self,
        name: &str,
        roster: &[String],
        stat: &str,
        min_confidence: Option<f64>,
    ) -> Result<f64, BrefError> {
        let field = stat_field(stat)?;
        let matched = match min_confidence {
            Some(threshold) => resolve::resolve_confident(name, roster, threshold)?,
            None => resolve::resolve(name, roster)?,
        };
        debug!(
            query = name,
            matched = matched.name.as_str(),
            score = matched.score,
            "resolved player name"
        );

        let initial = resolve::derive_index_key(&matched.name)?;
        let index_url = format!("{}/players/{}/", self.base_url, initial);
        let entries = {
            let body = self.get_text(&index_url).await?;
            advanced::index_entries(&Html::parse_document(&body))
        };

        // When no index entry matches, the lookup proceeds against the index
        // URL itself; the stat then reads as 0.0 since the page carries no
        // advanced table.
        let detail_url = match resolve::resolve_detail_link(&matched.name, &entries) {
            Some(href) => format!("{}{}", self.base_url, href),
            None => {
                warn!(
                    player = matched.name.as_str(),
                    url = index_url.as_str(),
                    "no detail link found on index page, reusing index url"
                );
                index_url.clone()
            }
        };

        let body = self.get_text(&detail_url).await?;
        let value = advanced::extract_stat(&Html::parse_document(&body), field);
        debug!(
            player = matched.name.as_str(),
            stat = field,
            value,
            "extracted advanced stat"
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_field_maps_known_names() {
        assert_eq!(stat_field("player efficiency rating").unwrap(), "per");
        assert_eq!(stat_field("true shooting percentage").unwrap(), "ts_pct");
        assert_eq!(stat_field("assist percentage").unwrap(), "ast_pct");
    }

    #[test]
    fn stat_field_is_case_and_whitespace_tolerant() {
        assert_eq!(stat_field("  Player Efficiency Rating ").unwrap(), "per");
    }

    #[test]
    fn stat_field_rejects_unmapped_names() {
        let err = stat_field("blocks per game").unwrap_err();
        assert!(matches!(err, BrefError::UnknownStatistic(name) if name == "blocks per game"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = BrefClient::with_base_url("https://example.test/");
        assert_eq!(client.base_url, "https://example.test");
    }
}
