//! Domain records projected out of the scraped pages.

use serde::Serialize;
use std::collections::HashMap;

/// Teams per conference in the standings table; East rows come first.
pub const CONFERENCE_SIZE: usize = 15;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// 1-based rank within the team's own conference.
    pub rank: u32,
}

/// A player's per-game stat row: the name plus every `data-stat` cell as
/// scraped, keyed by the site's field id.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStats {
    pub name: String,
    pub stats: HashMap<String, String>,
}

/// One playoff series with the current game wins on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayoffSeries {
    pub team_a: String,
    pub wins_a: u32,
    pub team_b: String,
    pub wins_b: u32,
}

/// A playoff round and its series; empty until the round is under way.
#[derive(Debug, Clone, Serialize)]
pub struct BracketRound {
    pub name: String,
    pub series: Vec<PlayoffSeries>,
}

/// The full bracket, all seven rounds in fixed order.
#[derive(Debug, Clone, Serialize)]
pub struct PlayoffBracket {
    pub rounds: Vec<BracketRound>,
}

/// Which slice of the standings to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    All,
    East,
    West,
}

impl Conference {
    /// Total mapping from the full standings table to the requested slice.
    /// The source table lists the 15 East teams first, then the 15 West.
    pub fn slice(self, standings: Vec<Team>) -> Vec<Team> {
        match self {
            Conference::All => standings,
            Conference::East => standings.into_iter().take(CONFERENCE_SIZE).collect(),
            Conference::West => standings.into_iter().skip(CONFERENCE_SIZE).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_standings(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| Team {
                name: format!("Team {i}"),
                wins: 41,
                losses: 41,
                rank: (i % CONFERENCE_SIZE + 1) as u32,
            })
            .collect()
    }

    #[test]
    fn conference_slicing_is_total() {
        let standings = fake_standings(30);

        let all = Conference::All.slice(standings.clone());
        assert_eq!(all.len(), 30);

        let east = Conference::East.slice(standings.clone());
        assert_eq!(east.len(), 15);
        assert_eq!(east[0].name, "Team 0");

        let west = Conference::West.slice(standings);
        assert_eq!(west.len(), 15);
        assert_eq!(west[0].name, "Team 15");
        assert_eq!(west[0].rank, 1);
    }

    #[test]
    fn conference_slicing_handles_short_tables() {
        // A partial table (site mid-update) must not panic.
        let standings = fake_standings(10);
        assert_eq!(Conference::East.slice(standings.clone()).len(), 10);
        assert!(Conference::West.slice(standings).is_empty());
    }
}
