//! Command-line interface definitions.

use crate::models::Conference;
use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    Pretty,
    Json,
}

// Conference is a domain type; its command-line surface lives here so the
// models module stays free of CLI concerns.
impl ValueEnum for Conference {
    fn value_variants<'a>() -> &'a [Self] {
        &[Conference::All, Conference::East, Conference::West]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Conference::All => PossibleValue::new("all"),
            Conference::East => PossibleValue::new("east"),
            Conference::West => PossibleValue::new("west"),
        })
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hoopref",
    about = "Scrape basketball statistics from basketball-reference.com",
    version
)]
pub struct Args {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = TracingFormat::Pretty, global = true)]
    pub tracing: TracingFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Current team standings.
    Standings {
        /// Conference to report.
        #[arg(value_enum, default_value_t = Conference::All)]
        conference: Conference,
    },
    /// Playoff bracket state for a season.
    Bracket {
        /// Season year; defaults to the current year.
        year: Option<i32>,
    },
    /// Player names for a season.
    Names { year: i32 },
    /// Full per-game stat rows for a season.
    Stats { year: i32 },
    /// Player efficiency rating for every player in a season.
    Per { year: i32 },
    /// A career advanced statistic for one player, fuzzy-matched by name.
    AdvStat {
        /// Free-text player name.
        name: String,
        /// Statistic name, e.g. "player efficiency rating".
        stat: String,
        /// Roster file overriding the configured one.
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Minimum similarity in [0, 1]; the lookup fails below it.
        #[arg(long)]
        min_confidence: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_adv_stat() {
        let args = Args::try_parse_from([
            "hoopref",
            "adv-stat",
            "Lebron Jamez",
            "player efficiency rating",
            "--min-confidence",
            "0.6",
        ])
        .unwrap();
        match args.command {
            Command::AdvStat {
                name,
                stat,
                min_confidence,
                ..
            } => {
                assert_eq!(name, "Lebron Jamez");
                assert_eq!(stat, "player efficiency rating");
                assert_eq!(min_confidence, Some(0.6));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn standings_defaults_to_all() {
        let args = Args::try_parse_from(["hoopref", "standings"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Standings {
                conference: Conference::All
            }
        ));
    }

    #[test]
    fn standings_accepts_each_conference() {
        for (value, expected) in [
            ("all", Conference::All),
            ("east", Conference::East),
            ("west", Conference::West),
        ] {
            let args = Args::try_parse_from(["hoopref", "standings", value]).unwrap();
            match args.command {
                Command::Standings { conference } => assert_eq!(conference, expected),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }
}
