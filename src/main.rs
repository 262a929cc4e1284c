use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use hoopref::bref::BrefClient;
use hoopref::cli::{Args, Command};
use hoopref::config::Config;
use hoopref::logging::setup_logging;
use hoopref::roster;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load().context("Failed to load config")?;
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = config.base_url.as_str(),
        "starting hoopref"
    );

    let client = BrefClient::with_base_url(&config.base_url);

    match args.command {
        Command::Standings { conference } => {
            print_json(&client.standings(conference).await?)?;
        }
        Command::Bracket { year } => {
            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            print_json(&client.playoff_bracket(year).await?)?;
        }
        Command::Names { year } => {
            print_json(&client.player_names(year).await?)?;
        }
        Command::Stats { year } => {
            print_json(&client.player_stats(year).await?)?;
        }
        Command::Per { year } => {
            print_json(&client.per_list(year).await?)?;
        }
        Command::AdvStat {
            name,
            stat,
            roster: roster_override,
            min_confidence,
        } => {
            let path = roster_override.unwrap_or_else(|| PathBuf::from(&config.roster_path));
            let names = roster::load_roster(&path)?;
            let threshold = min_confidence.or(config.min_confidence);
            let value = client.adv_stat(&name, &names, &stat, threshold).await?;
            println!("{value}");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
