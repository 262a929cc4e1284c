//! Application configuration.
//!
//! Layered: built-in defaults, then an optional `Hoopref.toml`, then
//! `HOOPREF_`-prefixed environment variables.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the stats site.
    pub base_url: String,
    /// Default tracing level for this crate when `RUST_LOG` is unset.
    pub log_level: String,
    /// Newline-delimited canonical roster file used for name resolution.
    pub roster_path: String,
    /// Optional minimum similarity in [0, 1] for name resolution;
    /// unset accepts any best match.
    pub min_confidence: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: crate::bref::DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            roster_path: "players.txt".to_string(),
            min_confidence: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("Hoopref.toml"))
            .merge(Env::prefixed("HOOPREF_"))
            .extract()
    }
}
