//! Canonical roster loading.
//!
//! The resolver never reads ambient state: the reference list of canonical
//! player names is loaded here and passed down explicitly, so tests can
//! inject synthetic rosters.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load a newline-delimited roster file. Blank lines and `#` comments are
/// skipped; entry order is preserved (it breaks similarity ties).
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let names = parse_roster(&raw);
    debug!(path = %path.display(), count = names.len(), "loaded roster");
    Ok(names)
}

fn parse_roster(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
