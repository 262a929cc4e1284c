//! Fuzzy player-name resolution against a canonical roster.
//!
//! Free-text input ("Lebron Jamez") is matched against the reference list of
//! canonical names as they appear on the source site, then the winning name
//! drives page navigation: its last-name initial selects the per-letter
//! roster index page, and an exact scan of that page's entries yields the
//! player's detail-page link.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("reference name list is empty")]
    EmptyReferenceList,
    #[error("player name has no last-name token: {0:?}")]
    MalformedName(String),
    #[error(
        "no confident match for {query:?}: best candidate {name:?} scored {score:.3}, minimum is {threshold:.3}"
    )]
    NoConfidentMatch {
        query: String,
        name: String,
        score: f64,
        threshold: f64,
    },
}

/// The winning canonical name and its similarity to the query.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub name: String,
    /// Similarity ratio in [0.0, 1.0]; 1.0 is an exact match. Informational
    /// unless a confidence threshold is in force.
    pub score: f64,
}

/// Gestalt (Ratcliff/Obershelp) similarity ratio between two strings.
///
/// Recursively finds the longest matching block, then matches the pieces to
/// its left and right, and reports `2 * matches / (len(a) + len(b))`. This is
/// the longest-matching-blocks measure, normalized to [0.0, 1.0].
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matches = matched_len(&a, &b);
    2.0 * matches as f64 / (a.len() + b.len()) as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_len(&a[..start_a], &b[..start_b])
        + matched_len(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common substring as `(start_a, start_b, len)`, preferring the
/// earliest position in `a` on ties.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // row[j + 1] holds the run length ending at a[i], b[j]
    let mut row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { 0 };
            if row[j + 1] > best.2 {
                best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
            }
            diag = above;
        }
    }
    best
}

/// Find the reference name most similar to `query`.
///
/// The reduction is left-biased: a candidate replaces the current best only
/// on a strictly greater score, so ties resolve to the earliest entry in the
/// reference list.
pub fn resolve(query: &str, reference: &[String]) -> Result<MatchResult, ResolveError> {
    let mut best: Option<MatchResult> = None;
    for candidate in reference {
        let score = similarity_ratio(query, candidate);
        match &best {
            Some(current) if score <= current.score => {}
            _ => {
                best = Some(MatchResult {
                    name: candidate.clone(),
                    score,
                })
            }
        }
    }
    best.ok_or(ResolveError::EmptyReferenceList)
}

/// Like [`resolve`], but reject best matches scoring below `threshold`.
pub fn resolve_confident(
    query: &str,
    reference: &[String],
    threshold: f64,
) -> Result<MatchResult, ResolveError> {
    let matched = resolve(query, reference)?;
    if matched.score < threshold {
        return Err(ResolveError::NoConfidentMatch {
            query: query.to_string(),
            name: matched.name,
            score: matched.score,
            threshold,
        });
    }
    Ok(matched)
}

/// Lowercase initial of the last whitespace-separated token of a canonical
/// name; selects the per-letter roster index page.
pub fn derive_index_key(name: &str) -> Result<char, ResolveError> {
    let last_token = name
        .split_whitespace()
        .last()
        .ok_or_else(|| ResolveError::MalformedName(name.to_string()))?;
    let initial = last_token
        .chars()
        .next()
        .ok_or_else(|| ResolveError::MalformedName(name.to_string()))?;
    Ok(initial.to_ascii_lowercase())
}

/// Scan index-page entries in order and return the href of the first entry
/// whose display name equals `canonical` exactly.
///
/// `None` means the caller keeps whatever URL it already had; the miss is
/// logged so it is not entirely silent.
pub fn resolve_detail_link<'a>(canonical: &str, entries: &'a [(String, String)]) -> Option<&'a str> {
    let found = entries
        .iter()
        .find(|(display, _)| display == canonical)
        .map(|(_, href)| href.as_str());
    if found.is_none() {
        debug!(player = canonical, "no index entry matched canonical name");
    }
    found
}
