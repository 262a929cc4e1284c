//! Error types for the basketball-reference client.

use crate::resolve::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum BrefError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("unknown statistic: {0:?}")]
    UnknownStatistic(String),
    #[error("request for {url} failed")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to parse {url}: {reason}")]
    ParseFailed { url: String, reason: String },
}
