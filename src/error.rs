//! Errors raised while loading the games catalog.

use thiserror::Error;

/// Failure to obtain a usable catalog.
///
/// A payload that parses as JSON but is not an array is *not* an error;
/// it degrades to an empty catalog (see [`crate::catalog::parse_catalog`]).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("games.json okunamadı (HTTP {status})")]
    Fetch { status: u16 },

    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The body was not valid JSON.
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
