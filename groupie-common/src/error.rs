//! Common error types for Groupie Tracker

use thiserror::Error;

/// Common result type for Groupie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Groupie crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket or file I/O failure (binding the listener)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Remote API fetch or decode failure (loading the catalog)
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure of a single remote fetch-and-decode
///
/// There is no retry: whichever of these comes back first is what the caller sees.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The GET could not be completed (DNS, connect, timeout, body read)
    #[error("failed to fetch data from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON or did not match the expected shape
    #[error("failed to decode data from {url} (HTTP {status}): {source}")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
