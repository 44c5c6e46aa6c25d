//! Error types for the TMDB client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to TMDB
#[derive(Error, Debug)]
pub enum TmdbError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Configured base URL is not an absolute http(s) URL
    #[error("Invalid TMDB base URL: {0}")]
    InvalidBaseUrl(String),

    /// Connection, timeout or other transport-level failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-2xx status
    #[error("TMDB returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// Body was not the JSON shape we expect
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TmdbError {
    /// HTTP status reported by upstream, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TmdbError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TmdbError>;
