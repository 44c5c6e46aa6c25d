//! Connection settings for the TMDB client.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Where the API credential is attached to outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialPlacement {
    /// `?api_key=<key>` (TMDB v3 keys)
    #[default]
    QueryParam,
    /// `Authorization: Bearer <token>` (TMDB read access tokens)
    BearerHeader,
}

impl FromStr for CredentialPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(CredentialPlacement::QueryParam),
            "bearer" => Ok(CredentialPlacement::BearerHeader),
            other => Err(format!("expected `query` or `bearer`, got `{other}`")),
        }
    }
}

/// Immutable client configuration, built once at startup
#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub credential: CredentialPlacement,
    /// Per-request transport timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: CredentialPlacement::default(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_credential(mut self, credential: CredentialPlacement) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// Keep the key out of logs.
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("timeout", &self.timeout)
            .finish()
    }
}
