//! HTTP client for the TMDB movie metadata API.
//!
//! This crate provides the two upstream calls the enrichment pipeline needs:
//! - "discover movies" for one release year, sorted by popularity
//! - "credits" for a single movie
//!
//! Callers depend on the [`MovieMetadataApi`] trait so the pipeline can be
//! exercised against fakes; [`TmdbClient`] is the reqwest-backed
//! implementation used in production.

pub mod config;
pub mod error;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

pub use config::{CredentialPlacement, DEFAULT_BASE_URL, TmdbConfig};
pub use error::{Result, TmdbError};
pub use reqwest::StatusCode;
pub use types::{
    CreditsResponse, CrewMember, DiscoverQuery, DiscoverResponse, MovieId, MovieSummary,
};

/// Longest slice of an error body kept in [`TmdbError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// The upstream operations the enrichment pipeline depends on.
#[async_trait]
pub trait MovieMetadataApi: Send + Sync {
    /// Fetch one page of movies released in `query.year`
    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<DiscoverResponse>;

    /// Fetch cast and crew for one movie
    async fn movie_credits(&self, movie_id: MovieId) -> Result<CreditsResponse>;
}

/// Client for the TMDB REST API.
///
/// Cheap to clone: the connection pool and the configuration are shared.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    config: Arc<TmdbConfig>,
}

impl TmdbClient {
    /// Build a client from configuration.
    ///
    /// Fails if the base URL is not an absolute http(s) URL or the
    /// underlying HTTP client cannot be created.
    pub fn new(mut config: TmdbConfig) -> Result<Self> {
        let trimmed = config.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(TmdbError::InvalidBaseUrl(config.base_url));
        }
        config.base_url = trimmed;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TmdbError::ClientBuild)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Base URL requests are issued against (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {}", url);

        let mut request = self.http.get(&url).query(params);
        request = match self.config.credential {
            CredentialPlacement::QueryParam => {
                request.query(&[("api_key", self.config.api_key.as_str())])
            }
            CredentialPlacement::BearerHeader => request.bearer_auth(&self.config.api_key),
        };

        // reqwest errors carry the full request URL, which can hold the key
        let response = request.send().await.map_err(|source| {
            let source = source.without_url();
            error!("Transport error calling {}: {}", url, source);
            TmdbError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::Status {
                url,
                status,
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| TmdbError::Decode {
                url,
                source: source.without_url(),
            })
    }
}

#[async_trait]
impl MovieMetadataApi for TmdbClient {
    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<DiscoverResponse> {
        self.get_json("/discover/movie", &query.params()).await
    }

    async fn movie_credits(&self, movie_id: MovieId) -> Result<CreditsResponse> {
        self.get_json(&format!("/movie/{}/credits", movie_id), &[])
            .await
    }
}
