//! # Enrichment Orchestrator
//!
//! This module coordinates one request's worth of upstream work:
//! 1. Discover a page of movies for a release year
//! 2. Fetch credits for every movie concurrently
//! 3. Extract editor names, degrading to an empty list per movie on failure
//! 4. Merge into `Movie` records in discover order
//!
//! Only the discover call can fail the request. Each credits lookup settles
//! on its own and never affects its siblings.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use pipeline::{Movie, extract_editors};
use tmdb_client::{
    DiscoverQuery, MovieId, MovieMetadataApi, MovieSummary, TmdbClient, TmdbConfig, TmdbError,
};

use crate::error::{CreditFetchError, UpstreamFetchError};

/// Runs the discover + credits fan-out against a metadata API
#[derive(Clone)]
pub struct EnrichmentOrchestrator {
    api: Arc<dyn MovieMetadataApi>,
}

impl EnrichmentOrchestrator {
    /// Create an orchestrator over any metadata API implementation
    pub fn new(api: Arc<dyn MovieMetadataApi>) -> Self {
        Self { api }
    }

    /// Create an orchestrator backed by a real TMDB client
    pub fn from_config(config: TmdbConfig) -> Result<Self, TmdbError> {
        let client = TmdbClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Main entry point: movies released in `year`, page `page`, with editors.
    ///
    /// # Returns
    /// One `Movie` per discover result, in discover order. An empty page
    /// yields an empty list.
    ///
    /// # Errors
    /// `UpstreamFetchError` if the discover call fails for any reason.
    pub async fn enrich_movies_for_year(
        &self,
        year: &str,
        page: &str,
    ) -> Result<Vec<Movie>, UpstreamFetchError> {
        let start_time = Instant::now();

        let summaries = self.discover(year, page).await?;
        info!(
            "Discovered {} movies for year {} page {}",
            summaries.len(),
            year,
            page
        );

        let movies = self.enrich_all(&summaries).await;

        let with_editors = movies.iter().filter(|m| !m.editors.is_empty()).count();
        info!(
            "Enriched {} movies ({} with editors) for year {} page {} in {:.2?}",
            movies.len(),
            with_editors,
            year,
            page,
            start_time.elapsed()
        );

        Ok(movies)
    }

    /// Fetch the discover page. Any failure here is fatal to the request.
    async fn discover(
        &self,
        year: &str,
        page: &str,
    ) -> Result<Vec<MovieSummary>, UpstreamFetchError> {
        let query = DiscoverQuery::new(year, page);

        match self.api.discover_movies(&query).await {
            Ok(response) => Ok(response.results),
            Err(source) => {
                error!(year, page, error = %source, "Error fetching movies");
                Err(UpstreamFetchError {
                    year: year.to_string(),
                    page: page.to_string(),
                    source,
                })
            }
        }
    }

    /// Fan out one credits lookup per movie and wait for all of them.
    ///
    /// `join_all` keeps results in input order, so the merge is a zip.
    async fn enrich_all(&self, summaries: &[MovieSummary]) -> Vec<Movie> {
        let lookups = summaries.iter().map(|summary| self.fetch_editors(summary.id));
        let editor_lists = join_all(lookups).await;

        summaries
            .iter()
            .zip(editor_lists)
            .map(|(summary, editors)| Movie::from_summary(summary, editors))
            .collect()
    }

    /// Editors for one movie; any failure is logged and becomes `[]`.
    async fn fetch_editors(&self, movie_id: MovieId) -> Vec<String> {
        match self.try_fetch_editors(movie_id).await {
            Ok(editors) => editors,
            Err(e) => {
                warn!(movie_id, error = %e, "Substituting empty editors");
                Vec::new()
            }
        }
    }

    async fn try_fetch_editors(&self, movie_id: MovieId) -> Result<Vec<String>, CreditFetchError> {
        debug!("Fetching credits for movie {}", movie_id);

        let credits = self
            .api
            .movie_credits(movie_id)
            .await
            .map_err(|source| CreditFetchError::Upstream { movie_id, source })?;

        match credits.crew.as_deref() {
            Some(crew) if !crew.is_empty() => Ok(extract_editors(Some(crew))),
            _ => Err(CreditFetchError::MissingCrew { movie_id }),
        }
    }
}
