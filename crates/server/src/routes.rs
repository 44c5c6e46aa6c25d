//! HTTP surface: request validation and the axum router.

use std::sync::LazyLock;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use pipeline::Movie;

use crate::error::{ApiError, ValidationError};
use crate::orchestrator::EnrichmentOrchestrator;

pub const DEFAULT_PAGE: &str = "1";

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern is valid"));

static PAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("page pattern is valid"));

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: EnrichmentOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: EnrichmentOrchestrator) -> Self {
        Self { orchestrator }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MoviesQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Check that `year` is exactly four ASCII digits
pub fn validate_year(year: &str) -> Result<(), ValidationError> {
    if YEAR_PATTERN.is_match(year) {
        Ok(())
    } else {
        Err(ValidationError::InvalidYear)
    }
}

/// Resolve the page parameter: absent or empty means page 1, otherwise it
/// must be ASCII digits with a value of at least one.
pub fn resolve_page(page: Option<&str>) -> Result<String, ValidationError> {
    let page = match page {
        None | Some("") => return Ok(DEFAULT_PAGE.to_string()),
        Some(page) => page,
    };

    let is_positive = PAGE_PATTERN.is_match(page) && page.bytes().any(|b| b != b'0');
    if is_positive {
        Ok(page.to_string())
    } else {
        Err(ValidationError::InvalidPage)
    }
}

/// Builds the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/movies/:year", get(get_movies))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /movies/:year?page=<n>`
///
/// Extractor rejections (undecodable path, repeated `page`) surface as the
/// same validation errors as a malformed value.
async fn get_movies(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<MoviesQuery>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Path(year) = path.map_err(|_| ValidationError::InvalidYear)?;
    validate_year(&year)?;
    let Query(query) = query.map_err(|_| ValidationError::InvalidPage)?;
    let page = resolve_page(query.page.as_deref())?;

    let movies = state.orchestrator.enrich_movies_for_year(&year, &page).await?;
    Ok(Json(movies))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tmdb_client::{
        CreditsResponse, CrewMember, DiscoverQuery, DiscoverResponse, MovieId, MovieMetadataApi,
        MovieSummary, TmdbError,
    };
    use tower::ServiceExt;

    #[test]
    fn test_validate_year() {
        assert!(validate_year("2019").is_ok());
        assert!(validate_year("0000").is_ok());
        for bad in ["19", "20190", "abcd", "", "２０１９", "201a", " 2019"] {
            assert_eq!(validate_year(bad), Err(ValidationError::InvalidYear), "{bad:?}");
        }
    }

    #[test]
    fn test_resolve_page() {
        assert_eq!(resolve_page(None).unwrap(), "1");
        assert_eq!(resolve_page(Some("")).unwrap(), "1");
        assert_eq!(resolve_page(Some("3")).unwrap(), "3");
        assert_eq!(resolve_page(Some("007")).unwrap(), "007");
        for bad in ["0", "000", "-1", "1.5", "abc", " 2", "+2"] {
            assert_eq!(resolve_page(Some(bad)), Err(ValidationError::InvalidPage), "{bad:?}");
        }
    }

    // ============================================================================
    // Router tests against a recording fake
    // ============================================================================

    /// Records every call; discover succeeds unless `fail_discover` is set.
    #[derive(Default)]
    struct RecordingTmdb {
        fail_discover: bool,
        calls: AtomicUsize,
        last_page: std::sync::Mutex<Option<String>>,
    }

    #[async_trait]
    impl MovieMetadataApi for RecordingTmdb {
        async fn discover_movies(
            &self,
            query: &DiscoverQuery,
        ) -> tmdb_client::Result<DiscoverResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_page.lock().unwrap() = Some(query.page.clone());
            if self.fail_discover {
                return Err(TmdbError::InvalidBaseUrl("unreachable".to_string()));
            }
            Ok(DiscoverResponse {
                results: vec![MovieSummary {
                    id: 1,
                    title: "Test Movie".to_string(),
                    release_date: "2021-01-01".to_string(),
                    vote_average: 7.7,
                }],
            })
        }

        async fn movie_credits(&self, _movie_id: MovieId) -> tmdb_client::Result<CreditsResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CreditsResponse {
                crew: Some(vec![CrewMember {
                    known_for_department: Some("Editing".to_string()),
                    department: None,
                    name: "Test Editor".to_string(),
                }]),
            })
        }
    }

    fn app(fake: Arc<RecordingTmdb>) -> Router {
        create_router(AppState::new(EnrichmentOrchestrator::new(fake)))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_invalid_year_is_rejected_without_upstream_call() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/movies/19").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid year format. Please use YYYY"}));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_page_is_rejected_without_upstream_call() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/movies/2019?page=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid page number. Must be a positive integer."}));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_page_is_json_validation_error() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/movies/2019?page=1&page=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid page number. Must be a positive integer."}));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_undecodable_year_is_json_validation_error() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/movies/%FF%FE%FD%FC").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid year format. Please use YYYY"}));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_year_is_checked_before_page() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake), "/movies/abc?page=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid year format. Please use YYYY");
    }

    #[tokio::test]
    async fn test_page_defaults_to_one() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/movies/2019").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fake.last_page.lock().unwrap().as_deref(), Some("1"));
        assert_eq!(
            body,
            json!([{
                "title": "Test Movie",
                "release_date": "January 1, 2021",
                "vote_average": 7.7,
                "editors": ["Test Editor"]
            }])
        );
    }

    #[tokio::test]
    async fn test_explicit_page_is_forwarded() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, _) = get_json(app(fake.clone()), "/movies/2019?page=12").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fake.last_page.lock().unwrap().as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn test_discover_failure_is_generic_500() {
        let fake = Arc::new(RecordingTmdb {
            fail_discover: true,
            ..Default::default()
        });

        let (status, body) = get_json(app(fake), "/movies/2019").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_health_and_not_found() {
        let fake = Arc::new(RecordingTmdb::default());

        let (status, body) = get_json(app(fake.clone()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        let (status, body) = get_json(app(fake), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not Found"}));
    }
}
