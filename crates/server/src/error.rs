//! Error types for the server crate and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use tmdb_client::{MovieId, TmdbError};

/// Malformed request parameters. Reported to the client, not logged as a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid year format. Please use YYYY")]
    InvalidYear,

    #[error("Invalid page number. Must be a positive integer.")]
    InvalidPage,
}

/// The discover call failed, so there is nothing to return for this request.
///
/// The message is deliberately generic; the upstream cause stays reachable
/// through `source()` and is logged where the failure happens.
#[derive(Error, Debug)]
#[error("Failed to fetch movies")]
pub struct UpstreamFetchError {
    pub year: String,
    pub page: String,
    #[source]
    pub source: TmdbError,
}

/// A single movie's credits lookup failed. Always recovered by the orchestrator.
#[derive(Error, Debug)]
pub enum CreditFetchError {
    #[error("Error fetching editors for movie ID {movie_id}: {source}")]
    Upstream {
        movie_id: MovieId,
        #[source]
        source: TmdbError,
    },

    #[error("Credits for movie ID {movie_id} contain no crew")]
    MissingCrew { movie_id: MovieId },
}

/// JSON body for every error response: `{ "error": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a handler can return
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamFetchError),

    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Upstream(e) => {
                debug!(year = %e.year, page = %e.page, "Responding 500: {}", e);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
