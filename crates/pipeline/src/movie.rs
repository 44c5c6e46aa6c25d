//! The enriched movie returned to clients.

use serde::{Deserialize, Serialize};
use tracing::warn;

use tmdb_client::MovieSummary;

use crate::release_date::format_release_date;

/// A discovered movie together with its editors.
///
/// Serializes to `{ title, release_date, vote_average, editors }`;
/// `editors` is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Long-form date, or the raw upstream value if it could not be parsed
    pub release_date: String,
    /// Rounded to two decimal places
    pub vote_average: f64,
    pub editors: Vec<String>,
}

impl Movie {
    /// Build the output record for one discover result.
    ///
    /// An unparseable release date is logged and passed through verbatim
    /// rather than dropping the movie.
    pub fn from_summary(summary: &MovieSummary, editors: Vec<String>) -> Self {
        let release_date = match format_release_date(&summary.release_date) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!(movie_id = summary.id, error = %e, "Keeping raw release date");
                summary.release_date.clone()
            }
        };

        Self {
            title: summary.title.clone(),
            release_date,
            vote_average: round_vote_average(summary.vote_average),
            editors,
        }
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round_vote_average(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
