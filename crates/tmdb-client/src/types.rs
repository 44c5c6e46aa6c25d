//! Wire types for the TMDB endpoints this service consumes.
//!
//! Only the fields the enrichment pipeline reads are modelled; serde
//! ignores everything else in the upstream payloads.

use serde::{Deserialize, Serialize};

/// TMDB movie identifier
pub type MovieId = u64;

/// Parameters for the "discover movies" call.
///
/// `year` and `page` are passed through to upstream as given; validating
/// them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub year: String,
    pub page: String,
}

impl DiscoverQuery {
    pub const LANGUAGE: &'static str = "en-US";
    pub const SORT_BY: &'static str = "popularity.desc";

    pub fn new(year: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            page: page.into(),
        }
    }

    /// Query parameters in the order they are sent upstream (credential excluded)
    pub fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("language", Self::LANGUAGE),
            ("primary_release_year", self.year.as_str()),
            ("sort_by", Self::SORT_BY),
            ("page", self.page.as_str()),
        ]
    }
}

/// One movie in a discover page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Raw `YYYY-MM-DD` string. Upstream omits it for unreleased titles.
    #[serde(default)]
    pub release_date: String,
    pub vote_average: f64,
}

/// Response body of `GET /discover/movie`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub results: Vec<MovieSummary>,
}

/// A crew entry from a credits response.
///
/// Upstream sends both `department` (the role on this film) and
/// `known_for_department` (the person's primary department); either may be
/// missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub name: String,
}

impl CrewMember {
    /// Department used for classification: `known_for_department`, falling
    /// back to `department`.
    pub fn department(&self) -> Option<&str> {
        self.known_for_department
            .as_deref()
            .or(self.department.as_deref())
    }
}

/// Response body of `GET /movie/{id}/credits`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub crew: Option<Vec<CrewMember>>,
}
