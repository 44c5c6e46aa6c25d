//! Error types for the pipeline crate.

use thiserror::Error;

/// A release date that could not be turned into a calendar date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDateError {
    /// Input did not split into exactly three numeric `-`-separated parts
    #[error("Release date `{0}` is not in YYYY-MM-DD form")]
    Malformed(String),

    /// Parts were numeric but do not name a real day (e.g. 2021-02-30)
    #[error("Release date `{0}` is not a valid calendar date")]
    OutOfRange(String),
}
