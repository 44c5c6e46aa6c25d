//! Per-movie transformations for the enrichment pipeline.
//!
//! This crate provides:
//! - `format_release_date` for turning `YYYY-MM-DD` into long-form English
//! - `extract_editors` for selecting editing-department crew names
//! - `Movie`, the enriched record returned to clients, and vote rounding
//!
//! Everything here is pure and synchronous; the concurrent fan-out over a
//! discover page lives in the server crate's orchestrator.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{extract_editors, Movie};
//!
//! let editors = extract_editors(credits.crew.as_deref());
//! let movie = Movie::from_summary(&summary, editors);
//! ```

pub mod editors;
pub mod error;
pub mod movie;
pub mod release_date;

// Re-export main types
pub use editors::{EDITING_DEPARTMENT, extract_editors};
pub use error::InvalidDateError;
pub use movie::{Movie, round_vote_average};
pub use release_date::format_release_date;
