//! Server crate for the movie editors service.
//!
//! This crate contains the orchestrator that fans out credits lookups over
//! a discover page, plus the axum router and process configuration that
//! expose it over HTTP.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, CreditFetchError, UpstreamFetchError, ValidationError};
pub use orchestrator::EnrichmentOrchestrator;
pub use routes::{AppState, create_router, resolve_page, validate_year};
