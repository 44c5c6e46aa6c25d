//! Process configuration, read once at startup.
//!
//! Values come from the environment (after `dotenvy` has loaded any `.env`
//! file). Everything downstream receives the parsed [`ServerConfig`] rather
//! than reading the environment itself.

use std::time::Duration;

use thiserror::Error;

use tmdb_client::{CredentialPlacement, TmdbConfig};

pub const DEFAULT_PORT: u16 = 3000;

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_AUTH_MODE: &str = "TMDB_AUTH_MODE";
pub const ENV_TIMEOUT_SECS: &str = "TMDB_TIMEOUT_SECS";
pub const ENV_PORT: &str = "PORT";

/// Startup configuration problems. The process refuses to start on any of these.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for {var}: `{value}` ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub tmdb: TmdbConfig,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Unset and blank values are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let mut tmdb = TmdbConfig::new(api_key.trim());

        if let Some(base_url) = get(ENV_BASE_URL) {
            tmdb = tmdb.with_base_url(base_url.trim());
        }

        if let Some(mode) = get(ENV_AUTH_MODE) {
            let credential = mode
                .parse::<CredentialPlacement>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: ENV_AUTH_MODE,
                    value: mode.clone(),
                    reason,
                })?;
            tmdb = tmdb.with_credential(credential);
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_positive(ENV_TIMEOUT_SECS, &raw)?;
            tmdb = tmdb.with_timeout(Duration::from_secs(secs));
        }

        let port = match get(ENV_PORT) {
            Some(raw) => u16::try_from(parse_positive(ENV_PORT, &raw)?).map_err(|_| {
                ConfigError::InvalidValue {
                    var: ENV_PORT,
                    value: raw.clone(),
                    reason: "must be at most 65535".to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { port, tmdb })
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}
