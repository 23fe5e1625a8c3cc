//! Runtime configuration.
//!
//! The client carries no persisted settings; the only configuration surface
//! is the backend base URL, read from the environment at startup.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable naming the backend base URL.
pub const API_URL_VAR: &str = "CUSANA_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the mail backend, without a trailing slash.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Fails if [`API_URL_VAR`] is set to something that does not parse as an
    /// absolute URL.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_VAR) {
            Ok(raw) => Self::with_api_url(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Builds a configuration pointing at the given backend URL.
    pub fn with_api_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("invalid {API_URL_VAR}: {raw}"))?;
        Ok(Self {
            api_base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }
}
