//! Process-wide configuration, read once at startup.
//!
//! The API key and host come from the environment; the storage directory can
//! also be set on the command line. After construction the [`Config`] is only
//! ever borrowed.

use crate::error::{NewswireError, Result};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Variable holding the API key. Required.
pub const API_KEY_VAR: &str = "NY_API_KEY";
/// Preferred host override.
pub const BASE_URL_VAR: &str = "BASE_URL";
/// Legacy spelling of the host override, consulted after [`BASE_URL_VAR`].
pub const URL_BASE_VAR: &str = "URL_BASE";

pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com/";
pub const DEFAULT_STORAGE_DIR: &str = "data/raw";

/// Client configuration shared by every request.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Url,
    pub storage_dir: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset. Fails with
    /// [`NewswireError::MissingVar`] when `NY_API_KEY` is absent, before any
    /// client is built.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = var(API_KEY_VAR).ok_or(NewswireError::MissingVar(API_KEY_VAR))?;
        let raw_base = var(BASE_URL_VAR)
            .or_else(|| var(URL_BASE_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_base)?;
        debug!(%base_url, "Resolved API base URL");

        Ok(Self {
            api_key,
            base_url,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        })
    }

    /// Replace the storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("base_url", &self.base_url.as_str())
            .field("storage_dir", &self.storage_dir)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| NewswireError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(NewswireError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }
    Ok(url)
}
