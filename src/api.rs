//! HTTP client for the Times Newswire and Most Popular APIs.
//!
//! One request per call, no retries. The API key is attached as the
//! `api-key` query parameter on every request and masked in every log line.
//!
//! # Outcomes
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx, JSON body | `Ok(Value)` |
//! | 2xx, other body | [`NewswireError::Decode`] |
//! | non-2xx | [`NewswireError::Api`] with status and body |
//! | connect failure / timeout | [`NewswireError::Network`] |

use crate::config::Config;
use crate::error::{NewswireError, Result};
use crate::models::{Endpoint, compose_url, redacted};
use crate::outputs::json::{output_filename_now, write_payload};
use crate::sections::SectionList;
use crate::utils::truncate_for_log;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client bound to one [`Config`].
#[derive(Debug)]
pub struct NewswireClient {
    http: reqwest::Client,
    config: Config,
}

impl NewswireClient {
    /// Build the underlying HTTP client with the configured timeouts.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full request URL for `endpoint`, including the API key.
    pub fn request_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = compose_url(&self.config.base_url, endpoint)?;
        url.query_pairs_mut()
            .append_pair("api-key", &self.config.api_key);
        Ok(url)
    }

    /// GET `endpoint` and decode the body as JSON.
    #[instrument(level = "info", skip_all, fields(?endpoint))]
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        let url = self.request_url(endpoint)?;
        let shown = redacted(&url);
        debug!(url = %shown, "Sending request");

        let t0 = Instant::now();
        // reqwest errors carry the request URL, and with it the api-key
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.without_url())
            .inspect_err(|e| {
                warn!(
                    url = %shown,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    error = %e,
                    "Request failed"
                )
            })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| e.without_url())?;
        let elapsed_ms = t0.elapsed().as_millis();

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(
                url = %shown,
                status = status.as_u16(),
                elapsed_ms,
                body_preview = %truncate_for_log(&body, 300),
                "API returned an error status"
            );
            return Err(NewswireError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(
                url = %shown,
                error = %e,
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 300),
                "Response body is not JSON"
            )
        })?;
        info!(
            url = %shown,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms,
            "Fetched payload"
        );
        Ok(payload)
    }

    /// Fetch the section list once and keep it as a lookup set.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_sections(&self) -> Result<SectionList> {
        let payload = self.fetch(&Endpoint::SectionList).await?;
        let sections = SectionList::from_payload(&payload)?;
        if sections.is_empty() {
            warn!("Section list is empty; only `all` will validate");
        }
        info!(count = sections.len(), "Loaded section list");
        debug!(sections = ?sections.iter().collect::<Vec<_>>(), "Known sections");
        Ok(sections)
    }

    /// Fetch `endpoint` and write the payload under `dir`.
    ///
    /// The filename is computed after the response arrives. A failed fetch
    /// writes nothing.
    #[instrument(level = "info", skip_all, fields(?endpoint, dir = %dir.display()))]
    pub async fn fetch_to_file(&self, endpoint: &Endpoint, dir: &Path) -> Result<PathBuf> {
        let payload = self.fetch(endpoint).await?;
        let filename = output_filename_now(endpoint.file_prefix(), &endpoint.filename_params());
        write_payload(dir, &filename, &payload).await
    }
}
