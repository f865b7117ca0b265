//! HTTP fetch helper shared by every scraper.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{config::Settings, error::ScraplError, Result};

const USER_AGENT: &str = concat!("scrapl/", env!("CARGO_PKG_VERSION"));

/// GETs JSON documents relative to one base URL.
///
/// Transport failures and 5xx/429 responses are retried up to
/// `max_attempts` times with a fixed delay; any other non-2xx status or an
/// unparseable body fails straight away.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: settings.max_attempts.max(1),
            retry_delay: settings.retry_delay,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and parse the body as JSON.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        let mut attempt = 1;
        loop {
            match self.get_once(&url, query).await {
                Ok(v) => return Ok(v),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    warn!(
                        %url,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The query may carry an API key; report the path only.
            let mut reported = response.url().clone();
            reported.set_query(None);
            return Err(ScraplError::Status {
                url: reported.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Deserialize a fetched document, naming the endpoint if its shape is off.
pub fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ScraplError::shape(format!("{context}: {e}")))
}
