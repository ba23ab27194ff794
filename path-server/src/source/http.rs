//! PATH website client.

use std::time::Duration;

use tracing::debug;

use crate::document::Document;

use super::DocumentSource;
use super::error::FetchError;

/// Default location of the published timetables.
pub const DEFAULT_BASE_URL: &str = "http://www.panynj.gov/path/schedules";

/// Configuration for the website client.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL; page `P` is fetched from `{base_url}/P.html`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Create a config with the default base URL and a 30 second timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for mirrors and testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches timetable pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpSource {
    /// Create a new client.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn url(&self, page: &str) -> String {
        format!("{}/{}.html", self.base_url, page)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Http(err)
        }
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, page: &str) -> Result<Document, FetchError> {
        let url = self.url(page);
        debug!(%url, "fetching timetable page");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            // Drain the body so the connection can be reused; a failure
            // here changes nothing for the caller.
            let _ = response.bytes().await;
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok(Document::parse(&body))
    }

    fn location(&self, page: &str) -> String {
        self.url(page)
    }
}
