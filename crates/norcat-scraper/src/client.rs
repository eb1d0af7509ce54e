//! HTTP client for the catalog site.

use std::time::Duration;

use reqwest::Client;

use norcat_core::CrawlConfig;

use crate::error::ScraperError;

/// HTTP client wrapping one `reqwest::Client`, reused for every request in a
/// run so connections and cookies carry across pages.
///
/// Requests send the configured browser-like `Accept` and `User-Agent`
/// headers with a fixed timeout; TLS certificate verification is disabled.
pub struct CatalogClient {
    client: Client,
    accept: String,
}

impl CatalogClient {
    /// Creates a `CatalogClient` from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &CrawlConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            client,
            accept: config.accept.clone(),
        })
    }

    /// Fetches one page and returns its body text.
    ///
    /// There is no retry: a network failure or non-2xx status is fatal for
    /// the whole run.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx response.
    /// - [`ScraperError::Http`] — network or TLS failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, self.accept.as_str())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "fetched page");

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
