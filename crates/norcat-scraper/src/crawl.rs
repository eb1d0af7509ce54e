//! Catalog discovery and per-product fetching.

use url::Url;

use norcat_core::CrawlConfig;

use crate::client::CatalogClient;
use crate::error::ScraperError;
use crate::extract::extract_description;
use crate::parse::{parse_product_data_urls, parse_products_href};

/// Sequential crawler over one catalog site: root page → listing page →
/// product detail pages. Requests are issued back-to-back on a single
/// logical thread; there is no parallel fetching and no retry.
pub struct CatalogCrawler {
    client: CatalogClient,
    config: CrawlConfig,
}

impl CatalogCrawler {
    #[must_use]
    pub fn new(client: CatalogClient, config: CrawlConfig) -> Self {
        Self { client, config }
    }

    /// Discovers all product detail URLs from the catalog.
    ///
    /// Fetches the root page, resolves the products link (positionally the
    /// second top-level menu entry), fetches the listing page, and resolves
    /// each product box's `data-url` against the base URL. Returns
    /// `Ok(None)` when the menu has fewer than two entries — the run then
    /// completes as a no-op.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures and structural errors from
    /// [`CatalogClient::fetch_html`] and the page parsers;
    /// [`ScraperError::MissingCatalogHref`] when the products entry has no
    /// href.
    pub async fn discover_product_urls(&self) -> Result<Option<Vec<String>>, ScraperError> {
        let root_html = self.client.fetch_html(&self.config.base_url).await?;
        tracing::info!(url = %self.config.base_url, "fetched catalog root");

        let Some(href) = parse_products_href(&root_html, &self.config.base_url)? else {
            return Ok(None);
        };

        let listing_url = self.resolve(&href)?;
        let listing_html = self.client.fetch_html(&listing_url).await?;
        let data_urls = parse_product_data_urls(&listing_html, &listing_url)?;
        tracing::info!(url = %listing_url, products = data_urls.len(), "enumerated product boxes");

        let mut product_urls = Vec::with_capacity(data_urls.len());
        for data_url in data_urls {
            product_urls.push(self.resolve(&data_url)?);
        }

        Ok(Some(product_urls))
    }

    /// Fetches one product detail page and extracts its normalized
    /// description, using the configured extraction strategy for that URL.
    /// An empty string means the product has no usable description.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures and the missing-content-container error.
    pub async fn fetch_description(&self, product_url: &str) -> Result<String, ScraperError> {
        let html = self.client.fetch_html(product_url).await?;
        let strategy = self.config.extraction_strategy_for(product_url);
        extract_description(&html, strategy, product_url)
    }

    /// Resolves an href against the configured base URL.
    fn resolve(&self, href: &str) -> Result<String, ScraperError> {
        let base = Url::parse(&self.config.base_url).map_err(|e| ScraperError::InvalidUrl {
            href: href.to_owned(),
            base: self.config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let resolved = base.join(href).map_err(|e| ScraperError::InvalidUrl {
            href: href.to_owned(),
            base: self.config.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(resolved.to_string())
    }
}
