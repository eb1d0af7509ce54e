//! Run configuration for the catalog crawl.
//!
//! There is no external configuration surface: the production constants live
//! in [`CrawlConfig::default`] and the struct is passed by reference into the
//! crawler and the tagger. Tests construct non-default values directly.

use std::path::PathBuf;

/// How the product description is pulled out of a detail page's content
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Default: concatenate the first three direct child `div`s, discard the
    /// result if it contains the literal substring `Product`, then fall back
    /// to the first three paragraphs.
    LeadDivs,
    /// Exception pages: take the text of the first paragraph only.
    FirstParagraph,
}

/// Immutable configuration for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Catalog site root, no trailing slash.
    pub base_url: String,
    /// `Accept` header sent with every request.
    pub accept: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Closed category vocabulary, in output order.
    pub categories: Vec<String>,
    /// Product URLs whose pages need a non-default extraction strategy.
    /// Kept as data so new exceptions don't require touching the pipeline.
    pub extraction_overrides: Vec<(String, ExtractionStrategy)>,
    /// Output spreadsheet path, fully overwritten each run.
    pub output_path: PathBuf,
}

impl CrawlConfig {
    /// Returns the extraction strategy for a resolved product URL.
    #[must_use]
    pub fn extraction_strategy_for(&self, product_url: &str) -> ExtractionStrategy {
        self.extraction_overrides
            .iter()
            .find(|(url, _)| url == product_url)
            .map_or(ExtractionStrategy::LeadDivs, |&(_, strategy)| strategy)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.norlandbiotech.com".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36".to_string(),
            request_timeout_secs: 20,
            categories: [
                "food colorant",
                "cosmetic additive",
                "dietary supplement",
                "health food",
                "algae",
                "antioxidant",
                "minerals",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            extraction_overrides: vec![
                (
                    "https://www.norlandbiotech.com/product/13.html".to_string(),
                    ExtractionStrategy::FirstParagraph,
                ),
                (
                    "https://www.norlandbiotech.com/product/4.html".to_string(),
                    ExtractionStrategy::FirstParagraph,
                ),
            ],
            output_path: PathBuf::from("norlandbiotech_data.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_seven_categories() {
        let config = CrawlConfig::default();
        assert_eq!(config.categories.len(), 7);
        assert_eq!(config.categories[0], "food colorant");
        assert_eq!(config.categories[6], "minerals");
    }

    #[test]
    fn override_urls_use_first_paragraph_strategy() {
        let config = CrawlConfig::default();
        assert_eq!(
            config.extraction_strategy_for("https://www.norlandbiotech.com/product/13.html"),
            ExtractionStrategy::FirstParagraph
        );
        assert_eq!(
            config.extraction_strategy_for("https://www.norlandbiotech.com/product/4.html"),
            ExtractionStrategy::FirstParagraph
        );
    }

    #[test]
    fn unlisted_urls_use_lead_divs_strategy() {
        let config = CrawlConfig::default();
        assert_eq!(
            config.extraction_strategy_for("https://www.norlandbiotech.com/product/7.html"),
            ExtractionStrategy::LeadDivs
        );
    }
}
