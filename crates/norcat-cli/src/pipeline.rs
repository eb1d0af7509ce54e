//! Crawl → enrich → dataset orchestration.

use norcat_core::{CatalogDataset, CrawlConfig, ProductRecord};
use norcat_scraper::{CatalogCrawler, ScraperError};
use norcat_text::{extract_keywords, score, summarize, tag_categories};

/// Runs the full catalog pipeline: discover the product pages, extract each
/// description, enrich it, and collect the records into a dataset.
///
/// Products whose description is empty after cleanup are skipped silently.
/// Any fetch failure or structural mismatch aborts the whole run — there is
/// no per-product isolation and no partial output.
///
/// # Errors
///
/// Propagates every [`ScraperError`] from discovery and per-product
/// fetching, including [`ScraperError::MissingCatalogHref`], which the
/// binary maps to exit status 1.
pub async fn fetch_catalog(
    crawler: &CatalogCrawler,
    config: &CrawlConfig,
) -> Result<CatalogDataset, ScraperError> {
    let mut dataset = CatalogDataset::new();

    let Some(product_urls) = crawler.discover_product_urls().await? else {
        tracing::info!("catalog menu has no products entry; nothing to collect");
        return Ok(dataset);
    };

    for product_url in product_urls {
        let description = crawler.fetch_description(&product_url).await?;
        if description.is_empty() {
            tracing::debug!(url = %product_url, "empty description after cleanup; skipping product");
            continue;
        }
        dataset.push(enrich(description, config));
    }

    Ok(dataset)
}

/// Builds a [`ProductRecord`] from a normalized description by running the
/// summarizer, sentiment scorer, category tagger, and keyword extractor, in
/// that order.
fn enrich(description: String, config: &CrawlConfig) -> ProductRecord {
    let summarize_description = summarize(&description);
    let sentiment_scores = score(&description);
    let categories = tag_categories(&description, &config.categories);
    let keywords = extract_keywords(&description);

    ProductRecord {
        general_introduction: description,
        summarize_description,
        sentiment_scores,
        categories,
        keywords,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
