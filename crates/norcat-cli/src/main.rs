mod export;
mod pipeline;

use clap::Parser;

use norcat_core::CrawlConfig;
use norcat_scraper::{CatalogClient, CatalogCrawler, ScraperError};

#[derive(Debug, Parser)]
#[command(name = "norcat")]
#[command(about = "Norland Biotech catalog scraper and enrichment pipeline")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let Cli {} = Cli::parse();

    let config = CrawlConfig::default();
    let client = CatalogClient::new(&config)?;
    let crawler = CatalogCrawler::new(client, config.clone());

    let dataset = match pipeline::fetch_catalog(&crawler, &config).await {
        Ok(dataset) => dataset,
        Err(ScraperError::MissingCatalogHref) => {
            tracing::error!("products menu entry has no href; aborting");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    export::write_dataset(&dataset, &config.output_path)?;
    tracing::info!(
        rows = dataset.len(),
        path = %config.output_path.display(),
        "catalog export complete"
    );

    Ok(())
}
