pub mod config;
pub mod records;

pub use config::{CrawlConfig, ExtractionStrategy};
pub use records::{CatalogDataset, ProductRecord, SentimentScores};
