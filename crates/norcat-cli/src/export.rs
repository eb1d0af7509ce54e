//! CSV export of the enriched dataset.

use std::path::Path;

use norcat_core::CatalogDataset;

/// Output column order, fixed across runs.
const HEADERS: [&str; 5] = [
    "general_introduction",
    "summarize_description",
    "sentiment_scores",
    "categories",
    "keywords",
];

/// Writes the dataset to `path`, fully replacing any existing file.
///
/// Category and keyword lists render comma-joined; sentiment scores render
/// as a JSON object string with fixed key order. Identical datasets produce
/// byte-identical files.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// written.
pub fn write_dataset(dataset: &CatalogDataset, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;

    for record in dataset.records() {
        let sentiment = serde_json::to_string(&record.sentiment_scores)?;
        let categories = record.categories.join(", ");
        let keywords = record.keywords.join(", ");
        writer.write_record([
            record.general_introduction.as_str(),
            record.summarize_description.as_str(),
            sentiment.as_str(),
            categories.as_str(),
            keywords.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
