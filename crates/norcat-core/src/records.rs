use serde::{Deserialize, Serialize};

/// Four-way polarity scores for one description.
///
/// `negative`/`neutral`/`positive` are proportions that sum to ~1.0 for
/// non-empty text; `compound` is the normalized aggregate in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// All-zero scores, used for fully empty input.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: 0.0,
            neutral: 0.0,
            positive: 0.0,
            compound: 0.0,
        }
    }
}

/// One enriched catalog product. The product URL is used only while crawling
/// and is not retained here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Normalized description text extracted from the detail page.
    pub general_introduction: String,
    /// Extractive summary: up to three of the longest sentences.
    pub summarize_description: String,
    pub sentiment_scores: SentimentScores,
    /// Matched category labels, in vocabulary order.
    pub categories: Vec<String>,
    /// Up to 10 extracted terms.
    pub keywords: Vec<String>,
}

/// Ordered collection of [`ProductRecord`]s for one run. Built fresh per run
/// and never merged with prior output.
#[derive(Debug, Default)]
pub struct CatalogDataset {
    records: Vec<ProductRecord>,
}

impl CatalogDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Callers only push records with a non-empty
    /// description; empty extractions are skipped upstream.
    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
