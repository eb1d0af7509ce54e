//! Term-vector keyword extraction.

use std::collections::BTreeSet;

use crate::tokens::word_tokens;

/// Maximum number of keywords returned per document.
const MAX_KEYWORDS: usize = 10;

/// Extracts up to 10 terms from a single document's term vector.
///
/// The vocabulary is the sorted set of distinct lowercase word tokens;
/// per-term counts are sorted ascending (stable, ties resolve to vocabulary
/// order) and the first 10 positions are kept. Ascending order means the
/// least frequent terms are selected — kept as-is for output compatibility
/// with the existing dataset. Documents with fewer than 10 distinct terms
/// return every term.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let tokens = word_tokens(text);
    let vocabulary: Vec<String> = tokens
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = vec![0_usize; vocabulary.len()];
    for token in &tokens {
        if let Ok(index) = vocabulary.binary_search(token) {
            counts[index] += 1;
        }
    }

    let mut order: Vec<usize> = (0..vocabulary.len()).collect();
    order.sort_by_key(|&index| counts[index]);
    order.truncate(MAX_KEYWORDS);

    order
        .into_iter()
        .map(|index| vocabulary[index].clone())
        .collect()
}
