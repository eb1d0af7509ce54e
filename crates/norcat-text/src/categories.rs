//! Closed-vocabulary category tagging.

use std::collections::HashSet;

use crate::tokens::word_tokens;

/// Matches `text` against a fixed category vocabulary.
///
/// A category is included when ANY of its space-split words appears as an
/// exact lowercase token in `text` — an OR-of-words match, not a phrase
/// match, so `cosmetic additive` matches on either `cosmetic` or `additive`
/// alone. Output preserves vocabulary order, not input order.
#[must_use]
pub fn tag_categories(text: &str, vocabulary: &[String]) -> Vec<String> {
    let tokens: HashSet<String> = word_tokens(text).into_iter().collect();

    vocabulary
        .iter()
        .filter(|category| category.split(' ').any(|word| tokens.contains(word)))
        .cloned()
        .collect()
}
