//! Extractive summarization: longest sentences win.

use crate::sentences::split_sentences;

/// Number of sentences kept in a summary.
const SUMMARY_SENTENCES: usize = 3;

/// Builds an extractive summary from the longest sentences of `text`.
///
/// Sentences are paired with their whitespace-delimited word counts and
/// stably sorted by count descending, so equal-length sentences keep their
/// input order. The first `min(3, n)` sentences of that ordering are joined
/// with single spaces; narrative order is not restored.
#[must_use]
pub fn summarize(text: &str) -> String {
    let mut ranked: Vec<(usize, String)> = split_sentences(text)
        .into_iter()
        .map(|sentence| (sentence.split_whitespace().count(), sentence))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .map(|(_, sentence)| sentence)
        .collect::<Vec<_>>()
        .join(" ")
}
