//! Raw extracted text cleanup.

/// Known boilerplate labels stripped from extracted descriptions. Exact
/// substrings, both observed case variants; not a case-insensitive match.
const BOILERPLATE_LABELS: &[&str] = &["General Introduction:", "General introduction:"];

/// Cleans raw extracted text: newline, tab, carriage-return, and
/// non-breaking-space characters become spaces, boilerplate labels are
/// removed, whitespace runs collapse to a single space, and the result is
/// trimmed. Empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.replace(['\n', '\t', '\r', '\u{a0}'], " ");
    for label in BOILERPLATE_LABELS {
        cleaned = cleaned.replace(label, " ");
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
