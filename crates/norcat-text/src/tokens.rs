use regex::Regex;

/// Lowercased word-boundary tokens (`\w+` runs), shared by the category
/// tagger and the keyword extractor.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    let re = Regex::new(r"\w+").expect("valid word regex");
    let lowered = text.to_lowercase();
    re.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
