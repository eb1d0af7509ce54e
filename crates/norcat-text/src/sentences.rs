//! Rule-based sentence splitting.

/// Splits text into sentences at `.`, `!`, or `?` followed by whitespace or
/// end of text. The terminator (plus any trailing closing quote or bracket)
/// stays with its sentence. Decimal points and mid-token dots do not split.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }

        while let Some(&next) = chars.peek() {
            if matches!(next, '"' | '\'' | ')' | ']') {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().is_none_or(|c| c.is_whitespace());
        if at_boundary {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}
