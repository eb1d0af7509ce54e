//! Lexicon-and-rule polarity scoring for product description text.

use norcat_core::SentimentScores;

/// Word valences on a roughly `[-4.0, 4.0]` scale. Keys are lowercase single
/// words. No training and no external lookups; identical input always yields
/// identical scores.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("amazing", 2.8),
    ("beneficial", 1.6),
    ("benefit", 1.9),
    ("benefits", 1.9),
    ("best", 3.2),
    ("boost", 1.5),
    ("effective", 1.7),
    ("enhance", 1.4),
    ("enhances", 1.4),
    ("excellent", 2.7),
    ("fresh", 1.4),
    ("gentle", 1.1),
    ("great", 3.1),
    ("healthy", 1.7),
    ("ideal", 2.1),
    ("improve", 1.5),
    ("improves", 1.5),
    ("innovative", 1.3),
    ("love", 3.2),
    ("natural", 1.2),
    ("nutritious", 1.8),
    ("perfect", 2.7),
    ("popular", 1.4),
    ("premium", 1.5),
    ("protect", 1.2),
    ("protects", 1.2),
    ("pure", 1.4),
    ("quality", 1.7),
    ("rich", 1.6),
    ("safe", 1.8),
    ("superior", 2.0),
    ("trusted", 1.8),
    ("valuable", 1.7),
    ("wonderful", 2.7),
    // Negative signals
    ("adverse", -1.8),
    ("artificial", -0.9),
    ("bad", -2.5),
    ("banned", -2.4),
    ("contaminated", -2.2),
    ("contamination", -2.3),
    ("damage", -1.9),
    ("dangerous", -2.6),
    ("deficiency", -1.6),
    ("harmful", -2.5),
    ("hazard", -2.2),
    ("illegal", -2.4),
    ("poor", -2.1),
    ("risk", -1.1),
    ("severe", -1.6),
    ("toxic", -2.4),
    ("warning", -1.6),
    ("worst", -3.1),
];

/// Normalization constant for the compound score: `s / sqrt(s² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Scores `text` against the fixed lexicon.
///
/// Words are split on whitespace, trimmed of non-alphabetic edges, and
/// lowercased. `compound` is the normalized valence sum clamped to
/// `[-1.0, 1.0]` and rounded to 4 decimals; `negative`/`neutral`/`positive`
/// are proportions of the weighted token mass, rounded to 3 decimals.
/// Input with no word tokens yields all zeros.
#[must_use]
pub fn score(text: &str) -> SentimentScores {
    let mut valence_sum = 0.0_f64;
    let mut positive_mass = 0.0_f64;
    let mut negative_mass = 0.0_f64;
    let mut neutral_mass = 0.0_f64;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }

        let valence = LEXICON
            .iter()
            .find(|&&(lex_word, _)| lex_word == w)
            .map_or(0.0, |&(_, v)| v);

        valence_sum += valence;
        if valence > 0.0 {
            positive_mass += valence + 1.0;
        } else if valence < 0.0 {
            negative_mass += -valence + 1.0;
        } else {
            neutral_mass += 1.0;
        }
    }

    let total = positive_mass + negative_mass + neutral_mass;
    if total == 0.0 {
        return SentimentScores::zero();
    }

    let compound = valence_sum / (valence_sum * valence_sum + ALPHA).sqrt();

    SentimentScores {
        negative: round3(negative_mass / total),
        neutral: round3(neutral_mass / total),
        positive: round3(positive_mass / total),
        compound: round4(compound.clamp(-1.0, 1.0)),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_all_zeros() {
        let scores = score("");
        assert_eq!(scores, SentimentScores::zero());
    }

    #[test]
    fn neutral_text_has_zero_compound_and_full_neutral() {
        let scores = score("the powder dissolves in water");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neutral, 1.0);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.negative, 0.0);
    }

    #[test]
    fn strongly_positive_text_scores_above_half() {
        let scores = score("excellent premium quality pure natural healthy");
        assert!(
            scores.compound > 0.5,
            "expected compound > 0.5, got {}",
            scores.compound
        );
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn strongly_negative_text_scores_below_negative_half() {
        let scores = score("harmful toxic dangerous contaminated banned");
        assert!(
            scores.compound < -0.5,
            "expected compound < -0.5, got {}",
            scores.compound
        );
        assert!(scores.negative > scores.positive);
    }

    #[test]
    fn proportions_sum_to_one_for_mixed_text() {
        let scores = score("excellent product with a known risk");
        let sum = scores.negative + scores.neutral + scores.positive;
        assert!(
            (sum - 1.0).abs() < 0.01,
            "expected proportions to sum to ~1.0, got {sum}"
        );
    }

    #[test]
    fn punctuation_is_trimmed_before_lookup() {
        let scores = score("excellent!");
        assert!(scores.compound > 0.0);
    }

    #[test]
    fn identical_input_scores_identically() {
        let text = "pure natural spirulina with excellent quality";
        assert_eq!(score(text), score(text));
    }
}
