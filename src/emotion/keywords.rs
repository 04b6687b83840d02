// Keyword-frequency fallback classifier
//
// Pure arithmetic over a fixed table, so it cannot fail. Scores are the
// share of a label's words found in the text, which is not a calibrated
// probability.

use super::label::{DetectionMethod, DetectionResult, EmotionLabel, EmotionScores};

/// Indicator words per label, iterated in canonical label order
pub const KEYWORD_TABLE: &[(EmotionLabel, &[&str])] = &[
    (
        EmotionLabel::Joy,
        &["happy", "excited", "joy", "wonderful", "amazing", "great"],
    ),
    (
        EmotionLabel::Sadness,
        &["sad", "depressed", "upset", "hurt", "crying"],
    ),
    (EmotionLabel::Anger, &["angry", "mad", "furious", "frustrated"]),
    (
        EmotionLabel::Fear,
        &["scared", "afraid", "worried", "anxious", "nervous"],
    ),
    (
        EmotionLabel::Surprise,
        &["surprised", "shocked", "amazed", "wow"],
    ),
    (
        EmotionLabel::Disgust,
        &["disgusted", "gross", "repulsive", "nauseous"],
    ),
    (EmotionLabel::Love, &["love", "adore", "cherish", "affection"]),
];

/// Confidence reported when no keyword matches
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Classify text by keyword frequency
pub fn classify_by_keywords(text: &str) -> DetectionResult {
    let scores = keyword_scores(text);

    let Some((label, confidence)) = scores.top() else {
        return DetectionResult {
            label: EmotionLabel::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
            scores: EmotionScores::single(EmotionLabel::Neutral, NEUTRAL_CONFIDENCE),
            method: DetectionMethod::KeywordFallback,
            model: None,
        };
    };

    DetectionResult {
        label,
        confidence,
        scores,
        method: DetectionMethod::KeywordFallback,
        model: None,
    }
}

/// Normalized hit rate for every label with at least one hit
pub fn keyword_scores(text: &str) -> EmotionScores {
    let text_lower = text.to_lowercase();
    let mut scores = EmotionScores::new();

    for (label, words) in KEYWORD_TABLE {
        let hits = words
            .iter()
            .filter(|word| text_lower.contains(*word))
            .count();
        if hits > 0 {
            scores.insert(*label, hits as f64 / words.len() as f64);
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_neutral() {
        let result = classify_by_keywords("The meeting moved to Thursday.");
        assert_eq!(result.label, EmotionLabel::Neutral);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.scores, EmotionScores::single(EmotionLabel::Neutral, 0.5));
        assert_eq!(result.method, DetectionMethod::KeywordFallback);
    }

    #[test]
    fn test_excited_is_joy() {
        let result = classify_by_keywords("I'm so excited about my promotion at work!");
        assert_eq!(result.label, EmotionLabel::Joy);
        assert!((result.confidence - 1.0 / 6.0).abs() < 1e-9);
        assert_eq!(result.scores.len(), 1);
    }

    #[test]
    fn test_score_normalized_by_word_count() {
        let result = classify_by_keywords("Furious and frustrated, so mad");
        assert_eq!(result.label, EmotionLabel::Anger);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(classify_by_keywords("SCARED").label, EmotionLabel::Fear);
    }

    #[test]
    fn test_highest_normalized_score_wins() {
        // sadness 2/5 beats joy 1/6
        let result = classify_by_keywords("happy birthday but I'm sad and upset");
        assert_eq!(result.label, EmotionLabel::Sadness);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn test_tie_goes_to_canonical_order() {
        // anger 1/4 and love 1/4: anger comes first
        let result = classify_by_keywords("I love you but I'm mad");
        assert_eq!(result.label, EmotionLabel::Anger);
        assert_eq!(result.scores.get(EmotionLabel::Love), Some(0.25));
    }

    #[test]
    fn test_deterministic() {
        let text = "wow, shocked and a little worried";
        assert_eq!(classify_by_keywords(text), classify_by_keywords(text));
    }

    #[test]
    fn test_substring_matching() {
        // "sad" inside "saddle" still counts
        assert_eq!(classify_by_keywords("new saddle").label, EmotionLabel::Sadness);
    }
}
