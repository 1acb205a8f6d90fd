// Sentiment Analysis using a lexicon-based approach.
// Words are matched against positive/negative word lists, with intensifiers
// boosting and nearby negations flipping the polarity of the following word.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{InferenceError, SentimentClassifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub score: f32,
}

// Positive words lexicon
static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "wonderful", "fantastic", "amazing", "awesome",
        "love", "happy", "joy", "pleased", "delighted", "satisfied", "perfect",
        "beautiful", "brilliant", "outstanding", "superb", "magnificent", "marvelous",
        "terrific", "fabulous", "exceptional", "impressive", "remarkable", "best",
        "better", "positive", "advantage", "benefit", "success", "successful",
        "win", "winner", "winning", "accomplished", "achievement", "triumph",
        "enjoy", "pleasant", "comfortable", "excited", "exciting", "thrilled",
        "approve", "approved", "approval", "like", "liked", "favorite", "prefer"
    ].iter().copied().collect()
});

// Negative words lexicon
static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse",
        "hate", "angry", "sad", "upset", "disappointed", "dissatisfied", "unhappy",
        "fail", "failure", "failed", "problem", "issue", "wrong", "error",
        "difficult", "hard", "tough", "struggle", "struggling", "broken",
        "pain", "painful", "hurt", "hurting", "damage", "damaged", "disaster",
        "negative", "loss", "lose", "losing", "lost", "defeat", "defeated",
        "reject", "rejected", "rejection", "dislike", "disliked", "unpleasant",
        "uncomfortable", "disappointing", "frustrate", "frustrated", "frustrating"
    ].iter().copied().collect()
});

static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["very", "extremely", "absolutely", "really", "incredibly", "highly", "totally"]
        .iter().copied().collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none"]
        .iter().copied().collect()
});

/// A side must lead the other by more than this ratio to avoid NEUTRAL.
const DECISION_MARGIN: f32 = 0.1;

/// Default sentiment classifier backed by the word lists above.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, InferenceError> {
        Ok(vec![analyze_sentiment_text(text)])
    }
}

pub fn analyze_sentiment_text(text: &str) -> SentimentScore {
    let words: Vec<String> = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let mut positive_score = 0.0_f32;
    let mut negative_score = 0.0_f32;

    for (i, word) in words.iter().enumerate() {
        let multiplier = if i > 0 && INTENSIFIERS.contains(words[i - 1].as_str()) {
            1.5
        } else {
            1.0
        };

        // Negation in the previous 1-2 words
        let is_negated = (i > 0 && NEGATIONS.contains(words[i - 1].as_str()))
            || (i > 1 && NEGATIONS.contains(words[i - 2].as_str()));

        if POSITIVE_WORDS.contains(word.as_str()) {
            if is_negated {
                negative_score += multiplier;
            } else {
                positive_score += multiplier;
            }
        } else if NEGATIVE_WORDS.contains(word.as_str()) {
            if is_negated {
                positive_score += multiplier;
            } else {
                negative_score += multiplier;
            }
        }
    }

    let total_score = positive_score + negative_score;
    if total_score == 0.0 {
        return neutral();
    }

    let pos_ratio = positive_score / total_score;
    let neg_ratio = negative_score / total_score;

    if pos_ratio > neg_ratio + DECISION_MARGIN {
        SentimentScore {
            label: SentimentLabel::Positive,
            score: pos_ratio,
        }
    } else if neg_ratio > pos_ratio + DECISION_MARGIN {
        SentimentScore {
            label: SentimentLabel::Negative,
            score: neg_ratio,
        }
    } else {
        neutral()
    }
}

fn neutral() -> SentimentScore {
    SentimentScore {
        label: SentimentLabel::Neutral,
        score: 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_sentiment_positive() {
        let sentiment = analyze_sentiment_text("This is a wonderful day! I'm feeling great and happy!");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_positive_review() {
        let sentiment = analyze_sentiment_text("This is wonderful, amazing work and I love it.");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert_eq!(sentiment.score, 1.0);
    }

    #[test]
    fn test_analyze_sentiment_negative() {
        let sentiment = analyze_sentiment_text("This is terrible and awful. I hate it!");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_analyze_sentiment_neutral() {
        let sentiment = analyze_sentiment_text("The sky is blue. The grass is green.");
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert_eq!(sentiment.score, 0.5);
    }

    #[test]
    fn test_negation_handling() {
        let sentiment = analyze_sentiment_text("This is not good at all.");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_intensifier_tips_balance() {
        // 1.5 positive vs 1.0 negative: ratio 0.6 vs 0.4
        let sentiment = analyze_sentiment_text("A very good plan with one problem.");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert!((sentiment.score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_classifier_returns_single_result() {
        let results = LexiconClassifier::new().classify("").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        assert_eq!(SentimentLabel::Negative.to_string(), "NEGATIVE");
    }
}
