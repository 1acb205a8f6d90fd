// NLP collaborators for docanalyst
pub mod ner;
pub mod sentiment;
pub mod summarization;

use thiserror::Error;

pub use ner::{extract_entities_from_text, EntitySpan, PatternRecognizer};
pub use sentiment::{analyze_sentiment_text, LexiconClassifier, SentimentLabel, SentimentScore};
pub use summarization::{summarize_text_content, word_count, ExtractiveSummarizer, SummaryParams};

/// Failure inside one of the inference collaborators.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("input text contains no words")]
    EmptyInput,

    #[error("{0} produced no output")]
    EmptyOutput(&'static str),

    #[error("inference failed: {0}")]
    Failed(String),
}

/// Finds named entity spans in a text.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, InferenceError>;
}

/// Produces a shorter version of a text bounded by `params`.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, InferenceError>;
}

/// Classifies the polarity of a text. Results are ordered best first.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, InferenceError>;
}
