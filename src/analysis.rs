//! Document analysis pipeline.
//!
//! [`DocumentAnalyzer`] owns one instance of each collaborator and runs them in
//! a fixed order: entities, then summary, then sentiment. Any failure aborts
//! the whole analysis; partial results are never returned.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::models::{AnalysisResult, Document, Entity, SentimentResult};
use crate::nlp::{
    word_count, EntityRecognizer, ExtractiveSummarizer, InferenceError, LexiconClassifier,
    PatternRecognizer, SentimentClassifier, Summarizer, SummaryParams,
};

/// Default upper bound on document length, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 100_000;

/// Input limits and fixed inference parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerLimits {
    pub max_input_chars: usize,
    pub summary: SummaryParams,
}

impl Default for AnalyzerLimits {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            summary: SummaryParams::default(),
        }
    }
}

/// Pipeline stage, used to attribute collaborator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Entities,
    Summary,
    Sentiment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Entities => "entity recognition",
            Stage::Summary => "summarization",
            Stage::Sentiment => "sentiment analysis",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The document was rejected before any collaborator ran.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Document has {chars} characters, limit is {limit}")]
    TooLarge { chars: usize, limit: usize },

    /// A collaborator failed.
    #[error("{stage} failed: {source}")]
    Inference {
        stage: Stage,
        #[source]
        source: InferenceError,
    },
}

impl AnalysisError {
    fn at(stage: Stage) -> impl FnOnce(InferenceError) -> Self {
        move |source| AnalysisError::Inference { stage, source }
    }
}

pub struct DocumentAnalyzer {
    recognizer: Arc<dyn EntityRecognizer>,
    summarizer: Arc<dyn Summarizer>,
    classifier: Arc<dyn SentimentClassifier>,
    limits: AnalyzerLimits,
}

impl DocumentAnalyzer {
    pub fn new(
        recognizer: Arc<dyn EntityRecognizer>,
        summarizer: Arc<dyn Summarizer>,
        classifier: Arc<dyn SentimentClassifier>,
        limits: AnalyzerLimits,
    ) -> Self {
        Self {
            recognizer,
            summarizer,
            classifier,
            limits,
        }
    }

    /// Analyzer wired to the built-in pattern, extractive and lexicon collaborators.
    pub fn with_defaults(limits: AnalyzerLimits) -> Self {
        Self::new(
            Arc::new(PatternRecognizer::new()),
            Arc::new(ExtractiveSummarizer::new()),
            Arc::new(LexiconClassifier::new()),
            limits,
        )
    }

    pub fn limits(&self) -> &AnalyzerLimits {
        &self.limits
    }

    /// Reject blank or wordless documents and documents over the character limit.
    pub fn validate(&self, doc: &Document) -> Result<(), AnalysisError> {
        if doc.text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }
        if word_count(&doc.text) == 0 {
            return Err(AnalysisError::InvalidInput(
                "text must contain at least one word".to_string(),
            ));
        }

        let chars = doc.text.chars().count();
        if chars > self.limits.max_input_chars {
            return Err(AnalysisError::TooLarge {
                chars,
                limit: self.limits.max_input_chars,
            });
        }

        Ok(())
    }

    pub fn analyze(&self, doc: &Document) -> Result<AnalysisResult, AnalysisError> {
        self.validate(doc)?;
        let text = doc.text.as_str();

        let entities: Vec<Entity> = self
            .recognizer
            .recognize(text)
            .map_err(AnalysisError::at(Stage::Entities))?
            .into_iter()
            .map(Entity::from)
            .collect();
        debug!(count = entities.len(), "Entities recognized");

        let summary = self
            .summarizer
            .summarize(text, &self.limits.summary)
            .map_err(AnalysisError::at(Stage::Summary))?;
        debug!(chars = summary.len(), "Summary generated");

        let sentiment: SentimentResult = self
            .classifier
            .classify(text)
            .map_err(AnalysisError::at(Stage::Sentiment))?
            .into_iter()
            .next()
            .ok_or(AnalysisError::Inference {
                stage: Stage::Sentiment,
                source: InferenceError::EmptyOutput("sentiment classifier"),
            })?
            .into();
        debug!(label = %sentiment.label, score = sentiment.score, "Sentiment classified");

        Ok(AnalysisResult {
            summary,
            entities,
            sentiment,
        })
    }
}
