//! Request and response value types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::nlp::{EntitySpan, SentimentScore};

/// A document submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    /// Raw text to analyze.
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A named entity found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    /// Surface text of the entity.
    pub text: String,
    /// Entity category, e.g. `PERSON` or `ORGANIZATION`.
    pub label: String,
}

impl From<EntitySpan> for Entity {
    fn from(span: EntitySpan) -> Self {
        Self {
            text: span.word,
            label: span.label,
        }
    }
}

/// Overall polarity of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SentimentResult {
    /// `POSITIVE`, `NEGATIVE` or `NEUTRAL`.
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

impl From<SentimentScore> for SentimentResult {
    fn from(score: SentimentScore) -> Self {
        Self {
            label: score.label.to_string(),
            score: score.score,
        }
    }
}

/// Combined output of the three analysis stages for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub summary: String,
    pub entities: Vec<Entity>,
    pub sentiment: SentimentResult,
}
