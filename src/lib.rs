//! Document analysis service.
//!
//! Runs named entity recognition, summarization and sentiment analysis over a
//! text and serves the combined result over HTTP.

pub mod analysis;
pub mod models;
pub mod nlp;
pub mod reader;
pub mod server;

pub use analysis::{AnalysisError, AnalyzerLimits, DocumentAnalyzer};
pub use models::{AnalysisResult, Document, Entity, SentimentResult};
