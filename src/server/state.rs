//! Application state shared across handlers.

use std::sync::Arc;

use crate::analysis::DocumentAnalyzer;
use crate::server::config::ServerConfig;

/// Application state shared across all handlers.
///
/// The analyzer is built once at startup and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<DocumentAnalyzer>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(analyzer: DocumentAnalyzer, config: ServerConfig) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config: Arc::new(config),
        }
    }
}
