//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use crate::analysis::AnalyzerLimits;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default max body size for REST requests (10 MB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,

    /// Maximum request body size in bytes.
    /// Larger bodies are rejected before the document is parsed.
    pub max_body_size: usize,

    /// Document limits and summary bounds for the analyzer the server builds.
    pub limits: AnalyzerLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            limits: AnalyzerLimits::default(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = addr;
        self
    }

    pub fn with_max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    pub fn with_limits(mut self, limits: AnalyzerLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8000");
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert_eq!(config.limits, AnalyzerLimits::default());
    }

    #[test]
    fn test_builder() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let limits = AnalyzerLimits {
            max_input_chars: 500,
            ..AnalyzerLimits::default()
        };
        let config = ServerConfig::new()
            .with_bind_address(addr)
            .with_max_body_size(1024)
            .with_limits(limits);
        assert_eq!(config.bind_address, addr);
        assert_eq!(config.max_body_size, 1024);
        assert_eq!(config.limits.max_input_chars, 500);
    }
}
