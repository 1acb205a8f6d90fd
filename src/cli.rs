//! Command-line interface argument parsing.

use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use docanalyst::analysis::{AnalyzerLimits, DEFAULT_MAX_INPUT_CHARS};
use docanalyst::nlp::summarization::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use docanalyst::nlp::SummaryParams;
use docanalyst::server::config::{DEFAULT_MAX_BODY_SIZE, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "docanalyst", version, about = "Entity recognition, summarization and sentiment analysis for documents")]
pub struct Cli {
    /// Log filter (e.g. info, debug, docanalyst=trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info", env = "DOCANALYST_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the analysis API over HTTP
    Serve {
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST), env = "DOCANALYST_HOST")]
        host: IpAddr,

        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "DOCANALYST_PORT")]
        port: u16,

        /// Reject request bodies larger than this many bytes
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_SIZE, env = "DOCANALYST_MAX_BODY_SIZE")]
        max_body_size: usize,

        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Analyze a local file and print the result as JSON
    Analyze {
        /// Document to analyze (.txt, .md, .csv, .json or .pdf)
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct LimitArgs {
    /// Reject documents longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_CHARS, env = "DOCANALYST_MAX_INPUT_CHARS")]
    pub max_input_chars: usize,

    /// Upper bound on summary length, in words
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub summary_max_length: usize,

    /// Lower bound on summary length, in words
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub summary_min_length: usize,
}

impl LimitArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("--max-input-chars must be greater than 0".to_string());
        }
        if self.summary_max_length == 0 {
            return Err("--summary-max-length must be greater than 0".to_string());
        }
        if self.summary_min_length > self.summary_max_length {
            return Err(format!(
                "--summary-min-length ({}) must not exceed --summary-max-length ({})",
                self.summary_min_length, self.summary_max_length
            ));
        }
        Ok(())
    }

    pub fn to_limits(&self) -> AnalyzerLimits {
        AnalyzerLimits {
            max_input_chars: self.max_input_chars,
            summary: SummaryParams {
                max_length: self.summary_max_length,
                min_length: self.summary_min_length,
            },
        }
    }
}

pub fn bind_address(host: IpAddr, port: u16) -> SocketAddr {
    SocketAddr::new(host, port)
}
