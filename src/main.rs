// docanalyst: entity recognition, summarization and sentiment analysis over HTTP.
mod cli;

use std::net::IpAddr;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, LimitArgs};
use docanalyst::analysis::DocumentAnalyzer;
use docanalyst::models::Document;
use docanalyst::reader::read_document;
use docanalyst::server::{Server, ServerConfig};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so `analyze` output on stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_analyzer(limits: &LimitArgs) -> Result<DocumentAnalyzer> {
    limits.validate().map_err(|e| anyhow!(e))?;
    Ok(DocumentAnalyzer::with_defaults(limits.to_limits()))
}

fn server_config(
    host: IpAddr,
    port: u16,
    max_body_size: usize,
    limits: &LimitArgs,
) -> Result<ServerConfig> {
    limits.validate().map_err(|e| anyhow!(e))?;
    if max_body_size == 0 {
        return Err(anyhow!("--max-body-size must be greater than 0"));
    }

    Ok(ServerConfig::new()
        .with_bind_address(cli::bind_address(host, port))
        .with_max_body_size(max_body_size)
        .with_limits(limits.to_limits()))
}

async fn serve(host: IpAddr, port: u16, max_body_size: usize, limits: &LimitArgs) -> Result<()> {
    let config = server_config(host, port, max_body_size, limits)?;

    info!(
        max_body_size = config.max_body_size,
        max_input_chars = config.limits.max_input_chars,
        summary_max_length = config.limits.summary.max_length,
        summary_min_length = config.limits.summary.min_length,
        "Analyzers loaded"
    );

    Server::with_default_analyzers(config).run().await?;
    Ok(())
}

fn analyze_file(path: &Path, limits: &LimitArgs) -> Result<()> {
    let analyzer = build_analyzer(limits)?;
    debug!(limits = ?analyzer.limits(), "Analyzer ready");
    let text = read_document(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let result = analyzer
        .analyze(&Document::new(text))
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Serve {
            host,
            port,
            max_body_size,
            limits,
        } => serve(host, port, max_body_size, &limits).await?,
        Commands::Analyze { file, limits } => analyze_file(&file, &limits)?,
    }
    Ok(())
}
