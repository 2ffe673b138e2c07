// Standalone MCP server binary

use anyhow::Result;
use ashby_mcp::config::load_env_file;
use ashby_mcp::tools::ToolRegistry;
use ashby_mcp::{Dispatcher, McpConfig, McpServer};
use ashby_sdk::{API_KEY_ENV, BASE_URL_ENV};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ashby-mcp")]
#[command(about = "MCP server for the Ashby applicant tracking system", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "ASHBY_MCP_CONFIG", default_value = "ashby-mcp.toml")]
    config: PathBuf,

    /// Ashby API root, overriding the configuration file
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before logging and argument parsing, so RUST_LOG and clap's `env`
    // fallbacks can come from the file too. The real environment wins.
    let env_file = load_env_file(None);

    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ashby_mcp=info,ashby_sdk=info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match env_file {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = ?e, "Ignoring environment file"),
    }

    let args = Args::parse();

    tracing::info!("Ashby MCP Server starting...");

    let mut config = McpConfig::load(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.ashby.base_url = base_url;
    }

    let client = config.build_client(|name| std::env::var(name).ok())?;
    if !client.is_connected() {
        tracing::warn!("{API_KEY_ENV} is not set; every tool call will fail until it is");
    }
    let registry = ToolRegistry::ashby();

    tracing::info!(
        base_url = %client.base_url(),
        "Registered {} tools",
        registry.len()
    );

    let server = McpServer::new(Dispatcher::new(client, registry), config.server.name);
    server.start().await?;

    Ok(())
}
