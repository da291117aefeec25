mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use carebridge_api::ApiClient;
use carebridge_channels::{ChannelAdapter, TelegramAdapter};
use carebridge_commands::Dispatcher;
use carebridge_core::{Endpoint, VerificationApi};

use config::Config;

#[derive(Parser)]
#[command(name = "carebridge")]
#[command(about = "CareBridge — Telegram front-end for the healthcare-verification API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot
    Serve,
    /// Probe the verification API and print its health response
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Health => health_probe(config).await?,
    }

    Ok(())
}

async fn serve(config: Config) -> Result<()> {
    let token = config.require_token()?;

    let client = Arc::new(ApiClient::new(&config.api_base_url));
    let base_url = client.base_url().to_string();
    let dispatcher = Arc::new(Dispatcher::new(client, base_url));

    let adapter = TelegramAdapter::new(token, dispatcher);
    info!(
        "[Cli] Starting {} adapter against {}",
        adapter.name(),
        config.api_base_url
    );
    adapter.start().await
}

async fn health_probe(config: Config) -> Result<()> {
    let client = ApiClient::new(&config.api_base_url);
    let response = client.fetch(Endpoint::Health, None).await?;
    println!("HTTP {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}
