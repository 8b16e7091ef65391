//! Strictly Creatures - Unified CLI
//!
//! Terminal guessing game plus a one-shot catalog fetch for debugging.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_creatures::{CatalogClient, GameConfig, HINTS, IdSampler, SubjectSource, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { log_file } => {
            let config = GameConfig::load_or_default(&cli.config)?;
            run_tui(config, &log_file).await
        }
        Command::Fetch { id } => {
            initialize_stderr_tracing();
            let config = GameConfig::load_or_default(&cli.config)?;
            run_fetch(config, id).await
        }
    }
}

/// Fetches one subject and prints it with every hint.
#[instrument(skip(config))]
async fn run_fetch(config: GameConfig, id: Option<u32>) -> Result<()> {
    let id = id.unwrap_or_else(|| IdSampler::new(*config.min_id(), *config.max_id()).draw());
    info!(id, "Fetching subject");

    let client = CatalogClient::new(&config)?;
    let subject = client.fetch_subject(id).await?;
    let hints: Vec<String> = HINTS.iter().map(|hint| hint(&subject)).collect();

    let output = serde_json::json!({
        "subject": subject,
        "display_name": subject.display_name(),
        "hints": hints,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_creatures=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
