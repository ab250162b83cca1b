//! Showrank - Main entry point
//!
//! Command-line front end for the catalog search: resolves configuration,
//! runs the best-in-genre search, and prints the result on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showrank::{best_in_genre_with_cancel, CatalogClient, CatalogConfig};

/// Command-line arguments for showrank
#[derive(Parser, Debug)]
#[command(name = "showrank")]
#[command(about = "Find the best-rated TV series in a genre")]
#[command(version)]
struct Args {
    /// Genre to search for (case-insensitive)
    genre: String,

    /// Catalog API base URL
    #[arg(long, env = "SHOWRANK_BASE_URL")]
    base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "SHOWRANK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Logs go to stderr; stdout carries only the
    // search result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showrank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = CatalogConfig::resolve(args.base_url, args.timeout_secs);
    info!("Searching catalog at {}", config.base_url);

    let client = CatalogClient::with_config(&config).context("Failed to build catalog client")?;

    // Ctrl+C cancels the search between page fetches.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, cancelling search");
            signal_cancel.cancel();
        }
    });

    let outcome = best_in_genre_with_cancel(&client, &args.genre, &cancel)
        .await
        .context("Catalog search failed")?;

    println!("{}", outcome.into_message());
    Ok(())
}
