//! Search providers from the command line.
//!
//! Usage: `PLATFORM_API_URL=https://api.providerhub.io/v1 cargo run --example search -- plumbing`

use std::sync::Arc;

use anyhow::Result;
use platform_client::PlatformClient;
use providers::{DiscoveryService, HttpApi};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "plumbing".into());

    let api = Arc::new(HttpApi::new(PlatformClient::from_env()?));
    let discovery = DiscoveryService::new(api);

    let outcome = discovery.search_with_session("cli", &term).await;

    match &outcome.message {
        Some(message) => println!("{}", message),
        None if outcome.providers.is_empty() => println!("No providers matched '{}'.", term),
        None => {
            println!(
                "{} of {} providers (page {}):",
                outcome.providers.len(),
                outcome.total,
                outcome.page
            );
            for provider in &outcome.providers {
                println!(
                    "  {} — {} ({:.1}★, {})",
                    provider.display_name(),
                    provider.service_type,
                    provider.service_rating,
                    provider.availability
                );
            }
        }
    }

    Ok(())
}
