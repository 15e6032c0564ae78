//! Fetch a full provider profile.
//!
//! Usage: `PLATFORM_API_URL=https://api.providerhub.io/v1 cargo run --example profile -- 42`

use std::sync::Arc;

use anyhow::Result;
use platform_client::PlatformClient;
use providers::{HttpApi, ProvidersService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "1".into());

    let api = Arc::new(HttpApi::new(PlatformClient::from_env()?));
    let service = ProvidersService::new(api);

    match service.provider_by_id(&id).await? {
        None => println!("No provider with id {}.", id),
        Some(provider) => {
            println!("{} — {}", provider.display_name(), provider.service_type);
            if !provider.headline.is_empty() {
                println!("  {}", provider.headline);
            }
            println!(
                "  {:.1}★ · {} · {}",
                provider.service_rating, provider.availability, provider.location
            );
            println!(
                "  {} posts · {} followers · {} referrals",
                provider.stats.posts, provider.stats.followers, provider.stats.referrals
            );
            for review in provider.reviews.iter().take(3) {
                let who = review
                    .reviewer
                    .as_ref()
                    .map(|r| r.name.as_str())
                    .unwrap_or("anonymous");
                println!("  \"{}\" — {} ({:.1}★)", review.comment, who, review.rating);
            }
        }
    }

    Ok(())
}
