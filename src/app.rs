// src/app.rs
use anyhow::Result;
use tracing::info;

use v2quote::application::QuoteService;
use v2quote::shared::config::QuoteConfig;

/// Run one quote; failures propagate to `main`, which reports them
pub async fn run(cfg: QuoteConfig) -> Result<()> {
    info!("Starting Uniswap V2 quote");
    info!("Configuration: {:?}", cfg);

    let service = QuoteService::connect(&cfg).await?;
    let result = service.quote().await?;

    println!("You can swap {}", result);
    Ok(())
}
