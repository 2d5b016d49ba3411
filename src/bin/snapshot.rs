//! Coinpulse one-shot snapshot
//!
//! Scores the configured universe once and writes the snapshot file.

use coinpulse::config::{get_environment, SnapshotConfig};
use coinpulse::core::runtime::SnapshotRuntime;
use coinpulse::logging;
use coinpulse::services::{CoinGeckoRateClient, FearGreedClient, HyperliquidRestClient};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = SnapshotConfig::from_env()?;
    info!(environment = %get_environment(), "Starting Coinpulse snapshot");
    info!(
        symbols = ?config.symbols,
        short = %config.short_interval,
        long = %config.long_interval,
        currency = %config.quote_currency,
        output = %config.output_path.display(),
        "Configuration"
    );

    let market_data = Arc::new(HyperliquidRestClient::new(config.hyperliquid_api_url.clone()));
    let quote_rates = Arc::new(CoinGeckoRateClient::new(config.coingecko_api_url.clone()));
    let sentiment = Arc::new(FearGreedClient::new(config.fear_greed_api_url.clone()));
    let runtime = SnapshotRuntime::new(config, market_data)
        .with_quote_rates(quote_rates)
        .with_sentiment(sentiment);

    let document = runtime.run_once().await?;
    info!(updated = %document.updated, symbols = document.data.len(), "Snapshot complete");
    Ok(())
}
