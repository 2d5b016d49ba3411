//! Coinpulse Worker
//!
//! Runs the snapshot on the `SNAPSHOT_CRON` schedule until interrupted.

use coinpulse::config::{get_environment, SnapshotConfig};
use coinpulse::core::runtime::SnapshotRuntime;
use coinpulse::core::scheduler::SnapshotScheduler;
use coinpulse::logging;
use coinpulse::services::{CoinGeckoRateClient, FearGreedClient, HyperliquidRestClient};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = SnapshotConfig::from_env()?;
    info!("Starting Coinpulse Worker");
    info!(environment = %get_environment(), "Environment");
    info!(cron = %config.cron, symbols = config.symbols.len(), "Schedule");

    let cron = config.cron.clone();
    let run_on_start = config.run_on_start;
    let market_data = Arc::new(HyperliquidRestClient::new(config.hyperliquid_api_url.clone()));
    let quote_rates = Arc::new(CoinGeckoRateClient::new(config.coingecko_api_url.clone()));
    let sentiment = Arc::new(FearGreedClient::new(config.fear_greed_api_url.clone()));
    let runtime = Arc::new(
        SnapshotRuntime::new(config, market_data)
            .with_quote_rates(quote_rates)
            .with_sentiment(sentiment),
    );

    if run_on_start {
        if let Err(e) = runtime.run_once().await {
            error!(error = %e, "Initial snapshot run failed");
        }
    }

    let scheduler = SnapshotScheduler::new(runtime, &cron)?;
    if let Some(next) = scheduler.next_run() {
        info!(next = %next, "Next snapshot run");
    }
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
