//! External collaborators: market data, quote rates, sentiment and snapshot
//! persistence.

pub mod hyperliquid;
pub mod market_data;
pub mod quote;
pub mod retry;
pub mod sentiment;
pub mod snapshot_store;

pub use hyperliquid::HyperliquidRestClient;
pub use market_data::MarketDataProvider;
pub use quote::{CoinGeckoRateClient, QuoteRateProvider};
pub use retry::RetryPolicy;
pub use sentiment::{FearGreedClient, SentimentProvider};
pub use snapshot_store::SnapshotStore;
