//! Market data provider interface.

use crate::error::FetchError;
use crate::models::indicators::Candle;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Up to `limit` most recent candles of `interval` for `symbol`, oldest
    /// first.
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, FetchError>;
}
