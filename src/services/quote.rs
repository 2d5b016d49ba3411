//! Conversion rate from the candle feed's dollar quote to the report currency.
//!
//! Hyperliquid candles are USDC-denominated, so the rate is CoinGecko's price
//! of `usd-coin` in the target currency.

use crate::error::FetchError;
use crate::services::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const FEED_COIN_ID: &str = "usd-coin";

#[async_trait]
pub trait QuoteRateProvider: Send + Sync {
    /// Units of `currency` per feed dollar. Always finite and positive.
    async fn usd_rate(&self, currency: &str) -> Result<f64, FetchError>;
}

pub struct CoinGeckoRateClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl CoinGeckoRateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_prices(&self, url: Url) -> Result<HashMap<String, HashMap<String, f64>>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl QuoteRateProvider for CoinGeckoRateClient {
    async fn usd_rate(&self, currency: &str) -> Result<f64, FetchError> {
        let currency = currency.to_lowercase();
        let url = Url::parse_with_params(
            &format!("{}/simple/price", self.base_url.trim_end_matches('/')),
            &[("ids", FEED_COIN_ID), ("vs_currencies", currency.as_str())],
        )?;

        let prices = self
            .retry
            .run("quote_rate", || self.fetch_prices(url.clone()))
            .await?;

        let rate = prices
            .get(FEED_COIN_ID)
            .and_then(|quotes| quotes.get(&currency))
            .copied()
            .ok_or_else(|| FetchError::Empty(format!("{FEED_COIN_ID}/{currency}")))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(FetchError::Decode(format!("unusable rate {rate} for {currency}")));
        }
        Ok(rate)
    }
}
