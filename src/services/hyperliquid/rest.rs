//! REST client for Hyperliquid candle snapshots.

use super::interval::interval_millis;
use super::messages::{CandleData, CandleSnapshotRequest, InfoRequest};
use crate::error::FetchError;
use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataProvider;
use crate::services::retry::RetryPolicy;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct HyperliquidRestClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HyperliquidRestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
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

    fn info_url(&self) -> Result<Url, FetchError> {
        Ok(Url::parse(&format!("{}/info", self.base_url.trim_end_matches('/')))?)
    }

    /// Candles of `coin` between `start_time` and `end_time` (epoch millis).
    pub async fn candle_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = self.info_url()?;
        let request = InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: coin.to_string(),
                interval: interval.to_string(),
                start_time,
                end_time,
            },
        };
        let label = format!("candleSnapshot {coin} {interval}");

        let raw: Vec<CandleData> = self
            .retry
            .run(&label, || self.post_info(url.clone(), &request))
            .await?;

        let mut candles = raw
            .into_iter()
            .map(CandleData::into_candle)
            .collect::<Result<Vec<_>, _>>()?;
        candles.sort_by_key(|c| c.timestamp);
        Ok(candles)
    }

    async fn post_info(&self, url: Url, request: &InfoRequest) -> Result<Vec<CandleData>, FetchError> {
        let response = self.client.post(url).json(request).send().await?;
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
impl MarketDataProvider for HyperliquidRestClient {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, FetchError> {
        let step = interval_millis(interval)
            .ok_or_else(|| FetchError::InvalidInterval(interval.to_string()))?;
        let end_time = Utc::now().timestamp_millis();
        let start_time = end_time - step * limit as i64;

        let mut candles = self.candle_snapshot(symbol, interval, start_time, end_time).await?;
        if candles.is_empty() {
            return Err(FetchError::Empty(format!("{symbol} {interval}")));
        }
        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }

        debug!(
            symbol = %symbol,
            interval = %interval,
            count = candles.len(),
            "fetched candles"
        );
        Ok(candles)
    }
}
