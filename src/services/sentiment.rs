//! Fear & greed index from alternative.me.

use crate::error::FetchError;
use crate::models::signal::FearGreed;
use crate::services::retry::RetryPolicy;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn fear_greed(&self) -> Result<FearGreed, FetchError>;
}

#[derive(Debug, Deserialize)]
struct FngResponse {
    #[serde(default)]
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
    #[serde(default)]
    timestamp: Option<String>,
}

pub struct FearGreedClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl FearGreedClient {
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

    async fn fetch_latest(&self, url: Url) -> Result<FngResponse, FetchError> {
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
impl SentimentProvider for FearGreedClient {
    async fn fear_greed(&self) -> Result<FearGreed, FetchError> {
        let url = Url::parse_with_params(
            &format!("{}/fng/", self.base_url.trim_end_matches('/')),
            &[("limit", "1")],
        )?;

        let response = self
            .retry
            .run("fear_greed", || self.fetch_latest(url.clone()))
            .await?;

        let entry = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Empty("fear_greed".to_string()))?;

        let value = entry
            .value
            .trim()
            .parse::<u32>()
            .map_err(|e| FetchError::Decode(format!("fear_greed value {:?}: {}", entry.value, e)))?;
        let timestamp = entry
            .timestamp
            .and_then(|t| t.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

        Ok(FearGreed {
            value,
            classification: entry.value_classification,
            timestamp,
        })
    }
}
