//! Wire types for the Hyperliquid `/info` endpoint.

use crate::error::FetchError;
use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfoRequest {
    CandleSnapshot { req: CandleSnapshotRequest },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleSnapshotRequest {
    pub coin: String,
    pub interval: String,
    pub start_time: i64,
    pub end_time: i64,
}

/// One candle as returned by `candleSnapshot`; prices are decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleData {
    pub t: i64,
    #[serde(rename = "T", default)]
    pub close_time: i64,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub i: String,
    pub o: String,
    pub h: String,
    pub l: String,
    pub c: String,
    #[serde(default)]
    pub v: Option<String>,
    #[serde(default)]
    pub n: u64,
}

impl CandleData {
    pub fn into_candle(self) -> Result<Candle, FetchError> {
        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.t)
            .ok_or_else(|| FetchError::Decode(format!("invalid candle time {}", self.t)))?;
        let volume = match self.v.as_deref() {
            Some(v) => parse_decimal("v", v)?,
            None => 0.0,
        };
        Ok(Candle::new(
            parse_decimal("o", &self.o)?,
            parse_decimal("h", &self.h)?,
            parse_decimal("l", &self.l)?,
            parse_decimal("c", &self.c)?,
            volume,
            timestamp,
        ))
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<f64, FetchError> {
    value
        .parse::<f64>()
        .map_err(|e| FetchError::Decode(format!("field {field}: {value:?}: {e}")))
}
