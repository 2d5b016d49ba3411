//! Persisted snapshot document.

use crate::models::signal::{Assessment, MarketBias};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub bias: MarketBias,
    /// Uppercase code of the currency every price in the document is in.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub fear_greed: Option<u32>,
    #[serde(default)]
    pub fear_greed_label: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolReport {
    pub price: f64,
    pub short: Assessment,
    pub long: Assessment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub updated: String,
    pub market: MarketSummary,
    pub data: BTreeMap<String, SymbolReport>,
}
