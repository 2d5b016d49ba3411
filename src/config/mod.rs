//! Environment-driven configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binaries); every key has a default.

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Asset universe scored when `SNAPSHOT_SYMBOLS` is unset.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "ETC", "XRP", "LTC", "BCH", "XLM", "DOT", "LINK", "AVAX", "SAND", "CHZ", "APE",
    "AXS", "IMX", "ENJ", "BAT", "MKR", "DOGE", "SOL",
];

pub const DEFAULT_HYPERLIQUID_API_URL: &str = "https://api.hyperliquid.xyz";
pub const DEFAULT_FEAR_GREED_API_URL: &str = "https://api.alternative.me";
pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Currency the candle feed quotes in.
pub const FEED_CURRENCY: &str = "usd";

/// Deployment environment name (`APP_ENV`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub symbols: Vec<String>,
    pub reference_symbol: String,
    pub short_interval: String,
    pub long_interval: String,
    pub candle_limit: usize,
    pub request_pause_seconds: u64,
    pub output_path: PathBuf,
    pub utc_offset_hours: i32,
    pub cron: String,
    pub hyperliquid_api_url: String,
    pub fear_greed_api_url: String,
    /// Lowercase currency code prices are reported in.
    pub quote_currency: String,
    pub coingecko_api_url: String,
    /// Worker only: run once before waiting for the first cron tick.
    pub run_on_start: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            reference_symbol: "BTC".to_string(),
            short_interval: "1h".to_string(),
            long_interval: "1d".to_string(),
            candle_limit: 200,
            request_pause_seconds: 3,
            output_path: PathBuf::from("docs/data/crypto_signal.json"),
            utc_offset_hours: 9,
            cron: "0 0 * * * *".to_string(),
            hyperliquid_api_url: DEFAULT_HYPERLIQUID_API_URL.to_string(),
            fear_greed_api_url: DEFAULT_FEAR_GREED_API_URL.to_string(),
            quote_currency: "jpy".to_string(),
            coingecko_api_url: DEFAULT_COINGECKO_API_URL.to_string(),
            run_on_start: false,
        }
    }
}

impl SnapshotConfig {
    /// Whether prices must be converted from the feed's currency.
    pub fn needs_conversion(&self) -> bool {
        self.quote_currency != FEED_CURRENCY
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(symbols) = get("SNAPSHOT_SYMBOLS") {
            config.symbols = symbols
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = get("REFERENCE_SYMBOL") {
            config.reference_symbol = v.to_uppercase();
        }
        if let Some(v) = get("SHORT_INTERVAL") {
            config.short_interval = v;
        }
        if let Some(v) = get("LONG_INTERVAL") {
            config.long_interval = v;
        }
        if let Some(v) = get("CANDLE_LIMIT") {
            config.candle_limit = parse("CANDLE_LIMIT", &v)?;
        }
        if let Some(v) = get("REQUEST_PAUSE_SECONDS") {
            config.request_pause_seconds = parse("REQUEST_PAUSE_SECONDS", &v)?;
        }
        if let Some(v) = get("SNAPSHOT_OUTPUT_PATH") {
            config.output_path = PathBuf::from(v);
        }
        if let Some(v) = get("SNAPSHOT_UTC_OFFSET_HOURS") {
            let hours: i32 = parse("SNAPSHOT_UTC_OFFSET_HOURS", &v)?;
            if !(-23..=23).contains(&hours) {
                return Err(ConfigError::Invalid {
                    key: "SNAPSHOT_UTC_OFFSET_HOURS".to_string(),
                    value: v,
                });
            }
            config.utc_offset_hours = hours;
        }
        if let Some(v) = get("SNAPSHOT_CRON") {
            config.cron = v;
        }
        if let Some(v) = get("HYPERLIQUID_API_URL") {
            config.hyperliquid_api_url = v;
        }
        if let Some(v) = get("FEAR_GREED_API_URL") {
            config.fear_greed_api_url = v;
        }
        if let Some(v) = get("QUOTE_CURRENCY") {
            config.quote_currency = v.to_lowercase();
        }
        if let Some(v) = get("COINGECKO_API_URL") {
            config.coingecko_api_url = v;
        }
        if let Some(v) = get("RUN_ON_START") {
            config.run_on_start = parse_flag("RUN_ON_START", &v)?;
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
