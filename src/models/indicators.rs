use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLC observation. OHLC ordering (`low <= open, close <= high`) is not
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Same candle with prices multiplied by `rate`; volume is unchanged.
    pub fn converted(&self, rate: f64) -> Self {
        Self {
            open: self.open * rate,
            high: self.high * rate,
            low: self.low * rate,
            close: self.close * rate,
            ..self.clone()
        }
    }
}

/// Closing prices of a series, oldest first.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub period: (u32, u32, u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
}

/// Latest value of every indicator the scoring engine consumes.
///
/// Any field may be NaN when the series was shorter than that indicator's
/// window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub rsi: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub ma7: f64,
    pub ma25: f64,
    pub ma99: f64,
    pub atr: f64,
}

impl IndicatorSnapshot {
    /// Snapshot with every value undefined.
    pub fn undefined() -> Self {
        Self {
            price: f64::NAN,
            rsi: f64::NAN,
            bollinger_upper: f64::NAN,
            bollinger_middle: f64::NAN,
            bollinger_lower: f64::NAN,
            macd: f64::NAN,
            macd_signal: f64::NAN,
            macd_histogram: f64::NAN,
            ma7: f64::NAN,
            ma25: f64::NAN,
            ma99: f64::NAN,
            atr: f64::NAN,
        }
    }
}
