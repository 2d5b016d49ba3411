use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trend of the reference asset, decided once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketBias {
    Up,
    Down,
    #[default]
    Neutral,
}

/// Market-wide sentiment reading (0 = extreme fear, 100 = extreme greed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreed {
    pub value: u32,
    pub classification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Read-only inputs shared by every scoring call of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunContext {
    pub bias: MarketBias,
    pub fear_greed: Option<FearGreed>,
}

impl RunContext {
    pub fn new(bias: MarketBias) -> Self {
        Self {
            bias,
            fear_greed: None,
        }
    }

    pub fn with_fear_greed(mut self, fear_greed: FearGreed) -> Self {
        self.fear_greed = Some(fear_greed);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalLabel {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSellWarning,
    NoData,
}

impl SignalLabel {
    /// Code, display color and short message.
    const fn display(self) -> (&'static str, &'static str, &'static str) {
        match self {
            SignalLabel::StrongBuy => ("strong-buy", "#eb4d3d", "Strong buy setup"),
            SignalLabel::Buy => ("buy", "#f39c12", "Leaning bullish"),
            SignalLabel::Hold => ("hold", "#95a5a6", "No clear direction"),
            SignalLabel::Sell => ("sell", "#3498db", "Leaning bearish"),
            SignalLabel::StrongSellWarning => {
                ("strong-sell-warning", "#06c755", "Heavy selling pressure")
            }
            SignalLabel::NoData => ("no-data", "#cccccc", "Not enough history"),
        }
    }

    pub fn code(self) -> &'static str {
        self.display().0
    }

    pub fn color(self) -> &'static str {
        self.display().1
    }

    pub fn message(self) -> &'static str {
        self.display().2
    }
}

/// Scored view of one asset on one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: u8,
    pub signal: SignalLabel,
    pub color: String,
    pub message: String,
    pub reasons: Vec<String>,
    pub price: f64,
    pub take_profit: i64,
    pub stop_loss: i64,
}

impl Assessment {
    /// Result for an absent or too-short series.
    pub fn no_data() -> Self {
        let label = SignalLabel::NoData;
        Self {
            score: 0,
            signal: label,
            color: label.color().to_string(),
            message: label.message().to_string(),
            reasons: Vec::new(),
            price: 0.0,
            take_profit: 0,
            stop_loss: 0,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.signal == SignalLabel::NoData
    }
}
