//! Multi-factor score over the latest indicator values.
//!
//! Factors are additive around a neutral base of 50. Each one that fires
//! leaves a human-readable reason, in evaluation order.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Assessment, MarketBias, RunContext};
use crate::signals::labels::label_for_score;

pub const BASE_SCORE: i32 = 50;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_WEIGHT: i32 = 15;
pub const BOLLINGER_WEIGHT: i32 = 10;
pub const MACD_WEIGHT: i32 = 10;
pub const MA_ORDER_WEIGHT: i32 = 25;
pub const BIAS_DOWN_PENALTY: i32 = 15;
pub const BIAS_UP_BONUS: i32 = 5;

pub const STOP_LOSS_ATR_MULT: f64 = 2.0;
pub const TAKE_PROFIT_ATR_MULT: f64 = 3.0;

pub const NO_SIGNAL_REASON: &str = "No notable signals";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiAnalysis {
    Oversold,
    Overbought,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTouch {
    Lower,
    Upper,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdState {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaOrder {
    Uptrend,
    Downtrend,
    Mixed,
}

pub fn analyze_rsi(rsi: f64) -> RsiAnalysis {
    if rsi <= RSI_OVERSOLD {
        RsiAnalysis::Oversold
    } else if rsi >= RSI_OVERBOUGHT {
        RsiAnalysis::Overbought
    } else {
        RsiAnalysis::Neutral
    }
}

pub fn analyze_bollinger(price: f64, lower: f64, upper: f64) -> BandTouch {
    if price <= lower {
        BandTouch::Lower
    } else if price >= upper {
        BandTouch::Upper
    } else {
        BandTouch::Inside
    }
}

/// Strictly above the signal line is bullish; anything else, including an
/// undefined line, is bearish.
pub fn analyze_macd(macd: f64, signal: f64) -> MacdState {
    if macd > signal {
        MacdState::Bullish
    } else {
        MacdState::Bearish
    }
}

/// "Perfect order": price and the 7/25/99 averages strictly stacked.
pub fn analyze_ma_order(price: f64, ma7: f64, ma25: f64, ma99: f64) -> MaOrder {
    if price > ma7 && ma7 > ma25 && ma25 > ma99 {
        MaOrder::Uptrend
    } else if price < ma7 && ma7 < ma25 && ma25 < ma99 {
        MaOrder::Downtrend
    } else {
        MaOrder::Mixed
    }
}

/// Running score plus the reasons collected so far.
#[derive(Debug, Clone)]
struct ScoreCard {
    score: i32,
    reasons: Vec<String>,
}

impl ScoreCard {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            reasons: Vec::new(),
        }
    }

    fn apply(&mut self, delta: i32, reason: String) {
        self.score += delta;
        self.reasons.push(reason);
    }
}

/// Score one indicator snapshot under the run's market context.
pub fn score_snapshot(snapshot: &IndicatorSnapshot, ctx: &RunContext) -> Assessment {
    let price = snapshot.price;
    let mut card = ScoreCard::new();

    match analyze_rsi(snapshot.rsi) {
        RsiAnalysis::Oversold => card.apply(RSI_WEIGHT, format!("RSI oversold ({:.1})", snapshot.rsi)),
        RsiAnalysis::Overbought => card.apply(-RSI_WEIGHT, format!("RSI overbought ({:.1})", snapshot.rsi)),
        RsiAnalysis::Neutral => {}
    }

    match analyze_bollinger(price, snapshot.bollinger_lower, snapshot.bollinger_upper) {
        BandTouch::Lower => card.apply(BOLLINGER_WEIGHT, "Price at or below lower Bollinger band".to_string()),
        BandTouch::Upper => card.apply(-BOLLINGER_WEIGHT, "Price at or above upper Bollinger band".to_string()),
        BandTouch::Inside => {}
    }

    match analyze_macd(snapshot.macd, snapshot.macd_signal) {
        MacdState::Bullish => card.apply(MACD_WEIGHT, "MACD above signal: bullish momentum".to_string()),
        MacdState::Bearish => card.apply(-MACD_WEIGHT, "MACD below signal: bearish momentum".to_string()),
    }

    match analyze_ma_order(price, snapshot.ma7, snapshot.ma25, snapshot.ma99) {
        MaOrder::Uptrend => card.apply(MA_ORDER_WEIGHT, "Moving averages in uptrend alignment".to_string()),
        MaOrder::Downtrend => card.apply(-MA_ORDER_WEIGHT, "Moving averages in downtrend continuation".to_string()),
        MaOrder::Mixed => {}
    }

    if card.score > BASE_SCORE {
        match ctx.bias {
            MarketBias::Down => card.apply(
                -BIAS_DOWN_PENALTY,
                "Discounted for weak reference-asset trend".to_string(),
            ),
            MarketBias::Up => card.apply(
                BIAS_UP_BONUS,
                "Boosted for strong reference-asset trend".to_string(),
            ),
            MarketBias::Neutral => {}
        }
    }

    if card.reasons.is_empty() {
        card.reasons.push(NO_SIGNAL_REASON.to_string());
    }

    let score = card.score.clamp(0, 100) as u8;
    let label = label_for_score(score);
    let (take_profit, stop_loss) = exit_levels(price, snapshot.atr);

    Assessment {
        score,
        signal: label,
        color: label.color().to_string(),
        message: label.message().to_string(),
        reasons: card.reasons,
        price,
        take_profit,
        stop_loss,
    }
}

/// Take-profit and stop-loss around `price`, truncated toward zero.
///
/// No sanity check against price: a volatile low-priced asset can get a
/// negative stop. An undefined ATR maps both levels to 0.
pub fn exit_levels(price: f64, atr: f64) -> (i64, i64) {
    let take_profit = (price + TAKE_PROFIT_ATR_MULT * atr).trunc() as i64;
    let stop_loss = (price - STOP_LOSS_ATR_MULT * atr).trunc() as i64;
    (take_profit, stop_loss)
}
