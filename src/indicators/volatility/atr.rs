//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::{AtrIndicator, Candle};

pub const ATR_PERIOD: u32 = 14;

/// True range per candle; the first candle only contributes high - low.
pub fn true_range_series(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let prev_close = i.checked_sub(1).map(|p| candles[p].close);
            math::true_range(c.high, c.low, prev_close)
        })
        .collect()
}

/// ATR at every index: simple mean of true range over `period` candles.
pub fn atr_series(candles: &[Candle], period: u32) -> Vec<f64> {
    math::sma_series(&true_range_series(candles), period as usize)
}

/// Calculate ATR at the latest candle
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    let value = math::latest(&atr_series(candles, period))?;
    Some(AtrIndicator { value, period })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, ATR_PERIOD)
}
