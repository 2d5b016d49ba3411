//! Simple moving averages of close

use crate::common::math;
use crate::models::indicators::{closes, Candle, SmaIndicator};

pub const MA_SHORT: u32 = 7;
pub const MA_MEDIUM: u32 = 25;
pub const MA_LONG: u32 = 99;

pub fn sma_close_series(candles: &[Candle], period: u32) -> Vec<f64> {
    math::sma_series(&closes(candles), period as usize)
}

/// Calculate SMA of close at the latest candle
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    let value = math::latest(&sma_close_series(candles, period))?;
    Some(SmaIndicator { value, period })
}

/// Calculate several SMAs at once, skipping periods longer than the series
pub fn calculate_smas(candles: &[Candle], periods: &[u32]) -> Vec<SmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_sma(candles, period))
        .collect()
}
