//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{closes, Candle};

/// EMA of close at every index, seeded with the first close.
pub fn ema_close_series(candles: &[Candle], span: u32) -> Vec<f64> {
    math::ema_series(&closes(candles), span as usize)
}

/// EMA of close at the latest candle
pub fn calculate_ema(candles: &[Candle], span: u32) -> Option<f64> {
    math::latest(&ema_close_series(candles, span))
}
