//! Reference-asset trend detection.

use crate::common::math;
use crate::indicators::trend::{sma_close_series, MA_MEDIUM};
use crate::models::indicators::Candle;
use crate::models::signal::MarketBias;

/// Close above its 25-period average is `Up`; at or below is `Down`.
/// Without enough history the bias stays `Neutral` so the run is never blocked.
pub fn detect_bias(reference: Option<&[Candle]>) -> MarketBias {
    let Some(candles) = reference else {
        return MarketBias::Neutral;
    };
    let Some(last) = candles.last() else {
        return MarketBias::Neutral;
    };
    match math::latest(&sma_close_series(candles, MA_MEDIUM)) {
        Some(ma25) if last.close > ma25 => MarketBias::Up,
        Some(_) => MarketBias::Down,
        None => MarketBias::Neutral,
    }
}
