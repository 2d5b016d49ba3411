//! Entry point of the scoring core.

use crate::indicators::IndicatorBank;
use crate::models::indicators::Candle;
use crate::models::signal::{Assessment, RunContext};
use crate::signals::scoring::score_snapshot;

/// Shortest series that is scored; anything shorter yields a no-data result.
pub const MIN_CANDLES: usize = 100;

pub struct SignalEngine;

impl SignalEngine {
    /// Score a candle series. Absent or short series never fail: they map to
    /// [`Assessment::no_data`].
    pub fn evaluate(candles: Option<&[Candle]>, ctx: &RunContext) -> Assessment {
        match candles {
            Some(candles) if candles.len() >= MIN_CANDLES => {
                let snapshot = IndicatorBank::compute(candles);
                score_snapshot(&snapshot, ctx)
            }
            _ => Assessment::no_data(),
        }
    }
}
