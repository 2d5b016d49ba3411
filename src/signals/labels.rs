//! Score to signal label mapping.

use crate::models::signal::SignalLabel;

pub const STRONG_BUY_MIN: u8 = 85;
pub const BUY_MIN: u8 = 65;
pub const STRONG_SELL_MAX: u8 = 20;
pub const SELL_MAX: u8 = 35;

/// Thresholds are inclusive and checked in order, first match wins.
pub fn label_for_score(score: u8) -> SignalLabel {
    if score >= STRONG_BUY_MIN {
        SignalLabel::StrongBuy
    } else if score >= BUY_MIN {
        SignalLabel::Buy
    } else if score <= STRONG_SELL_MAX {
        SignalLabel::StrongSellWarning
    } else if score <= SELL_MAX {
        SignalLabel::Sell
    } else {
        SignalLabel::Hold
    }
}
