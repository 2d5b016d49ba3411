//! Unit tests for the factor scoring

use coinpulse::models::indicators::IndicatorSnapshot;
use coinpulse::models::signal::{MarketBias, RunContext, SignalLabel};
use coinpulse::signals::scoring::{
    analyze_ma_order, analyze_macd, exit_levels, score_snapshot, MacdState, MaOrder,
};

/// Nothing fires except the MACD factor, which is bearish.
fn quiet_snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot {
        price: 100.0,
        rsi: 50.0,
        bollinger_upper: 110.0,
        bollinger_middle: 100.0,
        bollinger_lower: 90.0,
        macd: -1.0,
        macd_signal: 0.0,
        macd_histogram: -1.0,
        ma7: 100.0,
        ma25: 100.0,
        ma99: 100.0,
        atr: 5.0,
    }
}

#[test]
fn test_base_case_only_macd_fires() {
    let assessment = score_snapshot(&quiet_snapshot(), &RunContext::default());
    assert_eq!(assessment.score, 40);
    assert_eq!(assessment.signal, SignalLabel::Hold);
    assert_eq!(assessment.reasons.len(), 1);
    assert!(assessment.reasons[0].contains("bearish"));
}

#[test]
fn test_rsi_oversold_reason_carries_value() {
    let snapshot = IndicatorSnapshot {
        rsi: 25.04,
        ..quiet_snapshot()
    };
    let assessment = score_snapshot(&snapshot, &RunContext::default());
    assert_eq!(assessment.score, 55);
    assert!(assessment.reasons[0].contains("oversold"));
    assert!(assessment.reasons[0].contains("25.0"));
}

#[test]
fn test_rsi_thresholds_inclusive() {
    let at_30 = score_snapshot(&IndicatorSnapshot { rsi: 30.0, ..quiet_snapshot() }, &RunContext::default());
    assert_eq!(at_30.score, 55);
    let at_70 = score_snapshot(&IndicatorSnapshot { rsi: 70.0, ..quiet_snapshot() }, &RunContext::default());
    assert_eq!(at_70.score, 25);
}

#[test]
fn test_band_touch_inclusive() {
    let lower = score_snapshot(
        &IndicatorSnapshot { bollinger_lower: 100.0, ..quiet_snapshot() },
        &RunContext::default(),
    );
    assert_eq!(lower.score, 50);
    let upper = score_snapshot(
        &IndicatorSnapshot { bollinger_upper: 100.0, ..quiet_snapshot() },
        &RunContext::default(),
    );
    assert_eq!(upper.score, 30);
}

#[test]
fn test_macd_equal_lines_is_bearish() {
    assert_eq!(analyze_macd(1.0, 1.0), MacdState::Bearish);
    assert_eq!(analyze_macd(1.0, 0.5), MacdState::Bullish);
    assert_eq!(analyze_macd(f64::NAN, 0.5), MacdState::Bearish);
}

#[test]
fn test_ma_order_is_strict() {
    assert_eq!(analyze_ma_order(4.0, 3.0, 2.0, 1.0), MaOrder::Uptrend);
    assert_eq!(analyze_ma_order(1.0, 2.0, 3.0, 4.0), MaOrder::Downtrend);
    assert_eq!(analyze_ma_order(4.0, 3.0, 3.0, 1.0), MaOrder::Mixed);
    assert_eq!(analyze_ma_order(1.0, 2.0, 2.0, 4.0), MaOrder::Mixed);
    assert_eq!(analyze_ma_order(4.0, 3.0, 2.0, f64::NAN), MaOrder::Mixed);
}

#[test]
fn test_bias_skipped_at_fifty() {
    // +10 lower band, -10 MACD: running score exactly 50
    let snapshot = IndicatorSnapshot {
        bollinger_lower: 100.0,
        ..quiet_snapshot()
    };
    for bias in [MarketBias::Up, MarketBias::Down, MarketBias::Neutral] {
        let assessment = score_snapshot(&snapshot, &RunContext::new(bias));
        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.reasons.len(), 2);
    }
}

#[test]
fn test_bias_adjusts_above_fifty() {
    let snapshot = IndicatorSnapshot {
        rsi: 20.0,
        macd: 1.0,
        ..quiet_snapshot()
    };
    let neutral = score_snapshot(&snapshot, &RunContext::new(MarketBias::Neutral));
    assert_eq!(neutral.score, 75);
    assert_eq!(neutral.signal, SignalLabel::Buy);

    let down = score_snapshot(&snapshot, &RunContext::new(MarketBias::Down));
    assert_eq!(down.score, 60);
    assert_eq!(down.signal, SignalLabel::Hold);
    assert!(down.reasons.last().unwrap().contains("Discounted"));

    let up = score_snapshot(&snapshot, &RunContext::new(MarketBias::Up));
    assert_eq!(up.score, 80);
    assert!(up.reasons.last().unwrap().contains("Boosted"));
}

#[test]
fn test_score_is_always_clamped() {
    let rsis = [20.0, 50.0, 80.0];
    let bands = [(100.0, 120.0), (80.0, 120.0), (80.0, 100.0)];
    let macds = [1.0, -1.0];
    let mas = [(99.0, 98.0, 97.0), (100.0, 100.0, 100.0), (101.0, 102.0, 103.0)];
    let biases = [MarketBias::Up, MarketBias::Down, MarketBias::Neutral];

    for rsi in rsis {
        for (lower, upper) in bands {
            for macd in macds {
                for (ma7, ma25, ma99) in mas {
                    for bias in biases {
                        let snapshot = IndicatorSnapshot {
                            rsi,
                            bollinger_lower: lower,
                            bollinger_upper: upper,
                            macd,
                            ma7,
                            ma25,
                            ma99,
                            ..quiet_snapshot()
                        };
                        let assessment = score_snapshot(&snapshot, &RunContext::new(bias));
                        assert!(assessment.score <= 100);
                        assert!(!assessment.reasons.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn test_undefined_indicators_score_neutral_minus_macd() {
    let mut snapshot = IndicatorSnapshot::undefined();
    snapshot.price = 10.0;
    let assessment = score_snapshot(&snapshot, &RunContext::new(MarketBias::Up));
    assert_eq!(assessment.score, 40);
    assert_eq!(assessment.take_profit, 0);
    assert_eq!(assessment.stop_loss, 0);
}

#[test]
fn test_exit_levels() {
    assert_eq!(exit_levels(100.0, 5.0), (115, 90));
    assert_eq!(exit_levels(100.9, 0.1), (101, 100));
}

#[test]
fn test_exit_levels_not_sanity_checked() {
    let (take_profit, stop_loss) = exit_levels(0.5, 1.0);
    assert_eq!(take_profit, 3);
    assert_eq!(stop_loss, -1);
}

#[test]
fn test_assessment_carries_label_display() {
    let assessment = score_snapshot(&quiet_snapshot(), &RunContext::default());
    assert_eq!(assessment.color, SignalLabel::Hold.color());
    assert_eq!(assessment.message, SignalLabel::Hold.message());
    assert_eq!(assessment.price, 100.0);
    assert_eq!(assessment.take_profit, 115);
    assert_eq!(assessment.stop_loss, 90);
}
