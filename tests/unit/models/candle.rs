use chrono::{TimeZone, Utc};
use coinpulse::models::indicators::Candle;

#[test]
fn test_converted_scales_prices_only() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let candle = Candle::new(0.5, 0.75, 0.25, 0.5, 1000.0, ts);

    let converted = candle.converted(150.0);

    assert_eq!(converted.open, 75.0);
    assert_eq!(converted.high, 112.5);
    assert_eq!(converted.low, 37.5);
    assert_eq!(converted.close, 75.0);
    assert_eq!(converted.volume, 1000.0);
    assert_eq!(converted.timestamp, ts);
}
