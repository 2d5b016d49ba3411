//! Integration tests for the Hyperliquid candle client.

use crate::test_utils::{candle_json, fast_retry, mock_candle_snapshot};
use coinpulse::error::FetchError;
use coinpulse::services::hyperliquid::HyperliquidRestClient;
use coinpulse::services::market_data::MarketDataProvider;
use coinpulse::services::retry::RetryPolicy;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HyperliquidRestClient {
    HyperliquidRestClient::with_client(server.uri(), reqwest::Client::new()).with_retry_policy(fast_retry())
}

#[tokio::test]
async fn candles_are_parsed_sorted_and_limited() {
    let server = MockServer::start().await;
    mock_candle_snapshot(
        &server,
        serde_json::json!([
            candle_json(7_200_000, "102", "104", "101", "103.5"),
            candle_json(0, "100", "101", "99", "100.5"),
            candle_json(3_600_000, "100.5", "102.25", "100", "102"),
        ]),
    )
    .await;

    let candles = client_for(&server).get_candles("BTC", "1h", 2).await.expect("candles");

    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].timestamp.timestamp_millis(), 3_600_000);
    assert_eq!(candles[0].high, 102.25);
    assert_eq!(candles[1].close, 103.5);
    assert_eq!(candles[1].volume, 12.5);
}

#[tokio::test]
async fn request_body_names_coin_and_interval() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .and(body_partial_json(serde_json::json!({
            "type": "candleSnapshot",
            "req": { "coin": "ETH", "interval": "1d" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([candle_json(0, "1", "2", "0.5", "1.5")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let candles = client_for(&server).get_candles("ETH", "1d", 10).await.expect("candles");
    assert_eq!(candles.len(), 1);
}

#[tokio::test]
async fn server_errors_are_retried_three_times() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server).get_candles("BTC", "1h", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_candles("BTC", "1h", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 400, .. }));
}

#[tokio::test]
async fn rate_limit_is_retried_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mock_candle_snapshot(&server, serde_json::json!([candle_json(0, "1", "2", "0.5", "1.5")])).await;

    let candles = client_for(&server).get_candles("BTC", "1h", 10).await.expect("candles");
    assert_eq!(candles.len(), 1);
}

fn slow_rate_limit_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_millis(5),
        rate_limit_delay: Duration::from_millis(800),
    }
}

#[tokio::test]
async fn rate_limit_waits_the_longer_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mock_candle_snapshot(&server, serde_json::json!([candle_json(0, "1", "2", "0.5", "1.5")])).await;

    let client = HyperliquidRestClient::with_client(server.uri(), reqwest::Client::new())
        .with_retry_policy(slow_rate_limit_policy());
    let started = Instant::now();
    client.get_candles("BTC", "1h", 10).await.expect("candles");

    assert!(started.elapsed() >= Duration::from_millis(800));
}

#[tokio::test]
async fn server_error_waits_the_normal_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mock_candle_snapshot(&server, serde_json::json!([candle_json(0, "1", "2", "0.5", "1.5")])).await;

    let client = HyperliquidRestClient::with_client(server.uri(), reqwest::Client::new())
        .with_retry_policy(slow_rate_limit_policy());
    let started = Instant::now();
    client.get_candles("BTC", "1h", 10).await.expect("candles");

    assert!(started.elapsed() < Duration::from_millis(800));
}

#[tokio::test]
async fn malformed_prices_are_decode_errors() {
    let server = MockServer::start().await;
    mock_candle_snapshot(&server, serde_json::json!([candle_json(0, "1", "two", "0.5", "1.5")])).await;

    let err = client_for(&server).get_candles("BTC", "1h", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn empty_snapshot_is_an_error() {
    let server = MockServer::start().await;
    mock_candle_snapshot(&server, serde_json::json!([])).await;

    let err = client_for(&server).get_candles("NOPE", "1h", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Empty(_)));
}

#[tokio::test]
async fn unsupported_interval_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).get_candles("BTC", "7m", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidInterval(ref i) if i == "7m"));
}
