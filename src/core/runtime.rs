//! Snapshot assembly: fetch, score and persist one run.

use crate::config::{SnapshotConfig, FEED_CURRENCY};
use crate::error::SnapshotError;
use crate::models::indicators::Candle;
use crate::models::signal::{MarketBias, RunContext};
use crate::models::snapshot::{MarketSummary, SnapshotDocument, SymbolReport};
use crate::services::market_data::MarketDataProvider;
use crate::services::quote::QuoteRateProvider;
use crate::services::sentiment::SentimentProvider;
use crate::services::snapshot_store::SnapshotStore;
use crate::signals::{detect_bias, SignalEngine};
use chrono::{FixedOffset, Offset, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const UPDATED_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Currency of one run and the factor applied to the feed's prices.
#[derive(Debug, Clone, PartialEq)]
struct Quote {
    currency: String,
    rate: f64,
}

impl Quote {
    fn feed() -> Self {
        Self {
            currency: FEED_CURRENCY.to_uppercase(),
            rate: 1.0,
        }
    }
}

pub struct SnapshotRuntime {
    config: SnapshotConfig,
    market_data: Arc<dyn MarketDataProvider>,
    quote_rates: Option<Arc<dyn QuoteRateProvider>>,
    sentiment: Option<Arc<dyn SentimentProvider>>,
    store: SnapshotStore,
}

impl SnapshotRuntime {
    pub fn new(config: SnapshotConfig, market_data: Arc<dyn MarketDataProvider>) -> Self {
        let store = SnapshotStore::new(config.output_path.clone());
        Self {
            config,
            market_data,
            quote_rates: None,
            sentiment: None,
            store,
        }
    }

    pub fn with_quote_rates(mut self, quote_rates: Arc<dyn QuoteRateProvider>) -> Self {
        self.quote_rates = Some(quote_rates);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Arc<dyn SentimentProvider>) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Assemble a snapshot and persist it.
    pub async fn run_once(&self) -> Result<SnapshotDocument, SnapshotError> {
        let document = self.assemble().await;
        self.store.save(&document).await?;
        Ok(document)
    }

    /// Fetch and score every configured symbol. Fetch failures never abort the
    /// run: the affected timeframe is scored as missing data.
    pub async fn assemble(&self) -> SnapshotDocument {
        let started = Instant::now();
        info!(
            symbols = self.config.symbols.len(),
            reference = %self.config.reference_symbol,
            "snapshot run started"
        );

        let quote = self.resolve_quote().await;
        let reference = self
            .fetch(&self.config.reference_symbol, &self.config.long_interval, &quote)
            .await;
        let ctx = self.build_context(reference.as_deref()).await;
        let mut data = BTreeMap::new();

        for symbol in &self.config.symbols {
            let short = self.fetch(symbol, &self.config.short_interval, &quote).await;
            // the reference series already is this symbol's long series
            let long = if *symbol == self.config.reference_symbol {
                reference.clone()
            } else {
                self.fetch(symbol, &self.config.long_interval, &quote).await
            };

            let short_assessment = SignalEngine::evaluate(short.as_deref(), &ctx);
            let long_assessment = SignalEngine::evaluate(long.as_deref(), &ctx);

            let price = last_close(short.as_deref())
                .or_else(|| last_close(long.as_deref()))
                .unwrap_or(0.0);

            debug!(
                symbol = %symbol,
                price,
                short_score = short_assessment.score,
                long_score = long_assessment.score,
                "scored symbol"
            );

            data.insert(
                symbol.clone(),
                SymbolReport {
                    price,
                    short: short_assessment,
                    long: long_assessment,
                },
            );
        }

        info!(
            symbols = data.len(),
            bias = ?ctx.bias,
            currency = %quote.currency,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "snapshot run finished"
        );

        SnapshotDocument {
            updated: self.updated_stamp(),
            market: MarketSummary {
                bias: ctx.bias,
                currency: quote.currency,
                fear_greed: ctx.fear_greed.as_ref().map(|fg| fg.value),
                fear_greed_label: ctx.fear_greed.as_ref().map(|fg| fg.classification.clone()),
            },
            data,
        }
    }

    /// Conversion for this run. Without a usable rate prices stay in the
    /// feed's currency.
    async fn resolve_quote(&self) -> Quote {
        if !self.config.needs_conversion() {
            return Quote::feed();
        }
        let Some(quote_rates) = &self.quote_rates else {
            warn!(currency = %self.config.quote_currency, "no quote rate source, reporting feed prices");
            return Quote::feed();
        };

        match quote_rates.usd_rate(&self.config.quote_currency).await {
            Ok(rate) => {
                info!(currency = %self.config.quote_currency, rate, "quote rate");
                Quote {
                    currency: self.config.quote_currency.to_uppercase(),
                    rate,
                }
            }
            Err(e) => {
                warn!(currency = %self.config.quote_currency, error = %e, "quote rate unavailable, reporting feed prices");
                Quote::feed()
            }
        }
    }

    /// Bias from the reference asset's long series, plus the sentiment
    /// reading. Both fail open.
    async fn build_context(&self, reference: Option<&[Candle]>) -> RunContext {
        let bias = detect_bias(reference);
        if bias == MarketBias::Neutral {
            warn!(reference = %self.config.reference_symbol, "market bias unavailable, using NEUTRAL");
        } else {
            info!(reference = %self.config.reference_symbol, bias = ?bias, "market bias detected");
        }

        let mut ctx = RunContext::new(bias);
        if let Some(sentiment) = &self.sentiment {
            match sentiment.fear_greed().await {
                Ok(fg) => {
                    info!(value = fg.value, classification = %fg.classification, "fear & greed index");
                    ctx = ctx.with_fear_greed(fg);
                }
                Err(e) => warn!(error = %e, "fear & greed index unavailable"),
            }
        }
        ctx
    }

    /// One paced request; `None` on failure.
    async fn fetch(&self, symbol: &str, interval: &str, quote: &Quote) -> Option<Vec<Candle>> {
        let result = self
            .market_data
            .get_candles(symbol, interval, self.config.candle_limit)
            .await;
        self.pause().await;

        match result {
            Ok(candles) if quote.rate == 1.0 => Some(candles),
            Ok(candles) => Some(candles.iter().map(|c| c.converted(quote.rate)).collect()),
            Err(e) => {
                warn!(symbol = %symbol, interval = %interval, error = %e, "candle fetch failed");
                None
            }
        }
    }

    async fn pause(&self) {
        if self.config.request_pause_seconds > 0 {
            tokio::time::sleep(Duration::from_secs(self.config.request_pause_seconds)).await;
        }
    }

    fn updated_stamp(&self) -> String {
        let offset = FixedOffset::east_opt(self.config.utc_offset_hours * 3600).unwrap_or(Utc.fix());
        Utc::now().with_timezone(&offset).format(UPDATED_FORMAT).to_string()
    }
}

fn last_close(candles: Option<&[Candle]>) -> Option<f64> {
    candles.and_then(|c| c.last()).map(|c| c.close)
}
