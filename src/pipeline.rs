//! Prediction pipeline
//!
//! Single entry point shared by the terminal and the web page: ticker in,
//! [`Report`] out. Only an invalid ticker is an error; every other failure
//! is absorbed at its own component and shows up as a degraded input.

use crate::client::{GoogleNewsClient, MarketDataProvider, NewsSource, YahooClient, NEWS_COUNT};
use crate::config::Config;
use crate::error::{FailureKind, PredictorError, Result};
use crate::market::MarketSignalExtractor;
use crate::sentiment::SentimentScorer;
use crate::strategy::{Prediction, PredictionEngine};
use crate::types::{EmotionScore, MarketSignals, Sourced, Ticker};
use crate::validator::TickerValidator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Everything one prediction produced, in presentation order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ticker: Ticker,
    pub instrument_name: String,
    pub headlines: Sourced<Vec<String>>,
    pub emotion: EmotionScore,
    pub market: Sourced<MarketSignals>,
    pub prediction: Prediction,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Inputs that were defaulted, with the reason
    pub fn degraded_inputs(&self) -> Vec<(&'static str, FailureKind)> {
        let mut degraded = Vec::new();
        if let Some(reason) = self.headlines.fallback {
            degraded.push(("news", reason));
        }
        if let Some(reason) = self.market.fallback {
            degraded.push(("market data", reason));
        }
        degraded
    }

    pub fn is_degraded(&self) -> bool {
        self.headlines.is_degraded() || self.market.is_degraded()
    }
}

pub struct Pipeline {
    validator: TickerValidator,
    news: Arc<dyn NewsSource>,
    scorer: SentimentScorer,
    extractor: MarketSignalExtractor,
    engine: PredictionEngine,
}

impl Pipeline {
    pub fn new(
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsSource>,
        engine: PredictionEngine,
    ) -> Self {
        Self {
            validator: TickerValidator::new(Arc::clone(&market)),
            news,
            scorer: SentimentScorer::new(),
            extractor: MarketSignalExtractor::new(market),
            engine,
        }
    }

    /// Pipeline over the live Yahoo Finance and news search clients
    pub fn from_config(config: &Config) -> Result<Self> {
        let market = Arc::new(YahooClient::new(&config.market)?);
        let news = Arc::new(GoogleNewsClient::new(&config.news)?);
        Ok(Self::new(market, news, PredictionEngine::new(config.scoring)))
    }

    /// Validate `raw`, gather inputs and score them
    pub async fn run(&self, raw: &str) -> Result<Report> {
        let ticker = Ticker::parse(raw)?;

        let Some(instrument_name) = self.validator.resolve(&ticker).await else {
            return Err(PredictorError::InvalidTicker(ticker.to_string()));
        };
        tracing::info!(ticker = %ticker, name = %instrument_name, "ticker validated");

        let headlines = self.fetch_headlines(&ticker).await;
        let emotion = self.scorer.score(&headlines.value);
        let market = self.extractor.extract(&ticker).await;
        let prediction = self.engine.predict(emotion, &market.value);

        let report = Report {
            ticker,
            instrument_name,
            headlines,
            emotion,
            market,
            prediction,
            generated_at: Utc::now(),
        };

        tracing::info!(
            ticker = %report.ticker,
            score = report.prediction.score,
            direction = %report.prediction.direction,
            degraded = report.is_degraded(),
            "prediction complete"
        );

        Ok(report)
    }

    async fn fetch_headlines(&self, ticker: &Ticker) -> Sourced<Vec<String>> {
        match self.news.headlines(ticker, NEWS_COUNT).await {
            Ok(headlines) => Sourced::fresh(headlines),
            Err(e) => {
                tracing::warn!(ticker = %ticker, error = %e, "news fetch failed, continuing without headlines");
                Sourced::defaulted(Vec::new(), e.kind())
            }
        }
    }
}
