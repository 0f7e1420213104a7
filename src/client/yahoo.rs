//! Yahoo Finance chart API client
//!
//! One endpoint serves everything the predictor needs: the chart `meta`
//! block carries the instrument name, and the `quote` indicator carries
//! daily closes and volumes.

use super::MarketDataProvider;
use crate::config::MarketConfig;
use crate::error::{PredictorError, Result};
use crate::types::Ticker;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance market-data client
pub struct YahooClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    #[serde(rename = "longName")]
    long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

impl ChartData {
    fn quote(self) -> Option<Quote> {
        self.indicators.and_then(|i| i.quote.into_iter().next())
    }
}

/// Drop missing bars, keeping source order
fn present(values: Option<Vec<Option<f64>>>) -> Vec<f64> {
    values
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect()
}

impl YahooClient {
    pub fn new(config: &MarketConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn chart(&self, ticker: &Ticker, query: &[(&str, String)]) -> Result<ChartData> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        tracing::debug!(%url, "requesting chart");

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        // Unknown symbols come back as 404 with a chart.error body
        let parsed: ChartResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(PredictorError::Provider(format!(
                    "HTTP {} for {}",
                    status, ticker
                )))
            }
        };

        if let Some(err) = parsed.chart.error {
            return Err(PredictorError::Provider(format!(
                "{} - {}",
                err.code, err.description
            )));
        }

        parsed
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| PredictorError::Provider(format!("No chart data for {}", ticker)))
    }

    /// Daily bars for the last `days` calendar days
    fn daily_window(days: u32) -> [(&'static str, String); 3] {
        let end = Utc::now();
        let start = end - chrono::Duration::days(i64::from(days));
        [
            ("period1", start.timestamp().to_string()),
            ("period2", end.timestamp().to_string()),
            ("interval", "1d".to_string()),
        ]
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn instrument_name(&self, ticker: &Ticker) -> Result<Option<String>> {
        let query = [("range", "5d".to_string()), ("interval", "1d".to_string())];
        let data = self.chart(ticker, &query).await?;

        Ok(data
            .meta
            .short_name
            .or(data.meta.long_name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    async fn daily_volumes(&self, ticker: &Ticker, days: u32) -> Result<Vec<f64>> {
        let data = self.chart(ticker, &Self::daily_window(days)).await?;
        Ok(present(data.quote().and_then(|q| q.volume)))
    }

    async fn daily_closes(&self, ticker: &Ticker, days: u32) -> Result<Vec<f64>> {
        let data = self.chart(ticker, &Self::daily_window(days)).await?;
        Ok(present(data.quote().and_then(|q| q.close)))
    }
}
