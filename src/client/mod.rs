//! External data clients
//!
//! - Market data: instrument metadata and daily bars (Yahoo Finance chart API)
//! - News: headline snippets scraped from a news search page

pub mod news;
pub mod yahoo;

pub use news::{GoogleNewsClient, NEWS_COUNT};
pub use yahoo::YahooClient;

use crate::error::Result;
use crate::types::Ticker;
use async_trait::async_trait;

/// Market-data provider consumed by the validator and the signal extractor
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable instrument name, `None` if the provider has no record
    async fn instrument_name(&self, ticker: &Ticker) -> Result<Option<String>>;

    /// Daily volumes over the last `days` calendar days, oldest first
    async fn daily_volumes(&self, ticker: &Ticker, days: u32) -> Result<Vec<f64>>;

    /// Daily closes over the last `days` calendar days, oldest first
    async fn daily_closes(&self, ticker: &Ticker, days: u32) -> Result<Vec<f64>>;
}

/// Source of recent news headlines
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Up to `limit` headlines in source order
    async fn headlines(&self, ticker: &Ticker, limit: usize) -> Result<Vec<String>>;
}
