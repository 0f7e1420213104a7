//! News headline scraping
//!
//! Best-effort: the headline markup belongs to the search provider and can
//! change at any time. A page without matching elements is not an error, it
//! simply has no headlines.

use super::NewsSource;
use crate::config::NewsConfig;
use crate::error::{PredictorError, Result};
use crate::types::Ticker;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

/// Headlines fetched per ticker
pub const NEWS_COUNT: usize = 5;

/// Result-snippet title markup on the basic news results page
pub const HEADLINE_SELECTOR: &str = "div.BNeawe.vvjwJb.AP7Wnd";

/// News search client
pub struct GoogleNewsClient {
    http: Client,
    search_url: String,
}

impl GoogleNewsClient {
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            search_url: config.search_url.clone(),
        })
    }

    fn query(ticker: &Ticker) -> String {
        format!("{} stock news", ticker)
    }
}

/// Text of the first `limit` headline elements in `html`
pub fn extract_headlines(html: &str, limit: usize) -> Result<Vec<String>> {
    let selector = Selector::parse(HEADLINE_SELECTOR)
        .map_err(|e| PredictorError::Parse(format!("headline selector: {}", e)))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .take(limit)
        .map(|element| element.text().collect::<String>())
        .collect())
}

#[async_trait]
impl NewsSource for GoogleNewsClient {
    async fn headlines(&self, ticker: &Ticker, limit: usize) -> Result<Vec<String>> {
        let query = Self::query(ticker);
        let body = self
            .http
            .get(&self.search_url)
            .query(&[("q", query.as_str()), ("tbm", "nws")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let headlines = extract_headlines(&body, limit)?;
        tracing::debug!(ticker = %ticker, count = headlines.len(), "headlines scraped");
        Ok(headlines)
    }
}
