//! Ticker validation
//!
//! A ticker is valid when the market-data provider returns a record with a
//! human-readable name. Validation fails closed: provider errors count as
//! invalid and are never raised to the caller.

use crate::client::MarketDataProvider;
use crate::types::Ticker;
use std::sync::Arc;

pub struct TickerValidator {
    provider: Arc<dyn MarketDataProvider>,
}

impl TickerValidator {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Instrument name when `ticker` resolves, `None` otherwise
    pub async fn resolve(&self, ticker: &Ticker) -> Option<String> {
        match self.provider.instrument_name(ticker).await {
            Ok(Some(name)) => Some(name),
            Ok(None) => {
                tracing::info!(ticker = %ticker, "no instrument record");
                None
            }
            Err(e) => {
                tracing::info!(ticker = %ticker, error = %e, "ticker lookup failed");
                None
            }
        }
    }

    pub async fn validate(&self, ticker: &Ticker) -> bool {
        self.resolve(ticker).await.is_some()
    }
}
