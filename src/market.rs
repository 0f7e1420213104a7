//! Market signal extraction
//!
//! Derives the volume-spike flag and the latest RSI from recent daily bars.
//! Both signals fall back together: if anything in the derivation fails,
//! the extractor reports fully neutral signals tagged with the reason.

use crate::client::MarketDataProvider;
use crate::error::{PredictorError, Result};
use crate::indicator::{is_volume_spike, latest_rsi, RSI_PERIOD, VOLUME_SPIKE_RATIO};
use crate::types::{MarketSignals, Sourced, Ticker};
use std::sync::Arc;

/// Calendar days of history used for the volume spike
pub const VOLUME_WINDOW_DAYS: u32 = 7;
/// Calendar days of closes used for the RSI
pub const RSI_WINDOW_DAYS: u32 = 21;

pub struct MarketSignalExtractor {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketSignalExtractor {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Signals for `ticker`, neutral on any failure
    pub async fn extract(&self, ticker: &Ticker) -> Sourced<MarketSignals> {
        match self.try_extract(ticker).await {
            Ok(signals) => {
                tracing::info!(
                    ticker = %ticker,
                    volume_spike = signals.volume_spike,
                    rsi = signals.rsi,
                    "market signals derived"
                );
                Sourced::fresh(signals)
            }
            Err(e) => {
                tracing::warn!(ticker = %ticker, error = %e, "market data unavailable, using neutral signals");
                Sourced::defaulted(MarketSignals::neutral(), e.kind())
            }
        }
    }

    async fn try_extract(&self, ticker: &Ticker) -> Result<MarketSignals> {
        let volumes = self
            .provider
            .daily_volumes(ticker, VOLUME_WINDOW_DAYS)
            .await?;
        let volume_spike = is_volume_spike(&volumes, VOLUME_SPIKE_RATIO);

        let closes = self.provider.daily_closes(ticker, RSI_WINDOW_DAYS).await?;
        let rsi = latest_rsi(&closes, RSI_PERIOD).ok_or_else(|| {
            PredictorError::InsufficientData(format!(
                "no defined {}-period RSI in {} closes",
                RSI_PERIOD,
                closes.len()
            ))
        })?;

        Ok(MarketSignals { volume_spike, rsi })
    }
}
