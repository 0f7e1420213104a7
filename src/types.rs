//! Core value types shared by the pipeline

use crate::error::{FailureKind, PredictorError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Upper bound on symbol length (Yahoo symbols such as `BRK-B` or `SHOP.TO` are short)
const MAX_TICKER_LEN: usize = 15;

/// Stock ticker symbol, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize user input into a ticker.
    ///
    /// Only the symbol's shape is checked here; whether it resolves to a
    /// real instrument is up to the validator.
    pub fn parse(raw: &str) -> Result<Self> {
        let symbol = raw.trim().to_uppercase();

        let well_formed = !symbol.is_empty()
            && symbol.len() <= MAX_TICKER_LEN
            && symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));

        if well_formed {
            Ok(Self(symbol))
        } else {
            Err(PredictorError::InvalidTicker(raw.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bucketed headline sentiment (E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i8")]
pub enum EmotionScore {
    Negative,
    Neutral,
    Positive,
}

impl EmotionScore {
    pub fn value(self) -> i8 {
        match self {
            EmotionScore::Negative => -2,
            EmotionScore::Neutral => 0,
            EmotionScore::Positive => 2,
        }
    }

    /// Non-neutral sentiment pushed one unit further from zero
    pub fn enhanced(self) -> f64 {
        match self {
            EmotionScore::Negative => -3.0,
            EmotionScore::Neutral => 0.0,
            EmotionScore::Positive => 3.0,
        }
    }
}

impl From<EmotionScore> for i8 {
    fn from(score: EmotionScore) -> Self {
        score.value()
    }
}

impl fmt::Display for EmotionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Market-technical inputs to the prediction engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketSignals {
    /// Last session volume above 1.3x the window mean
    pub volume_spike: bool,
    /// Latest 14-period RSI (0-100)
    pub rsi: f64,
}

impl MarketSignals {
    pub const NEUTRAL_RSI: f64 = 50.0;

    /// Fully neutral signals used when market data is unavailable
    pub fn neutral() -> Self {
        Self {
            volume_spike: false,
            rsi: Self::NEUTRAL_RSI,
        }
    }
}

impl Default for MarketSignals {
    fn default() -> Self {
        Self::neutral()
    }
}

/// A value that either came from its source or was defaulted after a failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    /// Set when `value` is a fallback default
    pub fallback: Option<FailureKind>,
}

impl<T> Sourced<T> {
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            fallback: None,
        }
    }

    pub fn defaulted(value: T, reason: FailureKind) -> Self {
        Self {
            value,
            fallback: Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }
}
