//! Prediction engine
//!
//! Combines the emotion score and market signals into one weighted
//! multiplicative score, then maps it to a direction and a confidence tier.
//! Neutral sentiment gates the score to zero whatever the market says.

#[cfg(test)]
mod tests;

use crate::types::{EmotionScore, MarketSignals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume weight applied on a volume spike
pub const SPIKE_VOLUME_WEIGHT: f64 = 1.2;
/// RSI weight applied when overbought or oversold
pub const EXTREME_RSI_WEIGHT: f64 = 0.9;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
/// Scores above this predict UP, below its negation DOWN
pub const DIRECTION_THRESHOLD: f64 = 1.5;
/// |score| below this is the lowest confidence tier
pub const LOW_CONFIDENCE_LIMIT: f64 = 2.0;
/// |score| below this (and not lower) is the middle tier
pub const MEDIUM_CONFIDENCE_LIMIT: f64 = 4.0;

/// Fixed multiplicative factors of the score.
///
/// These stand in for signals this version does not compute. Each one can be
/// overridden on its own from configuration; the pipeline uses the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// T (default 1.2)
    pub t: f64,
    /// S (default 1.1)
    pub s: f64,
    /// D (default 1.0)
    pub d: f64,
    /// M (default 1.0)
    pub m: f64,
    /// G (default 1.0)
    pub g: f64,
    /// P (default 1.0)
    pub p: f64,
    /// F (default 1.1)
    pub f: f64,
    /// B (default 1.0)
    pub b: f64,
    /// Reversal (default 1.0)
    pub reversal: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            t: 1.2,
            s: 1.1,
            d: 1.0,
            m: 1.0,
            g: 1.0,
            p: 1.0,
            f: 1.1,
            b: 1.0,
            reversal: 1.0,
        }
    }
}

impl ScoringWeights {
    fn product(&self) -> f64 {
        self.t * self.s * self.d * self.m * self.g * self.p * self.f * self.b * self.reversal
    }
}

/// V: 1.2 on a volume spike, else 1.0
pub fn volume_weight(volume_spike: bool) -> f64 {
    if volume_spike {
        SPIKE_VOLUME_WEIGHT
    } else {
        1.0
    }
}

/// R: 0.9 when RSI is strictly beyond 70 or 30, else 1.0
pub fn rsi_weight(rsi: f64) -> f64 {
    if rsi > RSI_OVERBOUGHT || rsi < RSI_OVERSOLD {
        EXTREME_RSI_WEIGHT
    } else {
        1.0
    }
}

/// Weighted score rounded to two decimals
pub fn score(emotion: EmotionScore, weights: &ScoringWeights, volume: f64, rsi: f64) -> f64 {
    // Ordered as E*T*S*D*M*G*P*F*V*R*B*reversal
    let raw = emotion.enhanced()
        * weights.t
        * weights.s
        * weights.d
        * weights.m
        * weights.g
        * weights.p
        * weights.f
        * volume
        * rsi
        * weights.b
        * weights.reversal;
    round2(raw)
}

/// Two decimals, ties to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Predicted direction for the next session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Sideways,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Sideways => "SIDEWAYS",
        };
        f.write_str(label)
    }
}

/// Map a score to a direction
pub fn interpret(score: f64) -> Direction {
    if score > DIRECTION_THRESHOLD {
        Direction::Up
    } else if score < -DIRECTION_THRESHOLD {
        Direction::Down
    } else {
        Direction::Sideways
    }
}

/// Coarse banding of |score|, not a statistical confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude < LOW_CONFIDENCE_LIMIT {
            ConfidenceTier::Low
        } else if magnitude < MEDIUM_CONFIDENCE_LIMIT {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::High
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            ConfidenceTier::Low => "★★★☆☆",
            ConfidenceTier::Medium => "★★★★☆",
            ConfidenceTier::High => "★★★★★",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stars())
    }
}

/// Final prediction for one ticker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub score: f64,
    pub direction: Direction,
    pub confidence: ConfidenceTier,
}

impl Prediction {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            direction: interpret(score),
            confidence: ConfidenceTier::from_score(score),
        }
    }
}

/// Scores emotion and market signals with a fixed set of weights
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    weights: ScoringWeights,
}

impl PredictionEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn predict(&self, emotion: EmotionScore, signals: &MarketSignals) -> Prediction {
        let volume = volume_weight(signals.volume_spike);
        let rsi = rsi_weight(signals.rsi);
        let score = score(emotion, &self.weights, volume, rsi);

        tracing::debug!(
            emotion = emotion.value(),
            volume_weight = volume,
            rsi_weight = rsi,
            fixed_product = self.weights.product(),
            score,
            "scored prediction"
        );

        Prediction::from_score(score)
    }
}
