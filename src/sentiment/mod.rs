//! Headline sentiment scoring
//!
//! Turns a set of headlines into the discrete emotion score consumed by the
//! prediction engine. The analyzer is stateless, so one process-wide
//! instance is created on first use and shared by every request.

pub mod sentiment_analyzer;

pub use sentiment_analyzer::{SentimentAnalyzer, SentimentResult};

use crate::types::EmotionScore;
use once_cell::sync::Lazy;

/// Average compound polarity above which headlines count as positive
pub const POSITIVE_THRESHOLD: f64 = 0.25;
/// Average compound polarity below which headlines count as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.25;

static ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::new);

/// Shared analyzer handle
pub fn analyzer() -> &'static SentimentAnalyzer {
    &ANALYZER
}

/// Bucket an average compound polarity; both thresholds stay neutral
pub fn bucket(average: f64) -> EmotionScore {
    if average > POSITIVE_THRESHOLD {
        EmotionScore::Positive
    } else if average < NEGATIVE_THRESHOLD {
        EmotionScore::Negative
    } else {
        EmotionScore::Neutral
    }
}

/// Maps headline sets to emotion scores
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// No headlines means no evidence, which scores neutral
    pub fn score<S: AsRef<str>>(&self, headlines: &[S]) -> EmotionScore {
        match analyzer().average_compound(headlines) {
            Some(average) => {
                tracing::debug!(
                    headlines = headlines.len(),
                    average,
                    "headline sentiment averaged"
                );
                bucket(average)
            }
            None => EmotionScore::Neutral,
        }
    }
}
