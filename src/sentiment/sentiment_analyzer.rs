//! Headline sentiment analysis
//!
//! Thin wrapper over the VADER lexicon/rule-based analyzer. VADER handles
//! boosters, negations, capitalization and punctuation emphasis, which covers
//! short English news headlines well.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Result of sentiment analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    /// Compound score (-1.0 to 1.0)
    pub compound: f64,
}

/// Sentiment analyzer using lexicon-based approach
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Analyze sentiment of text
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult { compound: 0.0 };
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);

        SentimentResult {
            compound: compound.clamp(-1.0, 1.0),
        }
    }

    /// Mean compound score across texts, `None` when there are none
    pub fn average_compound<S: AsRef<str>>(&self, texts: &[S]) -> Option<f64> {
        if texts.is_empty() {
            return None;
        }

        let total: f64 = texts
            .iter()
            .map(|t| self.analyze(t.as_ref()).compound)
            .sum();
        Some(total / texts.len() as f64)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headline() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("Apple posts great quarter, shares win big");
        assert!(result.compound > 0.25);
    }

    #[test]
    fn test_negative_headline() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("Terrible losses in fraud scandal");
        assert!(result.compound < -0.25);
    }

    #[test]
    fn test_neutral_headline() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("The company will report on Thursday");
        assert!(result.compound.abs() < 0.05);
    }

    #[test]
    fn test_negation_lowers_score() {
        let analyzer = SentimentAnalyzer::new();

        let positive = analyzer.analyze("The outlook is good");
        let negated = analyzer.analyze("The outlook is not good");

        assert!(positive.compound > 0.0);
        assert!(negated.compound < positive.compound);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("   ");
        assert_eq!(result, SentimentResult { compound: 0.0 });
    }

    #[test]
    fn test_compound_bounded() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("GREAT!!! AMAZING!!! BEST EVER!!! LOVE IT!!! WONDERFUL!!!");
        assert!(result.compound <= 1.0);
        assert!(result.compound > 0.9);
    }

    #[test]
    fn test_average_compound() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.average_compound::<&str>(&[]), None);

        let texts = ["Great results", "Great results"];
        let single = analyzer.analyze("Great results").compound;
        let avg = analyzer.average_compound(&texts).unwrap();
        assert!((avg - single).abs() < 1e-12);
    }
}
