//! Unit tests for the prediction engine

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::types::{EmotionScore, MarketSignals};

    fn signals(volume_spike: bool, rsi: f64) -> MarketSignals {
        MarketSignals { volume_spike, rsi }
    }

    #[test]
    fn test_default_weights() {
        let w = ScoringWeights::default();
        assert_eq!(w.t, 1.2);
        assert_eq!(w.s, 1.1);
        assert_eq!(w.f, 1.1);
        assert_eq!((w.d, w.m, w.g, w.p, w.b, w.reversal), (1.0, 1.0, 1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_volume_weight() {
        assert_eq!(volume_weight(true), 1.2);
        assert_eq!(volume_weight(false), 1.0);
    }

    #[test]
    fn test_rsi_weight_bounds_are_strict() {
        assert_eq!(rsi_weight(70.01), 0.9);
        assert_eq!(rsi_weight(29.99), 0.9);
        assert_eq!(rsi_weight(70.0), 1.0);
        assert_eq!(rsi_weight(30.0), 1.0);
        assert_eq!(rsi_weight(50.0), 1.0);
    }

    #[test]
    fn test_positive_emotion_with_volume_spike() {
        let s = score(EmotionScore::Positive, &ScoringWeights::default(), 1.2, 1.0);
        assert_eq!(s, 5.23);
        assert_eq!(interpret(s), Direction::Up);
        assert_eq!(ConfidenceTier::from_score(s), ConfidenceTier::High);
    }

    #[test]
    fn test_negative_emotion_with_extreme_rsi() {
        let s = score(EmotionScore::Negative, &ScoringWeights::default(), 1.0, 0.9);
        assert_eq!(s, -3.92);
        assert_eq!(interpret(s), Direction::Down);
        assert_eq!(ConfidenceTier::from_score(s), ConfidenceTier::Medium);
    }

    #[test]
    fn test_neutral_emotion_gates_score() {
        let s = score(EmotionScore::Neutral, &ScoringWeights::default(), 1.2, 0.9);
        assert_eq!(s, 0.0);
        assert_eq!(interpret(s), Direction::Sideways);
        assert_eq!(ConfidenceTier::from_score(s), ConfidenceTier::Low);
    }

    #[test]
    fn test_neutral_gating_for_any_market() {
        let engine = PredictionEngine::default();
        for spike in [true, false] {
            for rsi in [0.0, 15.0, 30.0, 50.0, 70.0, 85.0, 100.0] {
                let p = engine.predict(EmotionScore::Neutral, &signals(spike, rsi));
                assert_eq!(p.score, 0.0);
                assert_eq!(p.direction, Direction::Sideways);
            }
        }
    }

    #[test]
    fn test_engine_positive_plain_market() {
        // 3 * 1.2 * 1.1 * 1.1 = 4.356
        let p = PredictionEngine::default().predict(EmotionScore::Positive, &signals(false, 50.0));
        assert_eq!(p.score, 4.36);
        assert_eq!(p.direction, Direction::Up);
        assert_eq!(p.confidence, ConfidenceTier::High);
    }

    #[test]
    fn test_engine_matches_free_function() {
        let engine = PredictionEngine::default();
        let p = engine.predict(EmotionScore::Positive, &signals(true, 50.0));
        assert_eq!(p.score, 5.23);

        let p = engine.predict(EmotionScore::Negative, &signals(false, 82.0));
        assert_eq!(p.score, -3.92);
        assert_eq!(p.direction, Direction::Down);
    }

    #[test]
    fn test_overridden_weight() {
        let weights = ScoringWeights {
            reversal: 0.5,
            ..Default::default()
        };
        let engine = PredictionEngine::new(weights);
        // 3 * 1.452 * 0.5 = 2.178
        let p = engine.predict(EmotionScore::Positive, &signals(false, 50.0));
        assert_eq!(p.score, 2.18);
        assert_eq!(p.confidence, ConfidenceTier::Medium);
        assert_eq!(engine.weights().reversal, 0.5);
    }

    #[test]
    fn test_exact_tie_rounds_to_even() {
        let weights = ScoringWeights {
            t: 0.875,
            s: 1.0,
            f: 1.0,
            ..Default::default()
        };
        // 3 * 0.875 = 2.625 exactly
        assert_eq!(score(EmotionScore::Positive, &weights, 1.0, 1.0), 2.62);
        assert_eq!(score(EmotionScore::Negative, &weights, 1.0, 1.0), -2.62);
    }

    #[test]
    fn test_interpret_thresholds() {
        assert_eq!(interpret(1.51), Direction::Up);
        assert_eq!(interpret(1.5), Direction::Sideways);
        assert_eq!(interpret(-1.5), Direction::Sideways);
        assert_eq!(interpret(-1.51), Direction::Down);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(ConfidenceTier::from_score(1.99), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(2.0), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(-3.99), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(4.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(-4.5), ConfidenceTier::High);
    }

    #[test]
    fn test_confidence_stars() {
        assert_eq!(ConfidenceTier::Low.stars(), "★★★☆☆");
        assert_eq!(ConfidenceTier::Medium.stars(), "★★★★☆");
        assert_eq!(ConfidenceTier::High.to_string(), "★★★★★");
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let engine = PredictionEngine::default();
        let input = signals(true, 75.0);
        let first = engine.predict(EmotionScore::Negative, &input);
        for _ in 0..10 {
            assert_eq!(engine.predict(EmotionScore::Negative, &input), first);
        }
    }

    #[test]
    fn test_direction_serialization() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&Direction::Sideways).unwrap(), "\"SIDEWAYS\"");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }

    #[test]
    fn test_weights_deserialize_with_partial_override() {
        let weights: ScoringWeights = toml::from_str("t = 2.0").unwrap();
        assert_eq!(weights.t, 2.0);
        assert_eq!(weights.s, 1.1);
        assert_eq!(weights.reversal, 1.0);
    }
}
