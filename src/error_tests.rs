//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::{FailureKind, PredictorError};

    #[test]
    fn test_invalid_ticker_error() {
        let err = PredictorError::InvalidTicker("ZZZZ".to_string());
        assert!(err.to_string().contains("Invalid or unsupported ticker"));
        assert!(err.to_string().contains("ZZZZ"));
    }

    #[test]
    fn test_parse_error() {
        let err = PredictorError::Parse("bad selector".to_string());
        assert!(err.to_string().contains("Parse error"));
        assert_eq!(err.kind(), FailureKind::Parse);
    }

    #[test]
    fn test_json_error_is_parse_kind() {
        let err: PredictorError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().contains("JSON parsing error"));
        assert_eq!(err.kind(), FailureKind::Parse);
    }

    #[test]
    fn test_insufficient_data_kind() {
        let err = PredictorError::InsufficientData("3 closes".to_string());
        assert!(err.to_string().contains("Insufficient data"));
        assert_eq!(err.kind(), FailureKind::InsufficientData);
    }

    #[test]
    fn test_provider_kind() {
        let err = PredictorError::Provider("Not Found".to_string());
        assert_eq!(err.kind(), FailureKind::Provider);
    }

    #[test]
    fn test_io_error_is_network_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err: PredictorError = io.into();
        assert_eq!(err.kind(), FailureKind::Network);
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Timeout.to_string(), "timeout");
        assert_eq!(FailureKind::InsufficientData.to_string(), "insufficient data");
    }

    #[test]
    fn test_failure_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&FailureKind::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
        assert_eq!(
            serde_json::to_string(&FailureKind::Network).unwrap(),
            "\"network\""
        );
    }

    #[test]
    fn test_error_variants_distinct() {
        let parse = PredictorError::Parse("test".to_string());
        let provider = PredictorError::Provider("test".to_string());

        assert_ne!(parse.to_string(), provider.to_string());
    }
}
