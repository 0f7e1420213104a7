//! Error types for the predictor

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Invalid or unsupported ticker: {0}")]
    InvalidTicker(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PredictorError {
    /// Classify the error for degraded-input reporting
    pub fn kind(&self) -> FailureKind {
        match self {
            PredictorError::Network(e) if e.is_timeout() => FailureKind::Timeout,
            PredictorError::Network(e) if e.is_decode() => FailureKind::Parse,
            PredictorError::Network(_) | PredictorError::Io(_) => FailureKind::Network,
            PredictorError::Json(_) | PredictorError::Parse(_) => FailureKind::Parse,
            PredictorError::InsufficientData(_) => FailureKind::InsufficientData,
            PredictorError::InvalidTicker(_)
            | PredictorError::Provider(_)
            | PredictorError::Config(_) => FailureKind::Provider,
        }
    }
}

/// Why an input fell back to its neutral default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Timeout,
    Parse,
    InsufficientData,
    Provider,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Network => "network",
            FailureKind::Timeout => "timeout",
            FailureKind::Parse => "parse",
            FailureKind::InsufficientData => "insufficient data",
            FailureKind::Provider => "provider",
        };
        f.write_str(label)
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
