//! Presentation adapters
//!
//! Both surfaces show the same content in the same order; [`ReportView`]
//! holds that content pre-formatted so the adapters only lay it out.

pub mod terminal;
pub mod web;

use crate::pipeline::Report;

pub const APP_TITLE: &str = "Stock Prediction AI";
pub const APP_CAPTION: &str = "Predict tomorrow's stock movement using real news and market signals.";
pub const NO_NEWS: &str = "No news found.";
pub const INVALID_TICKER: &str = "Invalid or unsupported ticker. Please try another.";

/// Display strings for one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub ticker: String,
    pub instrument_name: String,
    pub headlines: Vec<String>,
    pub emotion: String,
    pub volume_spike: String,
    pub rsi: String,
    pub prediction: String,
    pub score: String,
    pub confidence: String,
    /// One line per defaulted input
    pub notices: Vec<String>,
}

impl From<&Report> for ReportView {
    fn from(report: &Report) -> Self {
        let notices = report
            .degraded_inputs()
            .into_iter()
            .map(|(input, reason)| format!("{} unavailable ({}), neutral default used", input, reason))
            .collect();

        Self {
            ticker: report.ticker.to_string(),
            instrument_name: report.instrument_name.clone(),
            headlines: report.headlines.value.clone(),
            emotion: report.emotion.to_string(),
            volume_spike: report.market.value.volume_spike.to_string(),
            rsi: format!("{:.2}", report.market.value.rsi),
            prediction: report.prediction.direction.to_string(),
            score: format!("{:.2}", report.prediction.score),
            confidence: report.prediction.confidence.stars().to_string(),
            notices,
        }
    }
}
