//! Plain-text report for the terminal

use super::{ReportView, APP_TITLE, INVALID_TICKER, NO_NEWS};
use crate::error::PredictorError;
use crate::pipeline::Pipeline;
use std::io;
use std::process::ExitCode;

/// Run one prediction for `raw` and write the outcome.
///
/// An invalid ticker, blank input included, writes the error to `err` and
/// returns a failure exit code. Any other pipeline error is returned.
pub async fn run_prediction<O: io::Write, E: io::Write>(
    pipeline: &Pipeline,
    raw: &str,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<ExitCode> {
    writeln!(err, "🔄 Fetching data and calculating prediction...")?;

    let report = match pipeline.run(raw).await {
        Ok(report) => report,
        Err(PredictorError::InvalidTicker(_)) => {
            writeln!(err, "{}", INVALID_TICKER)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render(&ReportView::from(&report)))?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Render the report as text, sections in fixed order
pub fn render(view: &ReportView) -> String {
    use std::fmt::Write;

    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n📈 {} - {} ({})\n", APP_TITLE, view.ticker, view.instrument_name);

    let _ = writeln!(out, "🔍 Recent News");
    if view.headlines.is_empty() {
        let _ = writeln!(out, "  - {}", NO_NEWS);
    } else {
        for headline in &view.headlines {
            let _ = writeln!(out, "  - {}", headline);
        }
    }

    let _ = writeln!(out, "\n🧠 Sentiment Analysis");
    let _ = writeln!(out, "  Emotion Score (E): {}", view.emotion);

    let _ = writeln!(out, "\n📊 Market Data");
    let _ = writeln!(out, "  Volume Spike: {}", view.volume_spike);
    let _ = writeln!(out, "  RSI: {}", view.rsi);

    let _ = writeln!(out, "\n📈 Prediction");
    let _ = writeln!(out, "  Prediction: {}", view.prediction);
    let _ = writeln!(out, "  Score: {}", view.score);
    let _ = writeln!(out, "  Confidence: {}", view.confidence);

    if !view.notices.is_empty() {
        let _ = writeln!(out);
        for notice in &view.notices {
            let _ = writeln!(out, "⚠ {}", notice);
        }
    }

    out
}
