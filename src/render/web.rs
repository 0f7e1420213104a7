//! Single-page web form
//!
//! `GET /?ticker=AAPL` re-renders the page with a fresh prediction for each
//! new input. `GET /api/predict?ticker=AAPL` returns the same report as JSON.

use super::{ReportView, APP_CAPTION, APP_TITLE, INVALID_TICKER, NO_NEWS};
use crate::error::PredictorError;
use crate::pipeline::{Pipeline, Report};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared across handlers
pub struct AppState {
    pub pipeline: Pipeline,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictQuery {
    pub ticker: Option<String>,
}

impl PredictQuery {
    fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub caption: &'static str,
    pub no_news: &'static str,
    pub ticker: String,
    pub error: Option<String>,
    pub report: Option<ReportView>,
}

impl IndexPage {
    fn new(ticker: String) -> Self {
        Self {
            title: APP_TITLE,
            caption: APP_CAPTION,
            no_news: NO_NEWS,
            ticker,
            error: None,
            report: None,
        }
    }
}

/// Helper to render templates into axum responses
fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

/// GET / - form, plus results when a ticker is given
pub async fn index(State(state): State<Arc<AppState>>, Query(query): Query<PredictQuery>) -> Response {
    let Some(raw) = query.ticker() else {
        return render_template(&IndexPage::new(String::new()));
    };

    let mut page = IndexPage::new(raw.to_uppercase());
    match state.pipeline.run(raw).await {
        Ok(report) => page.report = Some(ReportView::from(&report)),
        Err(PredictorError::InvalidTicker(_)) => page.error = Some(INVALID_TICKER.to_string()),
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            page.error = Some(format!("Prediction failed: {}", e));
        }
    }

    render_template(&page)
}

/// GET /api/predict - report as JSON
pub async fn predict_json(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<Report>, (StatusCode, String)> {
    let Some(raw) = query.ticker() else {
        return Err((StatusCode::BAD_REQUEST, "missing ticker".to_string()));
    };

    match state.pipeline.run(raw).await {
        Ok(report) => Ok(Json(report)),
        Err(e @ PredictorError::InvalidTicker(_)) => {
            Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/predict", get(predict_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the page until the process is stopped
pub async fn serve(pipeline: Pipeline, bind: &str) -> anyhow::Result<()> {
    let state = Arc::new(AppState { pipeline });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Stock predictor page listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
