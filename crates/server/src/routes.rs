use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use seolens_core::{Analyzer, CrawlOutcome, SeoLensError};
use serde::Deserialize;
use serde_json::Value;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub const NO_URL_PROVIDED: &str = "No URL provided";

/// Grace period on top of the outbound fetch timeout before the whole
/// request is abandoned.
const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 5;

const DASHBOARD: &str = include_str!("../static/index.html");

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer: Arc::new(analyzer) }
    }
}

/// Body of `POST /crawl`. `url` is kept loosely typed so a non-string value
/// still gets a JSON error outcome.
#[derive(Debug, Default, Deserialize)]
pub struct CrawlRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

/// Builds the router with CORS, compression, tracing and a request timeout.
pub fn app(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.analyzer.config().fetch.timeout + REQUEST_TIMEOUT_MARGIN_SECS);

    Router::new()
        .route("/", get(index))
        .route("/crawl", post(crawl))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(DASHBOARD)
}

async fn crawl(State(state): State<AppState>, Json(request): Json<CrawlRequest>) -> Json<CrawlOutcome> {
    let url = match &request.url {
        None | Some(Value::Null) => None,
        Some(Value::String(url)) => Some(url.trim()).filter(|url| !url.is_empty()),
        Some(other) => {
            tracing::debug!(url = %other, "crawl request with non-string url");
            let err = SeoLensError::InvalidUrl(format!("expected a string, got {other}"));
            return Json(CrawlOutcome::error(err));
        }
    };
    let Some(url) = url else {
        tracing::debug!("crawl request without url");
        return Json(CrawlOutcome::error(NO_URL_PROVIDED));
    };

    tracing::info!(url, "crawling");
    Json(state.analyzer.crawl(url).await)
}
