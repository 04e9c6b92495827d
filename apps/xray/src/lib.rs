//! # X-Ray reference app
//!
//! Every request is wrapped in a `segment` span named after the service
//! (`<service_name>-<stage>`) and tagged with the incoming `X-Amzn-Trace-Id`, so the
//! request/response events emitted by the trace layer carry the AWS trace context.

use axum::Router;
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::any;
use slref_kernel::domain::config::{AppConfig, Stage};
use slref_logger::LevelFilter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{Span, info_span};

pub const DEFAULT_BASE_URL: &str = "/xray";
/// Header API Gateway and the Lambda runtime use to propagate the trace context.
pub const TRACE_HEADER: &str = "x-amzn-trace-id";

const PAGE: &str = r"
<html>
  <body>
    <h1>The Reference App (Xray Version)!</h1>
    <p>An AWS Lambda + Serverless framework application with Xray tracing.</p>
    <p>Check Xray dashboard for samples!</p>
  </body>
</html>
  ";

/// Builds the app router for the prefix and service name in `cfg`.
pub fn router(cfg: &AppConfig) -> Router {
    let base = cfg.base_url_or(DEFAULT_BASE_URL);
    let service: Arc<str> = cfg.service().into();

    Router::new()
        .route(&format!("{base}/"), any(page))
        .route(&format!("{base}/{{*path}}"), any(page))
        .layer(TraceLayer::new_for_http().make_span_with(move |req: &Request| segment(&service, req)))
}

/// Segments are only interesting on a developer console; deployed stages ship them to X-Ray.
#[must_use]
pub const fn log_level(stage: &Stage) -> LevelFilter {
    if stage.is_local() { LevelFilter::DEBUG } else { LevelFilter::INFO }
}

/// Trace id from the incoming request, or `-` when the caller did not send one.
#[must_use]
pub fn trace_id(headers: &HeaderMap) -> &str {
    headers.get(TRACE_HEADER).and_then(|value| value.to_str().ok()).unwrap_or("-")
}

fn segment(service: &str, req: &Request) -> Span {
    info_span!(
        "segment",
        service = %service,
        method = %req.method(),
        uri = %req.uri(),
        trace_id = %trace_id(req.headers()),
    )
}

async fn page() -> Html<&'static str> {
    Html(PAGE)
}
