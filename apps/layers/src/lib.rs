//! # Layers reference app
//!
//! Demonstrates AWS Lambda layers: `<base>/layers.txt` reports which of the two optional
//! layers are mounted under `LAYERS_DIR`, and every other path under `<base>` links to it.

pub mod error;
pub mod probe;

pub use crate::error::{LayerError, LayerErrorExt};
pub use crate::probe::Layers;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::any;
use slref_kernel::domain::config::AppConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const DEFAULT_BASE_URL: &str = "/layers";

#[derive(Debug)]
struct LayersApp {
    layers: Layers,
    page: String,
}

/// Builds the app router for the prefix and layer directory in `cfg`.
pub fn router(cfg: &AppConfig) -> Router {
    let base = cfg.base_url_or(DEFAULT_BASE_URL);
    let state = Arc::new(LayersApp {
        layers: Layers::new(&cfg.layers_dir),
        page: render_page(&cfg.public_base_url(DEFAULT_BASE_URL)),
    });

    Router::new()
        .route(&format!("{base}/layers.txt"), any(layers_txt))
        .route(&format!("{base}/"), any(page))
        .route(&format!("{base}/{{*path}}"), any(page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn layers_txt(State(app): State<Arc<LayersApp>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], app.layers.report().await)
}

async fn page(State(app): State<Arc<LayersApp>>) -> Html<String> {
    Html(app.page.clone())
}

fn render_page(public_base: &str) -> String {
    format!(
        r#"
<html>
  <body>
    <h1>The Reference App (Layers Edition)!</h1>
    <p>A simple AWS Lambda + Serverless framework application.</p>
    <p>
      See layers response:
      <a href="{public_base}/layers.txt"><code>{public_base}/layers.txt</code></a>
    </p>
  </body>
</html>
  "#
    )
}
