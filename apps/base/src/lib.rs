//! # Base reference app
//!
//! The starting point for any serverless app: one JSON route and a catch-all HTML page,
//! both mounted under [`BASE_URL`].
//!
//! ## Example
//! ```no_run
//! use slref_kernel::domain::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     slref_kernel::server::launch(slref_base::router(), &AppConfig::default()).await
//! }
//! ```

use axum::Router;
use axum::response::Html;
use axum::routing::any;
use serde::Serialize;
use slref_kernel::server::{PrettyJson, not_found};
use tower_http::trace::TraceLayer;

pub const BASE_URL: &str = "/base";

const PAGE: &str = r"
<html>
  <body>
    <h1>The Reference App!</h1>
    <p>A simple AWS Lambda + Serverless framework application.</p>
  </body>
</html>
  ";

#[derive(Debug, Serialize)]
struct Greeting {
    msg: &'static str,
}

/// Builds the app router. Every route answers any HTTP method.
pub fn router() -> Router {
    Router::new()
        .route("/favicon.ico", any(not_found))
        .route(&format!("{BASE_URL}/hello.json"), any(hello))
        .route(&format!("{BASE_URL}/"), any(page))
        .route(&format!("{BASE_URL}/{{*path}}"), any(page))
        .layer(TraceLayer::new_for_http())
}

// Ex: http://127.0.0.1:3000/base/hello.json
async fn hello() -> PrettyJson<Greeting> {
    PrettyJson(Greeting { msg: "Simple reference serverless app!" })
}

async fn page() -> Html<&'static str> {
    Html(PAGE)
}
