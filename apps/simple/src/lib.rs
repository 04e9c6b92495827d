//! # Simple reference app
//!
//! The smallest useful app: every path except `/favicon.ico` returns the same JSON greeting.

use axum::Router;
use axum::routing::any;
use serde::Serialize;
use slref_kernel::server::{PrettyJson, not_found};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
struct Greeting {
    hello: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/favicon.ico", any(not_found))
        .fallback(hello)
        .layer(TraceLayer::new_for_http())
}

// Ex: http://127.0.0.1:3000/
async fn hello() -> PrettyJson<Greeting> {
    PrettyJson(Greeting { hello: "static REST world!" })
}
