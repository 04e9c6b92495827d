use axum::http::uri::{PathAndQuery, Uri};
use axum::http::Request;
use lambda_http::RequestExt;
use lambda_http::request::RequestContext;
use tracing::warn;

/// API Gateway's catch-all stage of HTTP APIs; it never shows up in request paths.
const DEFAULT_STAGE: &str = "$default";

/// Removes the API Gateway stage segment that `lambda_http` prepends to request paths.
///
/// Routers are mounted on the paths clients see behind the stage (`/base/hello.json`), while
/// `lambda_http` hands over `/<stage>/base/hello.json`. Requests without a gateway stage
/// (ALB, plain HTTP) pass through untouched.
pub fn strip_stage<B>(mut req: Request<B>) -> Request<B> {
    let Some(stage) = gateway_stage(&req) else {
        return req;
    };

    let Some(rest) = req.uri().path().strip_prefix(&format!("/{stage}")) else {
        return req;
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return req;
    }

    let path = if rest.is_empty() { "/" } else { rest };
    let path_and_query = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_owned(),
    };

    let mut parts = req.uri().clone().into_parts();
    let rewritten = PathAndQuery::try_from(path_and_query)
        .map_err(axum::http::Error::from)
        .and_then(|pq| {
            parts.path_and_query = Some(pq);
            Uri::from_parts(parts).map_err(axum::http::Error::from)
        });

    match rewritten {
        Ok(uri) => *req.uri_mut() = uri,
        Err(e) => warn!(%stage, error = %e, "Failed to strip API Gateway stage from path"),
    }
    req
}

fn gateway_stage<B>(req: &Request<B>) -> Option<String> {
    let stage = match req.request_context_ref()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.stage.as_deref(),
        RequestContext::ApiGatewayV2(ctx) => ctx.stage.as_deref(),
        RequestContext::WebSocket(ctx) => ctx.stage.as_deref(),
        _ => None,
    }?;

    (!stage.is_empty() && stage != DEFAULT_STAGE).then(|| stage.to_owned())
}
