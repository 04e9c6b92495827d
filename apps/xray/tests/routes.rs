use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use serde_json::json;
use slref_kernel::domain::config::{AppConfig, Stage};
use slref_kernel::server::strip_stage;
use slref_logger::LevelFilter;
use slref_xray::{TRACE_HEADER, log_level, trace_id};
use tower::ServiceExt;

/// Sends `path` through the router the way the Lambda adapter does, as a REST API event
/// from API Gateway `stage`.
async fn call_lambda(router: Router, stage: &str, path: &str) -> (StatusCode, String) {
    let event = json!({
        "resource": "/{proxy+}",
        "path": path,
        "httpMethod": "GET",
        "headers": { "Host": "abc123.execute-api.us-east-1.amazonaws.com" },
        "multiValueHeaders": { "Host": ["abc123.execute-api.us-east-1.amazonaws.com"] },
        "queryStringParameters": {},
        "multiValueQueryStringParameters": {},
        "pathParameters": { "proxy": path.trim_start_matches('/') },
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "abc123",
            "stage": stage,
            "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef",
            "identity": { "sourceIp": "127.0.0.1" },
            "resourcePath": "/{proxy+}",
            "httpMethod": "GET",
            "apiId": "abc123",
            "path": format!("/{stage}{path}")
        },
        "body": null,
        "isBase64Encoded": false
    });
    let request = lambda_http::request::from_str(&event.to_string()).expect("valid event");

    let response = router
        .map_request(strip_stage::<lambda_http::Body>)
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

async fn get(cfg: &AppConfig, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri)
        .header(TRACE_HEADER, "Root=1-5759e988-bd862e3fe1be46a994272793")
        .body(Body::empty())
        .expect("request");
    let response = slref_xray::router(cfg).oneshot(request).await.expect("router is infallible");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn catch_all_serves_html_page() {
    let cfg = AppConfig::default();
    for uri in ["/xray/", "/xray/hello", "/xray/a/b/c"] {
        let (status, body) = get(&cfg, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("The Reference App (Xray Version)!"));
    }
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let (status, _) = get(&AppConfig::default(), "/base/hello.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn base_url_is_configurable() {
    let mut cfg = AppConfig::default();
    cfg.base_url = Some("/traced".to_owned());

    let (status, _) = get(&cfg, "/traced/page").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn trace_id_defaults_to_dash() {
    let mut headers = HeaderMap::new();
    assert_eq!(trace_id(&headers), "-");

    headers.insert(TRACE_HEADER, HeaderValue::from_static("Root=1-abc"));
    assert_eq!(trace_id(&headers), "Root=1-abc");
}

#[test]
fn segments_are_logged_locally_only() {
    assert_eq!(log_level(&Stage::LocalDev), LevelFilter::DEBUG);
    assert_eq!(log_level(&Stage::Deployed("prod".to_owned())), LevelFilter::INFO);
}

#[tokio::test]
async fn staged_lambda_events_reach_xray_routes() {
    let mut cfg = AppConfig::default();
    cfg.stage = Some("dev".to_owned());

    let (status, body) = call_lambda(slref_xray::router(&cfg), "dev", "/xray/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Reference App (Xray Version)!"));
}
