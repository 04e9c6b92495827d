use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use slref_kernel::domain::config::AppConfig;
use slref_kernel::server::strip_stage;
use slref_layers::probe::{FIGLET_FALLBACK, REPEAT_FALLBACK};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
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

fn config(layers_dir: &Path, stage: Option<&str>, base_url: Option<&str>) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.layers_dir = layers_dir.to_path_buf();
    cfg.stage = stage.map(str::to_owned);
    cfg.base_url = base_url.map(str::to_owned);
    cfg
}

async fn get(cfg: &AppConfig, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = slref_layers::router(cfg).oneshot(request).await.expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, content_type, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn layers_txt_degrades_without_layers() {
    let dir = tempdir().expect("tempdir");
    let cfg = config(dir.path(), None, None);

    let (status, content_type, body) = get(&cfg, "/layers/layers.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, format!("{FIGLET_FALLBACK}\n\n{REPEAT_FALLBACK}"));
}

#[tokio::test]
async fn layers_txt_uses_mounted_layers() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("figlet")).expect("figlet dir");
    fs::create_dir_all(dir.path().join("repeat")).expect("repeat dir");
    fs::write(dir.path().join("figlet/hello-layers.txt"), "HELLO\nLAYERS\n").expect("banner");
    let cfg = config(dir.path(), None, None);

    let (_, _, body) = get(&cfg, "/layers/layers.txt").await;
    assert_eq!(body, "HELLO\nLAYERS\n\n-----");
}

#[tokio::test]
async fn page_links_to_local_report() {
    let dir = tempdir().expect("tempdir");
    let cfg = config(dir.path(), None, None);

    let (status, content_type, body) = get(&cfg, "/layers/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.contains("The Reference App (Layers Edition)!"));
    assert!(body.contains(r#"<a href="/layers/layers.txt">"#));
}

#[tokio::test]
async fn page_links_include_deployed_stage() {
    let dir = tempdir().expect("tempdir");
    let cfg = config(dir.path(), Some("dev"), None);

    let (_, _, body) = get(&cfg, "/layers/any/where").await;
    assert!(body.contains(r#"<a href="/dev/layers/layers.txt">"#));
}

#[tokio::test]
async fn base_url_is_configurable() {
    let dir = tempdir().expect("tempdir");
    let cfg = config(dir.path(), None, Some("/custom"));

    let (status, _, _) = get(&cfg, "/custom/layers.txt").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get(&cfg, "/layers/layers.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn staged_lambda_events_reach_layers_routes() {
    let dir = tempdir().expect("tempdir");
    let cfg = config(dir.path(), Some("dev"), None);

    let (status, body) = call_lambda(slref_layers::router(&cfg), "dev", "/layers/layers.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!("{FIGLET_FALLBACK}\n\n{REPEAT_FALLBACK}"));

    let (status, body) = call_lambda(slref_layers::router(&cfg), "dev", "/layers/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/dev/layers/layers.txt">"#));
}
