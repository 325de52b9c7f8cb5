use std::path::PathBuf;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn test_config() -> HostConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    HostConfig {
        bind_addr: "127.0.0.1".parse().unwrap(),
        port: 0,
        site_dir: root.join("site"),
        pkg_dir: root.join("gate").join("pkg"),
    }
}

async fn fetch(uri: &str) -> axum::response::Response {
    app(&test_config())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let res = fetch("/").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], LANDING_PAGE);
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(fetch("/healthz").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn landing_page_is_served() {
    let res = fetch(LANDING_PAGE).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("ECOPS"));
}

#[tokio::test]
async fn gated_page_loads_guard_and_starts_hidden() {
    let res = fetch("/ECOPS_webpage/members.html").await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("/pkg/gate.js"));
    assert!(html.contains("display: none"));
}

#[tokio::test]
async fn gated_page_redirects_to_landing_when_guard_fails_to_start() {
    let html = body_text(fetch("/ECOPS_webpage/members.html").await).await;
    let catch = html.find(".catch(").expect("guard start-up has no failure handler");
    assert!(html[catch..].contains(LANDING_PAGE));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    assert_eq!(fetch("/ECOPS_webpage/nope.html").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_bundle_is_not_found() {
    assert_eq!(fetch("/pkg/does-not-exist.wasm").await.status(), StatusCode::NOT_FOUND);
}
