#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rig_kernel::server::router::system_router;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_up_without_caching() {
    let (router, api) = system_router::<()>().split_for_parts();
    assert!(api.paths.paths.contains_key("/health"), "health is documented");

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
