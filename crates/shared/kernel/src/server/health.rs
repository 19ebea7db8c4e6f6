use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rig_derive::{api_handler, api_model};
use rig_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;

static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_model]
/// Liveness report of the server process
pub struct HealthResponse {
    /// `up` while the process serves requests
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since the first health probe
    pub uptime: u64,
}

impl HealthResponse {
    fn now() -> Self {
        Self {
            status: "up".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            uptime: STARTED_AT.elapsed().as_secs(),
        }
    }
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Server is alive", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> Response {
    let mut response = Json(HealthResponse::now()).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    response
}
