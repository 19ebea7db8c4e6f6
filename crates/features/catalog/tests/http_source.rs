use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use rig_catalog::{CatalogError, CatalogService, HttpPartSource, PartSource};
use rig_domain::config::CatalogConfig;
use serde::Deserialize;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;

const PARTS: &str = r#"{
    "data": [
        {"_id": "1", "name": "A", "category": "CPU", "price": 10.0, "stock": 4, "description": "Fast chip"},
        {"_id": "2", "name": "B", "category": "GPU", "price": 20.0, "stock": 2, "isSecondHand": true},
        {"_id": "3", "name": "C", "category": "GPU", "price": 1234.5}
    ]
}"#;

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

async fn parts(Query(query): Query<CategoryQuery>) -> impl IntoResponse {
    let body: serde_json::Value = serde_json::from_str(PARTS).unwrap();
    let data: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| query.category.as_deref().is_none_or(|c| p["category"] == c))
        .cloned()
        .collect();
    axum::Json(serde_json::json!({ "data": data }))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr) -> HttpPartSource {
    source_with_timeout(addr, 2)
}

fn source_with_timeout(addr: SocketAddr, timeout_secs: u64) -> HttpPartSource {
    let config = CatalogConfig { base_url: format!("http://{addr}/api"), timeout_secs };
    HttpPartSource::new(&config).unwrap()
}

/// Collects formatted log output so tests can assert on diagnostics.
#[derive(Debug, Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn fetches_all_parts() {
    let addr = serve(Router::new().route("/api/parts", get(parts))).await;

    let fetched = source(addr).fetch(None).await;
    assert_eq!(fetched.len(), 3);
    assert_eq!(fetched[0].description(), Some("Fast chip"));
    assert!(fetched[1].second_hand);
    assert!(fetched[2].stock.abs() < f64::EPSILON);
}

#[tokio::test]
async fn passes_category_as_query_parameter() {
    let addr = serve(Router::new().route("/api/parts", get(parts))).await;

    let fetched = source(addr).fetch(Some("GPU")).await;
    assert_eq!(fetched.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["B", "C"]);
}

#[tokio::test]
async fn missing_data_field_is_an_empty_catalog() {
    let addr = serve(Router::new().route("/api/parts", get(|| async { "{}" }))).await;

    assert!(source(addr).try_fetch(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_ok_status_is_reported() {
    let router = Router::new()
        .route("/api/parts", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, PARTS) }));
    let addr = serve(router).await;
    let source = source(addr);

    let err = source.try_fetch(None).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 503, .. }), "{err:?}");
    assert!(source.fetch(None).await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let addr = serve(Router::new().route("/api/parts", get(|| async { "not json" }))).await;

    let err = source(addr).try_fetch(None).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode { .. }), "{err:?}");
    assert!(err.to_string().contains("malformed JSON"));
}

#[tokio::test]
async fn unusual_records_do_not_discard_the_catalog() {
    let body = r#"{"data": [
        {"name": "A", "category": "CPU", "price": 10.0, "stock": 3},
        {"name": "B", "category": "GPU", "price": 20.0, "stock": 2.5, "isSecondHand": null},
        "not a part",
        {"name": "C", "category": "RAM", "price": "cheap"}
    ]}"#;
    let addr = serve(Router::new().route("/api/parts", get(move || async move { body }))).await;

    let fetched = source(addr).try_fetch(None).await.unwrap();
    assert_eq!(fetched.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["A", "B"]);
    assert!((fetched[1].stock - 2.5).abs() < f64::EPSILON);
    assert!(!fetched[1].second_hand);

    let text = CatalogService::new(source(addr)).search("", "All").await;
    assert!(text.contains("**B**\nCategory: GPU\nPrice: $20.00\nStock: 2.5 units\n"), "{text}");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let router = Router::new().route(
        "/api/parts",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(4)).await;
            PARTS
        }),
    );
    let addr = serve(router).await;
    let source = source_with_timeout(addr, 1);

    let started = Instant::now();
    let err = source.try_fetch(None).await.unwrap_err();
    assert!(matches!(err, CatalogError::Http { .. }), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(3), "took {:?}", started.elapsed());

    assert!(source.fetch(None).await.is_empty());
}

#[tokio::test]
async fn unreachable_backend_yields_empty_list_and_logs() {
    // Bind then drop to get a port nobody listens on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let source = source(addr);

    let err = source.try_fetch(None).await.unwrap_err();
    assert!(matches!(err, CatalogError::Http { .. }), "{err:?}");

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    assert!(source.fetch(Some("RAM")).await.is_empty());

    let logs = captured.text();
    assert!(logs.contains("Error fetching parts"), "{logs}");
    assert!(logs.contains("category=\"RAM\"") || logs.contains("category=RAM"), "{logs}");
}

#[tokio::test]
async fn service_over_http_renders_search_and_total() {
    let addr = serve(Router::new().route("/api/parts", get(parts))).await;
    let service = CatalogService::new(source(addr));

    let text = service.search("", "GPU").await;
    assert!(text.contains("**C**\nCategory: GPU\nPrice: $1,234.50\nStock: 0 units\n"));
    assert!(!text.contains("**A**"));

    let total = service.total("A, B").await;
    assert!(total.contains("**Total Price: $30.00**"), "{total}");
}

#[tokio::test]
async fn service_over_dead_backend_reports_no_parts() {
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let service = CatalogService::new(source(addr));

    assert_eq!(service.search("", "All").await, "No parts found.");
    assert_eq!(
        service.total("A").await,
        "No matching parts found. Please check the part names."
    );
}
