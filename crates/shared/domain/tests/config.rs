use rig_domain::config::{ApiConfig, CatalogConfig, Deployment, ServerConfig};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 7860);
    assert!(!server.share);
    assert!(server.ssl.is_none());
    assert_eq!(server.bind_address(), "127.0.0.1:7860".parse::<SocketAddr>().unwrap());

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.base_url, "http://localhost:5000/api");
    assert_eq!(catalog.timeout(), Duration::from_secs(5));
}

#[test]
fn api_config_deserializes_partial_input() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "catalog": { "base_url": "https://parts.example.com/api" },
        "logging": { "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.base_url, "https://parts.example.com/api");
    assert_eq!(cfg.catalog.timeout_secs, 5, "missing keys keep their defaults");
    assert_eq!(cfg.ui.title, "PC Builder");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn share_binds_every_interface() {
    let mut cfg = ApiConfig::default();
    cfg.server.share = true;
    assert_eq!(cfg.server.bind_address(), "0.0.0.0:7860".parse::<SocketAddr>().unwrap());
}

#[test]
fn external_url_wins_over_backend_port() {
    let deployment = Deployment {
        external_url: Some("https://pc-builder.onrender.com/".to_owned()),
        backend_port: Some(8000),
        ..Deployment::default()
    };
    assert_eq!(
        deployment.api_base_url().as_deref(),
        Some("https://pc-builder.onrender.com/api")
    );
}

#[test]
fn backend_port_builds_local_url() {
    let deployment = Deployment { backend_port: Some(8000), ..Deployment::default() };
    assert_eq!(deployment.api_base_url().as_deref(), Some("http://localhost:8000/api"));

    let blank = Deployment { external_url: Some("  ".to_owned()), ..Deployment::default() };
    assert_eq!(blank.api_base_url(), None);
}

#[test]
fn apply_deployment_only_touches_given_values() {
    let mut cfg = ApiConfig::default();
    cfg.catalog.base_url = "http://catalog.internal/api".to_owned();
    let untouched = cfg.clone();

    cfg.apply_deployment(&Deployment::default());
    assert_eq!(cfg.catalog.base_url, untouched.catalog.base_url);
    assert_eq!(cfg.server.port, untouched.server.port);

    cfg.apply_deployment(&Deployment {
        external_url: Some("https://shop.example.com".to_owned()),
        ui_port: Some(9000),
        share: Some(true),
        ..Deployment::default()
    });
    assert_eq!(cfg.catalog.base_url, "https://shop.example.com/api");
    assert_eq!(cfg.server.port, 9000);
    assert!(cfg.server.share);
    assert_eq!(untouched.server.port, 7860, "clones are copy-on-write");
}
