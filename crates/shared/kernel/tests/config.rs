use rig_kernel::config::{load_config, load_config_with_env};
use rig_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent.toml"))).unwrap();
    assert_eq!(cfg.catalog.base_url, "http://localhost:5000/api");
    assert_eq!(cfg.server.port, 7860);
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8081
share = true

[catalog]
base_url = "https://parts.example.com/api"
timeout_secs = 2

[ui]
title = "Rig Builder"
"#,
    )
    .unwrap();

    let cfg: ApiConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.server.port, 8081);
    assert!(cfg.server.share);
    assert_eq!(cfg.catalog.base_url, "https://parts.example.com/api");
    assert_eq!(cfg.catalog.timeout_secs, 2);
    assert_eq!(cfg.ui.title, "Rig Builder");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let err = load_config::<ApiConfig>(Some(&path)).expect_err("broken toml must fail");
    assert!(err.to_string().contains("Failed to build config"), "unexpected error: {err}");
}

#[test]
fn prefixed_variables_override_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 8081\n\n[catalog]\ntimeout_secs = 2\n").unwrap();

    let vars = [
        ("RIG__SERVER__PORT", "9090"),
        ("RIG__CATALOG__BASE_URL", "http://parts.internal/api"),
        ("RIG__LOGGING__JSON", "true"),
        ("UNRELATED__SERVER__PORT", "1"),
    ]
    .map(|(k, v)| (k.to_owned(), v.to_owned()));

    let cfg: ApiConfig = load_config_with_env(Some(&path), vars).unwrap();
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.catalog.base_url, "http://parts.internal/api");
    assert_eq!(cfg.catalog.timeout_secs, 2, "file value survives");
    assert!(cfg.logging.json);
}
