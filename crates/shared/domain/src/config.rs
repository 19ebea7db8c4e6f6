use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level configuration of the server.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl ApiConfig {
    /// Overlays values supplied by the hosting environment.
    ///
    /// Only the settings present in `deployment` are touched.
    pub fn apply_deployment(&mut self, deployment: &Deployment) {
        if let Some(base_url) = deployment.api_base_url() {
            self.catalog.base_url = base_url;
        }
        if let Some(port) = deployment.ui_port {
            self.server.port = port;
        }
        if let Some(share) = deployment.share {
            self.server.share = share;
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Publish on every interface instead of `address`.
    pub share: bool,
    pub ssl: Option<SslConfig>,
}

impl ServerConfig {
    /// Socket the listener binds to, honouring `share`.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        let ip = if self.share { IpAddr::V4(Ipv4Addr::UNSPECIFIED) } else { self.address };
        SocketAddr::new(ip, self.port)
    }
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Remote parts API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL without trailing slash; parts live under `{base_url}/parts`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl CatalogConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Presentation settings of the form page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
}

/// Logging settings consumed by the binary when it installs the subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

/// Values provided by the hosting platform through plain environment variables.
///
/// Built by the kernel from the process environment; kept here as data so the
/// derivation rules stay testable without touching the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deployment {
    /// Public URL of the backend deployment (`RENDER_EXTERNAL_URL` / `RENDER_URL`).
    pub external_url: Option<String>,
    /// Port of a locally running backend (`PORT`).
    pub backend_port: Option<u16>,
    /// Listen port of this server (`UI_PORT`).
    pub ui_port: Option<u16>,
    /// Public-share toggle (`UI_SHARE`).
    pub share: Option<bool>,
}

impl Deployment {
    /// Base URL of the parts API derived from the deployment, if it says anything about it.
    ///
    /// An external URL wins over a local backend port.
    #[must_use]
    pub fn api_base_url(&self) -> Option<String> {
        if let Some(url) = self.external_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return Some(format!("{}/api", url.trim_end_matches('/')));
        }
        self.backend_port.map(|port| format!("http://localhost:{port}/api"))
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 7860, share: false, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000/api".to_owned(), timeout_secs: 5 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { title: "PC Builder".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, dir: None, json: false }
    }
}
