//! # Rig Builder Server
//!
//! Serves the part search form, its JSON counterpart and the `OpenAPI` docs on `Axum`.
//! Parts are fetched on demand from the remote parts API configured in `catalog.base_url`.
//!
//! ## Example
//! ```no_run
//! use rig_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(7860)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use rig::domain::config::{ApiConfig, LoggingConfig};
use rig::features::catalog::PartSource;
use rig::kernel::server::ApiState;
use rig_logger::{LevelFilter, Logger};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// Time in-flight requests get to finish after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    source: Option<Arc<dyn PartSource>>,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Serves the catalog from `source` instead of the configured parts API.
    pub fn part_source(mut self, source: impl PartSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("SSL key not found at: {}", ssl.key.display());
            }
        }
        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates the TLS certificate and key paths, if TLS is configured
    /// 2. Initializes the feature slices (catalog over HTTP or the injected source)
    /// 3. Constructs application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * SSL certificate/key files are missing
    /// * The parts API client cannot be constructed
    pub fn build(self) -> Result<Server> {
        // 1. Validate SSL Configuration
        self.validate_ssl_config()?;

        info!(
            address = %self.cfg.server.bind_address(),
            parts_api = %self.cfg.catalog.base_url,
            "Initializing server"
        );

        // 2. Orchestrate Feature Slices
        let slices = match self.source {
            Some(source) => rig::init_with_source(&self.cfg, source),
            None => rig::init(&self.cfg).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?,
        };

        // 3. Construct State
        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;
        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router, state applied.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Serves until Ctrl+C or SIGTERM, then drains connections for up to
    /// [`SHUTDOWN_GRACE`].
    ///
    /// Binds to every interface when `server.share` is set, otherwise to `server.address`.
    ///
    /// # Errors
    /// Returns an error if binding fails or the TLS certificate/key cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let server_cfg = self.state.config.server.clone();
        let address = server_cfg.bind_address();
        let app = self.router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        match &server_cfg.ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Failed to load SSL/TLS certificates")?;

                info!(%address, share = server_cfg.share, "Listening on https://{address}");
                axum_server::bind_rustls(address, tls)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTPS server failed")?;
            },
            None => {
                info!(%address, share = server_cfg.share, "Listening on http://{address}");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTP server failed")?;
            },
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Installs the global logger described by the `[logging]` section.
///
/// An unknown `level` falls back to `info`.
///
/// # Errors
/// Returns an error if the filter directives are invalid, the log directory cannot be
/// created, or a global subscriber is already installed.
pub fn init_logger(cfg: &LoggingConfig) -> Result<Logger> {
    let level = cfg.level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter.as_str());
    }
    if let Some(dir) = &cfg.dir {
        builder = builder.file(dir.as_path()).json(cfg.json);
    }

    builder.init().context("Failed to initialize logging")
}

async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match wait_for_signal().await {
        Ok(name) => {
            info!(signal = name, "Shutting down gracefully");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        },
        Err(e) => error!(error = %e, "Shutdown signal listener failed"),
    }
}

/// Resolves with the name of the first termination signal received.
#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("Failed to install SIGTERM handler")?;

    tokio::select! {
        res = signal::ctrl_c() => res.context("Failed to listen for Ctrl+C").map(|()| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str> {
    signal::ctrl_c().await.context("Failed to listen for Ctrl+C")?;
    Ok("Ctrl+C")
}
