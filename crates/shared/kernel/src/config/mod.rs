mod deployment;

pub use deployment::{deployment_from_env, deployment_from_lookup};

use config::{Config, Environment, File, Map};
use rig_domain::config::ApiConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `RIG__SERVER__PORT`.
pub const ENV_PREFIX: &str = "RIG";

/// Custom error type for config loading.
#[rig_derive::rig_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from an optional file plus environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path` (defaults to `server`, any extension understood by `config`,
///    e.g. `server.toml`). The file is optional; missing keys fall back to `T`'s serde defaults.
/// 2. **Environment Overrides**: variables prefixed with `RIG__`, nested with `__`
///    (`RIG__CATALOG__TIMEOUT_SECS=10` maps to `catalog.timeout_secs`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but cannot be parsed, or if the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use rig_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_config(path, None)
}

/// Same as [`load_config`], with the environment layer read from `vars` instead of the
/// process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    build_config(path, Some(vars.into_iter().collect()))
}

fn build_config<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(vars),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Loads [`ApiConfig`] and overlays the hosting platform's plain environment variables.
///
/// # Errors
/// See [`load_config`].
pub fn load_api_config(path: Option<impl AsRef<Path>>) -> Result<ApiConfig, ConfigError> {
    let mut cfg: ApiConfig = load_config(path)?;
    cfg.apply_deployment(&deployment_from_env());

    info!(
        base_url = %cfg.catalog.base_url,
        port = cfg.server.port,
        share = cfg.server.share,
        "Configuration resolved"
    );
    Ok(cfg)
}
