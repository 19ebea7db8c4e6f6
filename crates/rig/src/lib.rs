//! Facade crate for Rig Builder features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `rig` with the `server` feature for the HTTP surface.
//! - Call [`init`] to register feature slices, or [`init_with_source`] to serve a fixed catalog.

pub use rig_domain as domain;
use rig_domain::config::ApiConfig;
use rig_domain::registry::InitializedSlice;
use std::sync::Arc;
pub use rig_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use rig_catalog::server::{api_router as catalog_api_router, page_router};
        pub use rig_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use rig_catalog as catalog;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all features against the configured parts API.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog
    slices.push(features::catalog::init(config)?);

    Ok(slices)
}

/// Initialize all features with the catalog served from `source`.
#[must_use]
pub fn init_with_source(
    config: &ApiConfig,
    source: Arc<dyn features::catalog::PartSource>,
) -> Vec<InitializedSlice> {
    vec![features::catalog::init_with_source(config, source)]
}
