//! # Catalog
//!
//! Feature slice that turns a remote parts API into two user operations:
//!
//! * **Search**: case-insensitive substring match over part names and descriptions,
//!   optionally narrowed to one category, rendered as at most ten Markdown blocks.
//! * **Total**: exact-name selection from a comma-separated list, with a grand total.
//!
//! Parts come from a [`PartSource`]. [`HttpPartSource`] talks to the backend and never
//! fails outward: transport, status and decoding problems are logged and yield an empty
//! catalog. [`StaticPartSource`] serves a fixed list.
//!
//! With the `server` feature the slice also exposes JSON endpoints ([`server::api_router`])
//! and a plain HTML form ([`server::page_router`]).

mod error;
pub mod format;
mod http;
mod service;
mod source;

#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::http::HttpPartSource;
pub use crate::service::{
    CatalogService, SearchOutcome, TotalOutcome, category_filter, filter_parts, parse_selection,
    select_parts,
};
pub use crate::source::{PartSource, StaticPartSource};

use rig_kernel::domain::config::ApiConfig;
use rig_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;
use tracing::info;

/// Catalog feature state
#[rig_derive::rig_slice]
pub struct Catalog {
    pub service: CatalogService,
    /// Heading of the form page.
    pub title: String,
}

/// Initialize the catalog against the parts API configured in `config.catalog`.
///
/// # Errors
/// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, CatalogError> {
    let source = HttpPartSource::new(&config.catalog)?;
    info!(url = source.parts_url(), timeout_secs = config.catalog.timeout_secs, "Catalog source ready");

    Ok(init_with_source(config, Arc::new(source)))
}

/// Initialize the catalog with an explicit, possibly shared, part source.
#[must_use]
pub fn init_with_source(config: &ApiConfig, source: Arc<dyn PartSource>) -> InitializedSlice {
    let inner =
        CatalogInner { service: CatalogService::from_shared(source), title: config.ui.title.clone() };

    info!("Catalog slice initialized");

    InitializedSlice::new(Catalog::new(inner))
}
