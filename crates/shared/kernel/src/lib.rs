//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading, deployment environment
//! resolution, and (with the `server` feature) the shared API state and system routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use rig_kernel::config::load_api_config;
//!
//! let cfg = load_api_config(Some("server"))?;
//! println!("parts API: {}", cfg.catalog.base_url);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use rig_domain as domain;
