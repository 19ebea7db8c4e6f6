#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace.
//!
//! * [`rig_error`] turns an enum into a `thiserror` error with `.context(...)` support.
//! * [`rig_slice`] wraps feature state into a cheaply clonable, registrable slice.
//! * [`api_model`] / [`api_handler`] keep JSON DTOs and handlers consistent with `OpenAPI` docs.
//! * [`main`] bootstraps the Tokio runtime through `rig_runtime`.
//!
//! Doc examples are `ignore`d because they reference the consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime with a named profile.
///
/// Turns `async fn main() -> Result<..>` into a synchronous `main` that builds the runtime
/// via `rig_runtime::build_runtime_with_config` and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Server preset (larger stacks, longer keep-alive).
/// * `memory_efficient` - Half the workers, smaller stacks.
/// * `default` or nothing - Auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[rig_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for JSON data transfer objects.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives `utoipa::ToSchema`
/// when the consuming crate's `server` feature is on, and applies the serde policy:
/// `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct SearchResponse {
///     pub text: String,
///     pub total: usize,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro that documents an Axum handler with `utoipa::path`.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`, `params(...)`,
/// `responses(...)`, `tag = "..."`). The `utoipa` attribute is only emitted under the
/// consuming crate's `server` feature.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant carrying a source.
/// * `From<Source>` for every variant with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` / `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also declare
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[rig_derive::rig_error]
/// pub enum CatalogError {
///     #[error("Decode error{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn rig_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is an `Arc` wrapper that derefs to it
/// and implements `rig_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[rig_derive::rig_slice]
/// pub struct Catalog {
///     pub service: CatalogService,
/// }
///
/// let slice = Catalog::new(CatalogInner { service });
/// ```
#[proc_macro_attribute]
pub fn rig_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
