/// Selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// `OpenAPI` tag for health and diagnostics endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for catalog search and price endpoints.
pub const CATALOG_TAG: &str = "Catalog";
