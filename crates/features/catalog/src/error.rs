use std::borrow::Cow;

/// Failures of the catalog slice.
///
/// Fetch failures never reach UI callers: [`crate::PartSource::fetch`] logs them and
/// returns an empty catalog. They surface only through
/// [`crate::HttpPartSource::try_fetch`] and slice initialization.
#[rig_derive::rig_error]
pub enum CatalogError {
    /// Transport failure: connection refused, timeout, TLS, or client construction.
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The parts API answered with something other than `200 OK`.
    #[error("Unexpected status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The response body was not a parts envelope.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
