use crate::Catalog;
use crate::format::MAX_DISPLAYED_PARTS;
use crate::service::{CatalogService, SearchOutcome, TotalOutcome};
use axum::Json;
use axum::extract::{Query, State};
use rig_derive::{api_handler, api_model};
use rig_domain::constants::{ALL_CATEGORIES, CATALOG_TAG};
use rig_domain::part::Part;
use rig_kernel::server::{ApiState, ApiStateError};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of a part name or description
    #[serde(default)]
    pub query: String,
    /// Category label; `All` disables the filter
    #[serde(default = "all_categories")]
    pub category: String,
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_owned()
}

/// Query string of `GET /api/total`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TotalParams {
    /// Comma-separated exact part names
    #[serde(default)]
    pub selected: String,
}

#[api_model]
/// A catalog part
pub struct PartView {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: f64,
    pub description: Option<String>,
    pub second_hand: bool,
    pub image_url: Option<String>,
}

impl From<&Part> for PartView {
    fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            category: part.category.clone(),
            price: part.price,
            stock: part.stock,
            description: part.description().map(ToOwned::to_owned),
            second_hand: part.second_hand,
            image_url: part.image_url.clone(),
        }
    }
}

#[api_model]
/// Search result with its rendered text
pub struct SearchResponse {
    /// Markdown shown by the form page
    pub text: String,
    /// Number of matching parts, including those not listed
    pub total: usize,
    /// First matching parts, at most ten
    pub parts: Vec<PartView>,
}

impl From<&SearchOutcome> for SearchResponse {
    fn from(outcome: &SearchOutcome) -> Self {
        let parts = outcome.parts();
        Self {
            text: outcome.to_string(),
            total: parts.len(),
            parts: parts.iter().take(MAX_DISPLAYED_PARTS).map(PartView::from).collect(),
        }
    }
}

#[api_model]
/// Price total of a selection
pub struct TotalResponse {
    /// Markdown shown by the form page
    pub text: String,
    /// Sum of the matched prices, absent when nothing matched
    pub total_price: Option<f64>,
    /// Matched parts in catalog order
    pub parts: Vec<PartView>,
}

impl From<&TotalOutcome> for TotalResponse {
    fn from(outcome: &TotalOutcome) -> Self {
        let (total_price, parts) = match outcome {
            TotalOutcome::Selected { parts, total } => {
                (Some(*total), parts.iter().map(PartView::from).collect())
            },
            TotalOutcome::MissingInput | TotalOutcome::NoMatch => (None, Vec::new()),
        };
        Self { text: outcome.to_string(), total_price, parts }
    }
}

#[api_handler(
    get,
    path = "/api/categories",
    responses((status = OK, description = "Category selector options, `All` first", body = [String])),
    tag = CATALOG_TAG,
)]
pub(super) async fn categories_handler() -> Json<Vec<&'static str>> {
    Json(CatalogService::categories())
}

#[api_handler(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = OK, description = "Search result", body = SearchResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Catalog slice is not registered"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn search_handler(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiStateError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let outcome = catalog.service.search_parts(&params.query, &params.category).await;

    Ok(Json(SearchResponse::from(&outcome)))
}

#[api_handler(
    get,
    path = "/api/total",
    params(TotalParams),
    responses(
        (status = OK, description = "Selected parts and their total price", body = TotalResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Catalog slice is not registered"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn total_handler(
    State(state): State<ApiState>,
    Query(params): Query<TotalParams>,
) -> Result<Json<TotalResponse>, ApiStateError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let outcome = catalog.service.total_parts(&params.selected).await;

    Ok(Json(TotalResponse::from(&outcome)))
}
