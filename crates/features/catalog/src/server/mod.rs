//! HTTP surface of the catalog: documented JSON endpoints and the HTML form.

mod handlers;
mod page;

pub use handlers::{PartView, SearchParams, SearchResponse, TotalParams, TotalResponse};
pub use page::{PageForm, escape_html};

use axum::Router;
use axum::routing::{get, post};
use rig_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `GET /api/categories`, `GET /api/search` and `GET /api/total`.
pub fn api_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::categories_handler))
        .routes(routes!(handlers::search_handler))
        .routes(routes!(handlers::total_handler))
}

/// The HTML form at `/` with its `/search` and `/total` submissions.
pub fn page_router() -> Router<ApiState> {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/search", get(page::search_query_handler).post(page::search_form_handler))
        .route("/total", post(page::total_form_handler))
}
