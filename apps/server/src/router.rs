use axum::Router;
use rig::kernel::server::ApiState;
use rig::server::router::{catalog_api_router, page_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rig Builder", description = "PC part search and price totals"),
    tags(
        (name = "System", description = "Health and diagnostics"),
        (name = "Catalog", description = "Part search and price totals"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(catalog_api_router())
        .split_for_parts();

    // Scalar UI at `/api`, next to the documented `/api/*` endpoints
    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(page_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(scalar_routes)
}
