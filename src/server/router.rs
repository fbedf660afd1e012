//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs` for browsing the directory API.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/` - Map of the available routes
/// - `GET /api/banks/` - Paginated list of banks
/// - `GET /api/banks/{id}/` - Bank detail, optionally with `expand=branches`
/// - `GET /api/banks/{id}/branches/` - Paginated branches of a bank
/// - `GET /api/branches/` - Paginated list of branches
/// - `GET /api/branches/{ifsc}/` - Branch detail
/// - `GET /api/branches/search/` - Search by `code` (or `ifsc`) or `city`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, page_size: 10 };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bank Directory", description = "Bank and branch lookup API"), tags(
        (name = controller::overview::OVERVIEW_TAG, description = "API overview"),
        (name = controller::bank::BANK_TAG, description = "Bank lookup routes"),
        (name = controller::branch::BRANCH_TAG, description = "Branch lookup and search routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::overview::get_overview))
        .routes(routes!(controller::bank::list_banks))
        .routes(routes!(controller::bank::get_bank))
        .routes(routes!(controller::bank::list_bank_branches))
        .routes(routes!(controller::branch::list_branches))
        .routes(routes!(controller::branch::search_branches))
        .routes(routes!(controller::branch::get_branch))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
