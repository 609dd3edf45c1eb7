use crate::handlers;
use folio_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes under `/api/portfolio`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_sections))
        .routes(routes!(handlers::get_section, handlers::update_section))
}
