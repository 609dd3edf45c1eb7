use crate::handlers;
use folio_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes under `/api/contact`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::submit_contact, handlers::list_messages))
        .routes(routes!(handlers::update_status))
}
