use axum::Router;
use axum::http::HeaderValue;
use folio::kernel::server::ApiState;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub(crate) const DOCS_PATH: &str = "/api-docs";

#[derive(OpenApi)]
#[openapi(info(
    title = "Folio API",
    description = "Portfolio content, contact form and command analytics"
))]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(folio::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url(DOCS_PATH, api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}

/// Any origin when the list is empty; unparsable entries are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
