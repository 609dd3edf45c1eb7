use crate::Analytics;
use crate::model::{CommandUsage, TrackCommandRequest, normalize_command};
use axum::extract::State;
use folio_derive::api_handler;
use folio_domain::constants::ANALYTICS_TAG;
use folio_kernel::envelope::ApiEnvelope;
use folio_kernel::server::{ApiError, ApiJson, ApiResult, ApiState};
use tracing::{debug, instrument};

#[api_handler(
    post,
    path = "/api/analytics/command",
    request_body = TrackCommandRequest,
    responses(
        (status = OK, description = "Command counted"),
        (status = BAD_REQUEST, description = "Empty command or longer than 100 characters"),
    ),
    tag = ANALYTICS_TAG,
)]
#[instrument(skip_all)]
pub async fn track_command(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<TrackCommandRequest>,
) -> ApiResult<ApiEnvelope<()>> {
    let command = normalize_command(body.command.as_deref().unwrap_or_default())
        .map_err(|rejection| ApiError::bad_request(rejection.message()))?;

    let analytics = state.try_get_slice::<Analytics>()?;
    let usage = analytics.store.track(&command).await?;
    debug!(command = %usage.command, count = usage.count, "Command tracked");

    Ok(ApiEnvelope::message("Command tracked"))
}

#[api_handler(
    get,
    path = "/api/analytics/commands",
    responses(
        (status = OK, description = "Counters by count descending, then command, in the response envelope", body = [CommandUsage]),
    ),
    tag = ANALYTICS_TAG,
)]
#[instrument(skip_all)]
pub async fn list_commands(
    State(state): State<ApiState>,
) -> ApiResult<ApiEnvelope<Vec<CommandUsage>>> {
    let analytics = state.try_get_slice::<Analytics>()?;
    Ok(ApiEnvelope::data(analytics.store.all().await?))
}
