use crate::Portfolio;
use crate::model::{SectionView, UpdateSectionRequest};
use axum::extract::{Path, State};
use folio_derive::api_handler;
use folio_domain::constants::PORTFOLIO_TAG;
use folio_domain::section::SectionKind;
use folio_kernel::envelope::ApiEnvelope;
use folio_kernel::server::{ApiError, ApiJson, ApiResult, ApiState};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::instrument;

fn not_found(section: &str) -> ApiError {
    ApiError::not_found(format!("Portfolio section '{section}' not found"))
}

#[api_handler(
    get,
    path = "/api/portfolio",
    responses((status = OK, description = "Every stored section keyed by kind, in the response envelope")),
    tag = PORTFOLIO_TAG,
)]
#[instrument(skip_all)]
pub async fn list_sections(
    State(state): State<ApiState>,
) -> ApiResult<ApiEnvelope<BTreeMap<String, Value>>> {
    let portfolio = state.try_get_slice::<Portfolio>()?;
    let sections = portfolio.store.all().await?;

    Ok(ApiEnvelope::data(
        sections.into_iter().map(|section| (section.kind, section.content)).collect(),
    ))
}

#[api_handler(
    get,
    path = "/api/portfolio/{section}",
    params(("section" = String, Path, description = "Section kind, e.g. `about`")),
    responses(
        (status = OK, description = "Section payload in the response envelope"),
        (status = NOT_FOUND, description = "No such section"),
    ),
    tag = PORTFOLIO_TAG,
)]
#[instrument(skip(state))]
pub async fn get_section(
    State(state): State<ApiState>,
    Path(section): Path<String>,
) -> ApiResult<ApiEnvelope<Value>> {
    let Ok(kind) = section.parse::<SectionKind>() else {
        return Err(not_found(&section));
    };

    let portfolio = state.try_get_slice::<Portfolio>()?;
    match portfolio.store.get(kind).await? {
        Some(stored) => Ok(ApiEnvelope::data(stored.content)),
        None => Err(not_found(&section)),
    }
}

#[api_handler(
    put,
    path = "/api/portfolio/{section}",
    params(("section" = String, Path, description = "Section kind, e.g. `about`")),
    request_body = UpdateSectionRequest,
    responses(
        (status = OK, description = "Section after the write, in the response envelope", body = SectionView),
        (status = BAD_REQUEST, description = "Unknown kind or missing content"),
    ),
    tag = PORTFOLIO_TAG,
)]
#[instrument(skip(state, body))]
pub async fn update_section(
    State(state): State<ApiState>,
    Path(section): Path<String>,
    ApiJson(body): ApiJson<UpdateSectionRequest>,
) -> ApiResult<ApiEnvelope<SectionView>> {
    let kind = section
        .parse::<SectionKind>()
        .map_err(|_| ApiError::bad_request(format!("Invalid portfolio section '{section}'")))?;
    let content = body.content.ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let portfolio = state.try_get_slice::<Portfolio>()?;
    let updated = portfolio.store.upsert(kind, &content).await?;

    Ok(ApiEnvelope::data(updated)
        .with_message(format!("Portfolio section '{section}' updated successfully")))
}
