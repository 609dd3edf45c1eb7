use crate::Contact;
use crate::model::{ContactMessage, ContactPage, ContactRequest, ListQuery, SubmissionReceipt, UpdateStatusRequest};
use crate::store::Origin;
use crate::validation::validate_submission;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use folio_derive::api_handler;
use folio_domain::constants::CONTACT_TAG;
use folio_domain::section::ContactStatus;
use folio_kernel::envelope::ApiEnvelope;
use folio_kernel::server::{ApiError, ApiJson, ApiResult, ApiState, ClientMeta};
use serde_json::{Map, Value};
use tracing::{info, instrument};

const INVALID_STATUS: &str = "Invalid status. Must be unread, read, or replied";

fn parse_status(raw: Option<&str>) -> ApiResult<ContactStatus> {
    raw.and_then(|value| value.parse().ok()).ok_or_else(|| ApiError::bad_request(INVALID_STATUS))
}

fn positive(name: &str, raw: Option<&str>, default: u32) -> ApiResult<u32> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| ApiError::bad_request(format!("\"{name}\" must be a positive integer")))
}

#[api_handler(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = CREATED, description = "Submission stored, receipt in the response envelope", body = SubmissionReceipt),
        (status = BAD_REQUEST, description = "One message per invalid field in `errors`"),
    ),
    tag = CONTACT_TAG,
)]
#[instrument(skip_all)]
pub async fn submit_contact(
    State(state): State<ApiState>,
    meta: ClientMeta,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> ApiResult<(StatusCode, ApiEnvelope<SubmissionReceipt>)> {
    let submission = validate_submission(&body).map_err(ApiError::invalid_fields)?;

    let contact = state.try_get_slice::<Contact>()?;
    let origin = Origin { ip_address: meta.ip_address, user_agent: meta.user_agent };
    let receipt = contact.store.create(submission, origin).await?;
    info!(id = %receipt.id, "Contact submission stored");

    Ok((
        StatusCode::CREATED,
        ApiEnvelope::data(receipt).with_message("Contact message submitted successfully!"),
    ))
}

#[api_handler(
    get,
    path = "/api/contact",
    params(
        ("page" = Option<u32>, Query, description = "1-indexed page, defaults to 1"),
        ("limit" = Option<u32>, Query, description = "Page size, defaults to 10, capped at the configured maximum"),
        ("status" = Option<String>, Query, description = "Only `unread`, `read` or `replied` submissions"),
    ),
    responses(
        (status = OK, description = "Page of submissions, newest first, in the response envelope", body = ContactPage),
        (status = BAD_REQUEST, description = "Malformed page, limit or status"),
    ),
    tag = CONTACT_TAG,
)]
#[instrument(skip(state))]
pub async fn list_messages(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<ApiEnvelope<ContactPage>> {
    let contact = state.try_get_slice::<Contact>()?;

    let page = positive("page", query.page.as_deref(), 1)?;
    let limit = positive("limit", query.limit.as_deref(), contact.limits.default_page_size)?
        .min(contact.limits.max_page_size);
    let status = query.status.as_deref().map(|raw| parse_status(Some(raw))).transpose()?;

    let (messages, total) = contact.store.list(page, limit, status).await?;

    Ok(ApiEnvelope::data(ContactPage {
        messages,
        total_pages: total.div_ceil(u64::from(limit)),
        current_page: page,
        total,
    }))
}

#[api_handler(
    patch,
    path = "/api/contact/{id}",
    params(("id" = String, Path, description = "Submission id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = OK, description = "Updated submission in the response envelope", body = ContactMessage),
        (status = BAD_REQUEST, description = "Status outside unread, read, replied"),
        (status = NOT_FOUND, description = "Unknown submission id"),
    ),
    tag = CONTACT_TAG,
)]
#[instrument(skip(state, body))]
pub async fn update_status(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> ApiResult<ApiEnvelope<ContactMessage>> {
    let status = parse_status(body.status.as_deref())?;

    let contact = state.try_get_slice::<Contact>()?;
    let updated = contact
        .store
        .update_status(&id, status)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact message not found"))?;

    Ok(ApiEnvelope::data(updated).with_message("Message status updated successfully"))
}
