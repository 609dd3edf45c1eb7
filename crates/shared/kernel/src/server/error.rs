use crate::envelope::ApiEnvelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can return. Each maps to one HTTP status and a failure envelope.
#[folio_derive::folio_error]
pub enum ApiError {
    /// 400 with one message per violated field in `errors`.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation {
        message: Cow<'static, str>,
        errors: Vec<String>,
        context: Option<Cow<'static, str>>,
    },

    /// 404 with the message returned verbatim.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// 500; the message is logged and replaced with a generic one on the wire.
    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    /// A 400 carrying only a message.
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), errors: Vec::new(), context: None }
    }

    /// A 400 with the standard `Validation error` message and per-field errors.
    #[must_use]
    pub fn invalid_fields(errors: Vec<String>) -> Self {
        Self::Validation { message: "Validation error".into(), errors, context: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            Self::Validation { message, errors, .. } => {
                let envelope = ApiEnvelope::<()>::failure(message);
                if errors.is_empty() { envelope } else { envelope.with_errors(errors) }
            }
            Self::NotFound { message, .. } => ApiEnvelope::failure(message),
            Self::Internal { .. } => {
                error!(error = %self, "Request failed");
                ApiEnvelope::failure("Internal server error")
            }
        };

        (status, envelope).into_response()
    }
}
