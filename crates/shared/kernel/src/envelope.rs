//! The JSON envelope shared by every API response.

use serde::{Deserialize, Serialize};

/// `{success, message?, data?, errors?}`. Absent members are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiEnvelope<T> {
    /// A successful envelope carrying `data`.
    pub const fn data(data: T) -> Self {
        Self { success: true, message: None, data: Some(data), errors: None }
    }

    /// A failed envelope with a message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), data: None, errors: None }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl ApiEnvelope<()> {
    /// A successful envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, errors: None }
    }
}

#[cfg(feature = "server")]
impl<T: Serialize> axum::response::IntoResponse for ApiEnvelope<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_members_are_omitted() {
        let value = serde_json::to_value(ApiEnvelope::<()>::message("Command tracked")).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "Command tracked" }));
    }

    #[test]
    fn failures_carry_errors() {
        let envelope = ApiEnvelope::<()>::failure("Validation error")
            .with_errors(vec!["\"name\" is required".to_owned()]);
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "message": "Validation error", "errors": ["\"name\" is required"] })
        );
    }

    #[test]
    fn decodes_envelopes_without_optional_members() {
        let envelope: ApiEnvelope<u32> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, None);
    }

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    struct Receipt {
        id: String,
    }

    #[test]
    fn decodes_payloads_without_a_default() {
        let ok: ApiEnvelope<Receipt> =
            serde_json::from_value(json!({ "success": true, "data": { "id": "abc" } })).unwrap();
        assert_eq!(ok.data, Some(Receipt { id: "abc".to_owned() }));

        let failed: ApiEnvelope<Receipt> = serde_json::from_value(
            json!({ "success": false, "message": "Validation error", "errors": ["bad"] }),
        )
        .unwrap();
        assert_eq!(failed.data, None);
        assert_eq!(failed.errors, Some(vec!["bad".to_owned()]));
    }
}
