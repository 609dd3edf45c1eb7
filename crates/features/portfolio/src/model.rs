use folio_derive::api_model;
use serde_json::Value;

/// A stored portfolio section as returned after a write.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct SectionView {
    /// Section kind, e.g. `about`
    pub kind: String,
    /// Opaque section payload
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub content: Value,
    /// Write counter, 1 after the first write
    pub version: i64,
    /// RFC 3339 timestamp of the last write
    pub updated_at: String,
}

/// Body of `PUT /api/portfolio/{section}`.
#[api_model(deny_unknown_fields = false)]
pub struct UpdateSectionRequest {
    /// New payload; `null` or absent is rejected
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub content: Option<Value>,
}
