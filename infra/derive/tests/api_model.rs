use folio_derive::api_model;
use serde_json::json;

#[api_model]
pub struct SubmissionSummary {
    pub submission_id: String,
    pub submitted_at: String,
}

#[api_model(deny_unknown_fields = false)]
pub struct LenientRequest {
    pub status: Option<String>,
}

#[api_model(rename_all = "snake_case")]
pub struct SnakeCase {
    pub total_pages: u32,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Unread,
    Replied,
}

#[test]
fn fields_are_camel_cased_by_default() {
    let value = serde_json::to_value(SubmissionSummary {
        submission_id: "abc".to_owned(),
        submitted_at: "now".to_owned(),
    })
    .unwrap();

    assert_eq!(value, json!({ "submissionId": "abc", "submittedAt": "now" }));
}

#[test]
fn unknown_fields_are_rejected_by_default() {
    let err = serde_json::from_value::<SubmissionSummary>(
        json!({ "submissionId": "a", "submittedAt": "b", "extra": 1 }),
    )
    .unwrap_err();

    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn unknown_fields_can_be_allowed() {
    let parsed =
        serde_json::from_value::<LenientRequest>(json!({ "status": "read", "extra": 1 })).unwrap();
    assert_eq!(parsed.status.as_deref(), Some("read"));
}

#[test]
fn rename_policy_can_be_overridden() {
    let value = serde_json::to_value(SnakeCase { total_pages: 2 }).unwrap();
    assert_eq!(value, json!({ "total_pages": 2 }));
}

#[test]
fn enums_use_the_same_rename_policy() {
    assert_eq!(serde_json::to_value(Mood::Unread).unwrap(), json!("unread"));
    assert_eq!(serde_json::from_value::<Mood>(json!("replied")).unwrap(), Mood::Replied);
}
