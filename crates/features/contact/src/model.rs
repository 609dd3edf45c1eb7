use folio_derive::api_model;

/// Body of `POST /api/contact`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct ContactRequest {
    /// 2 to 100 characters after trimming
    pub name: String,
    /// A valid address of at most 255 characters
    pub email: String,
    /// 10 to 1000 characters after trimming
    pub message: String,
}

/// Returned after a submission is stored.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: String,
    pub name: String,
    pub email: String,
    /// RFC 3339 creation timestamp
    pub submitted_at: String,
}

/// A stored contact submission.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// `unread`, `read` or `replied`
    pub status: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub submitted_at: String,
}

/// One page of submissions, newest first.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub messages: Vec<ContactMessage>,
    pub total_pages: u64,
    pub current_page: u32,
    pub total: u64,
}

/// Query of `GET /api/contact`; values are validated by the handler.
#[api_model(deny_unknown_fields = false)]
#[derive(Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
}

/// Body of `PATCH /api/contact/{id}`.
#[api_model(deny_unknown_fields = false)]
pub struct UpdateStatusRequest {
    /// `unread`, `read` or `replied`
    pub status: Option<String>,
}
