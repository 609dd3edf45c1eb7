use crate::error::{ContactError, ContactErrorExt};
use crate::model::{ContactMessage, SubmissionReceipt};
use crate::validation::ValidSubmission;
use chrono::{SecondsFormat, Utc};
use folio_database::Database;
use folio_domain::section::ContactStatus;
use folio_kernel::safe_nanoid;
use surrealdb::types::SurrealValue;
use tracing::instrument;

const SUBMISSION_FIELDS: &str =
    "sid, name, email, message, status, ip_address, user_agent, submitted_at";

#[derive(Debug, SurrealValue)]
struct SubmissionRow {
    sid: String,
    name: String,
    email: String,
    message: String,
    status: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    submitted_at: String,
}

impl From<SubmissionRow> for ContactMessage {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.sid,
            name: row.name,
            email: row.email,
            message: row.message,
            status: row.status,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            submitted_at: row.submitted_at,
        }
    }
}

/// Caller details captured with a submission.
#[derive(Debug, Clone, Default)]
pub struct Origin {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Submission persistence on top of the `submission` table.
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    db: Database,
}

impl SubmissionStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Stores a validated submission as `unread`.
    #[instrument(skip_all)]
    pub async fn create(
        &self,
        submission: ValidSubmission,
        origin: Origin,
    ) -> Result<SubmissionReceipt, ContactError> {
        let sid = safe_nanoid!();
        // Listing sorts on this string, so keep a fixed width and microsecond precision.
        let submitted_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        self.db
            .query(
                "CREATE submission SET sid = $sid, name = $name, email = $email, message = $message, \
                 status = $status, ip_address = $ip_address, user_agent = $user_agent, \
                 submitted_at = $submitted_at",
            )
            .bind(("sid", sid.clone()))
            .bind(("name", submission.name.clone()))
            .bind(("email", submission.email.clone()))
            .bind(("message", submission.message))
            .bind(("status", ContactStatus::Unread.as_str().to_owned()))
            .bind(("ip_address", origin.ip_address))
            .bind(("user_agent", origin.user_agent))
            .bind(("submitted_at", submitted_at.clone()))
            .await
            .context("Creating submission")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(SubmissionReceipt { id: sid, name: submission.name, email: submission.email, submitted_at })
    }

    /// Returns one page (1-indexed) of submissions, newest first, and the filtered total.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        status: Option<ContactStatus>,
    ) -> Result<(Vec<ContactMessage>, u64), ContactError> {
        let filter = if status.is_some() { "WHERE status = $status" } else { "" };
        let start = u64::from(page.saturating_sub(1)) * u64::from(limit);

        let mut response = self
            .db
            .query(format!(
                "SELECT {SUBMISSION_FIELDS} FROM submission {filter} \
                 ORDER BY submitted_at DESC, sid DESC LIMIT $limit START $start;
                 RETURN array::len(SELECT VALUE sid FROM submission {filter});"
            ))
            .bind(("status", status.map(|status| status.as_str().to_owned())))
            .bind(("limit", i64::from(limit)))
            .bind(("start", i64::try_from(start).unwrap_or(i64::MAX)))
            .await
            .context("Listing submissions")?;

        let rows = response.take::<Vec<SubmissionRow>>(0).context("Parsing submissions")?;
        let total = response.take::<Option<i64>>(1).context("Counting submissions")?.unwrap_or(0);

        Ok((rows.into_iter().map(ContactMessage::from).collect(), total.unsigned_abs()))
    }

    /// Sets the status of one submission; `None` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, ContactError> {
        let rows = self
            .db
            .query(format!(
                "UPDATE submission SET status = $status WHERE sid = $sid RETURN {SUBMISSION_FIELDS}"
            ))
            .bind(("status", status.as_str().to_owned()))
            .bind(("sid", id.to_owned()))
            .await
            .context("Updating submission status")?
            .take::<Vec<SubmissionRow>>(0)
            .context("Parsing updated submission")?;

        Ok(rows.into_iter().next().map(ContactMessage::from))
    }
}
