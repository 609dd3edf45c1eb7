use crate::error::{AnalyticsError, AnalyticsErrorExt};
use crate::model::CommandUsage;
use chrono::{SecondsFormat, Utc};
use folio_database::Database;
use surrealdb::types::SurrealValue;
use tracing::instrument;

const USAGE_FIELDS: &str = "command, count, last_used_at";

#[derive(Debug, SurrealValue)]
struct UsageRow {
    command: String,
    count: i64,
    last_used_at: String,
}

impl From<UsageRow> for CommandUsage {
    fn from(row: UsageRow) -> Self {
        Self { command: row.command, count: row.count, last_used_at: row.last_used_at }
    }
}

/// Command counters on top of the `command_usage` table.
#[derive(Debug, Clone)]
pub struct UsageStore {
    db: Database,
}

impl UsageStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Increments the counter of an already normalized command, creating it at 1.
    #[instrument(skip(self))]
    pub async fn track(&self, command: &str) -> Result<CommandUsage, AnalyticsError> {
        let rows = self
            .db
            .query(format!(
                "UPSERT command_usage SET command = $command, count = (count ?? 0) + 1, \
                 last_used_at = $now WHERE command = $command RETURN {USAGE_FIELDS}"
            ))
            .bind(("command", command.to_owned()))
            .bind(("now", Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)))
            .await
            .context("Tracking command")?
            .take::<Vec<UsageRow>>(0)
            .context("Parsing command usage")?;

        rows.into_iter().next().map(CommandUsage::from).ok_or_else(|| AnalyticsError::Internal {
            message: format!("tracking '{command}' returned no record").into(),
            context: None,
        })
    }

    /// Every counter, most used first and then alphabetically.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<CommandUsage>, AnalyticsError> {
        let rows = self
            .db
            .query(format!(
                "SELECT {USAGE_FIELDS} FROM command_usage ORDER BY count DESC, command ASC"
            ))
            .await
            .context("Listing command usage")?
            .take::<Vec<UsageRow>>(0)
            .context("Parsing command usage")?;

        Ok(rows.into_iter().map(CommandUsage::from).collect())
    }
}
