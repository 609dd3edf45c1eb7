use crate::error::{PortfolioError, PortfolioErrorExt};
use crate::model::SectionView;
use chrono::{SecondsFormat, Utc};
use folio_database::Database;
use folio_domain::section::SectionKind;
use serde_json::{Map, Value};
use surrealdb::types::SurrealValue;
use tracing::{debug, instrument};

const SECTION_FIELDS: &str = "kind, content, version, updated_at";

#[derive(Debug, SurrealValue)]
struct SectionRow {
    kind: String,
    content: String,
    version: i64,
    updated_at: String,
}

impl TryFrom<SectionRow> for SectionView {
    type Error = PortfolioError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        let content = serde_json::from_str(&row.content)
            .context(format!("Decoding stored content of '{}'", row.kind))?;
        Ok(Self { kind: row.kind, content, version: row.version, updated_at: row.updated_at })
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Section persistence on top of the `section` table.
///
/// Records use the kind as their id (`section:about`), so an upsert targets
/// exactly one record and concurrent writers only race on the counter.
#[derive(Debug, Clone)]
pub struct SectionStore {
    db: Database,
}

impl SectionStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every stored section, ordered by kind.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<SectionView>, PortfolioError> {
        let rows = self
            .db
            .query(format!("SELECT {SECTION_FIELDS} FROM section ORDER BY kind ASC"))
            .await
            .context("Listing sections")?
            .take::<Vec<SectionRow>>(0)
            .context("Parsing sections")?;

        rows.into_iter().map(SectionView::try_from).collect()
    }

    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn get(&self, kind: SectionKind) -> Result<Option<SectionView>, PortfolioError> {
        let rows = self
            .db
            .query(format!("SELECT {SECTION_FIELDS} FROM section WHERE kind = $kind LIMIT 1"))
            .bind(("kind", kind.as_str()))
            .await
            .context("Loading section")?
            .take::<Vec<SectionRow>>(0)
            .context("Parsing section")?;

        rows.into_iter().next().map(SectionView::try_from).transpose()
    }

    /// Replaces the payload and bumps the version, creating the section at version 1.
    #[instrument(skip(self, content), fields(kind = %kind))]
    pub async fn upsert(
        &self,
        kind: SectionKind,
        content: &Value,
    ) -> Result<SectionView, PortfolioError> {
        let encoded = serde_json::to_string(content).context("Encoding section content")?;
        let rows = self
            .db
            .query(format!(
                "UPSERT section:{kind} SET kind = $kind, content = $content, \
                 version = (version ?? 0) + 1, updated_at = $now RETURN {SECTION_FIELDS}"
            ))
            .bind(("kind", kind.as_str()))
            .bind(("content", encoded))
            .bind(("now", now()))
            .await
            .context("Upserting section")?
            .take::<Vec<SectionRow>>(0)
            .context("Parsing upserted section")?;

        let row = rows.into_iter().next().ok_or_else(|| PortfolioError::Corrupt {
            message: format!("upsert of '{kind}' returned no record").into(),
            context: None,
        })?;
        debug!(version = row.version, "Section written");
        SectionView::try_from(row)
    }

    /// Inserts every section of `bundle` whose kind is known and not yet stored.
    ///
    /// Returns the kinds that were created, at version 1.
    #[instrument(skip_all)]
    pub async fn seed_missing(
        &self,
        bundle: &Map<String, Value>,
    ) -> Result<Vec<SectionKind>, PortfolioError> {
        let existing = self.all().await?;
        let mut created = Vec::new();

        for (name, content) in bundle {
            let Ok(kind) = name.parse::<SectionKind>() else {
                debug!(section = %name, "Skipping unknown bundled section");
                continue;
            };
            if existing.iter().any(|section| section.kind == kind.as_str()) {
                continue;
            }

            let encoded = serde_json::to_string(content).context("Encoding bundled content")?;
            self.db
                .query(format!(
                    "CREATE section:{kind} SET kind = $kind, content = $content, version = 1, updated_at = $now"
                ))
                .bind(("kind", kind.as_str()))
                .bind(("content", encoded))
                .bind(("now", now()))
                .await
                .context("Seeding section")?
                .check()
                .map_err(surrealdb::Error::from)?;
            created.push(kind);
        }

        created.sort_unstable();
        Ok(created)
    }
}
