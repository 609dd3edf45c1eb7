//! Portfolio content slice.
//!
//! One record per [`SectionKind`](folio_domain::section::SectionKind), holding an opaque
//! JSON payload, a write counter and the time of the last write. Sections are created on
//! first write and never deleted.

mod error;
pub mod model;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod router;
#[cfg(feature = "server")]
mod store;

pub use error::{PortfolioError, PortfolioErrorExt};

#[cfg(feature = "server")]
pub use router::router;
#[cfg(feature = "server")]
pub use store::SectionStore;

#[cfg(feature = "server")]
use folio_database::{Database, Migration};
#[cfg(feature = "server")]
use folio_domain::config::ApiConfig;
#[cfg(feature = "server")]
use folio_kernel::domain::registry::InitializedSlice;

/// Schema owned by this slice.
#[cfg(feature = "server")]
pub const MIGRATIONS: &[Migration] =
    &[Migration::new("portfolio", "0000", include_str!("../migrations/0000-section.surql"))];

/// Portfolio feature state.
#[cfg(feature = "server")]
#[folio_derive::folio_slice(name = "portfolio")]
pub struct Portfolio {
    pub store: SectionStore,
}

/// Initializes the portfolio slice, seeding absent sections from the bundled
/// portfolio when `content.seed_on_startup` is set.
///
/// # Errors
/// Returns an error if the bundled portfolio is malformed or seeding fails.
#[cfg(feature = "server")]
pub async fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<InitializedSlice, PortfolioError> {
    let store = SectionStore::new(database.clone());

    if config.content.seed_on_startup {
        let bundle: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(folio_domain::content::BUNDLED_PORTFOLIO)
                .context("Parsing bundled portfolio")?;
        let created = store.seed_missing(&bundle).await?;
        if !created.is_empty() {
            tracing::info!(count = created.len(), "Seeded portfolio sections");
        }
    }

    tracing::info!("Portfolio server slice initialized");
    Ok(InitializedSlice::new(Portfolio::new(PortfolioInner { store })))
}
