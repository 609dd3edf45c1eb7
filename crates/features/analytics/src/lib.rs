//! Command usage slice.
//!
//! The terminal client reports every dispatched command; this slice keeps one
//! counter per normalized command.

mod error;
pub mod model;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod router;
#[cfg(feature = "server")]
mod store;

pub use error::{AnalyticsError, AnalyticsErrorExt};

#[cfg(feature = "server")]
pub use router::router;
#[cfg(feature = "server")]
pub use store::UsageStore;

#[cfg(feature = "server")]
use folio_database::{Database, Migration};
#[cfg(feature = "server")]
use folio_kernel::domain::registry::InitializedSlice;

/// Schema owned by this slice.
#[cfg(feature = "server")]
pub const MIGRATIONS: &[Migration] =
    &[Migration::new("analytics", "0000", include_str!("../migrations/0000-command-usage.surql"))];

/// Analytics feature state.
#[cfg(feature = "server")]
#[folio_derive::folio_slice(name = "analytics")]
pub struct Analytics {
    pub store: UsageStore,
}

#[cfg(feature = "server")]
#[must_use]
pub fn init(database: &Database) -> InitializedSlice {
    tracing::info!("Analytics server slice initialized");
    InitializedSlice::new(Analytics::new(AnalyticsInner { store: UsageStore::new(database.clone()) }))
}
