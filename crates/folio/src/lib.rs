//! Facade crate for Folio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the desired feature flags (`server`/`client`).
//! - Call [`init`] (server) to register feature slices and [`api_router`] to mount
//!   their routes; [`migrations`] lists the schema every slice needs.

pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(feature = "server")]
use folio_database::{Database, Migration};
#[cfg(feature = "server")]
use folio_domain::config::ApiConfig;
#[cfg(feature = "server")]
use folio_kernel::server::ApiState;
#[cfg(feature = "server")]
use utoipa_axum::router::OpenApiRouter;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_analytics as analytics;
    pub use folio_contact as contact;
    pub use folio_portfolio as portfolio;
    #[cfg(feature = "client")]
    pub use folio_terminal as terminal;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "server")]
        "portfolio",
        #[cfg(feature = "server")]
        "contact",
        #[cfg(feature = "server")]
        "analytics",
        #[cfg(feature = "client")]
        "terminal",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Schema of every server slice, in application order.
#[cfg(feature = "server")]
#[must_use]
pub fn migrations() -> Vec<Migration> {
    [features::portfolio::MIGRATIONS, features::contact::MIGRATIONS, features::analytics::MIGRATIONS]
        .concat()
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub async fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Portfolio content (seeds the bundled sections when configured)
    slices.push(features::portfolio::init(config, database).await?);

    // Contact form
    slices.push(features::contact::init(config, database)?);

    // Command analytics
    slices.push(features::analytics::init(database));

    Ok(slices)
}

/// System routes plus the routes of every server slice.
#[cfg(feature = "server")]
#[must_use]
pub fn api_router() -> OpenApiRouter<ApiState> {
    folio_kernel::server::system_router()
        .merge(features::portfolio::router())
        .merge(features::contact::router())
        .merge(features::analytics::router())
}
