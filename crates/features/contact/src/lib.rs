//! Contact form slice.
//!
//! Submissions are validated field by field, stored as `unread` with the caller's
//! address and user agent, listed newest first and only ever mutated through a
//! status update.

mod error;
pub mod model;
pub mod validation;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod router;
#[cfg(feature = "server")]
mod store;

pub use error::{ContactError, ContactErrorExt};

#[cfg(feature = "server")]
pub use router::router;
#[cfg(feature = "server")]
pub use store::{Origin, SubmissionStore};

#[cfg(feature = "server")]
use folio_database::{Database, Migration};
#[cfg(feature = "server")]
use folio_domain::config::{ApiConfig, ContactConfig};
#[cfg(feature = "server")]
use folio_kernel::domain::registry::InitializedSlice;

/// Schema owned by this slice.
#[cfg(feature = "server")]
pub const MIGRATIONS: &[Migration] =
    &[Migration::new("contact", "0000", include_str!("../migrations/0000-submission.surql"))];

/// Contact feature state.
#[cfg(feature = "server")]
#[folio_derive::folio_slice(name = "contact")]
pub struct Contact {
    pub store: SubmissionStore,
    pub limits: ContactConfig,
}

/// Initializes the contact slice.
///
/// # Errors
/// Returns [`ContactError::Internal`] when the configured page sizes are unusable.
#[cfg(feature = "server")]
pub fn init(config: &ApiConfig, database: &Database) -> Result<InitializedSlice, ContactError> {
    let limits = config.contact.clone();
    if limits.default_page_size == 0 || limits.max_page_size == 0 {
        return Err(ContactError::Internal {
            message: "contact page sizes must be greater than zero".into(),
            context: Some("Validating contact configuration".into()),
        });
    }

    tracing::info!(
        default_page_size = limits.default_page_size,
        max_page_size = limits.max_page_size,
        "Contact server slice initialized"
    );
    let store = SubmissionStore::new(database.clone());
    Ok(InitializedSlice::new(Contact::new(ContactInner { store, limits })))
}
