use std::borrow::Cow;

/// A specialized [`ContactError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ContactError {
    /// Query or transport failures from `SurrealDB`.
    #[cfg(feature = "server")]
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// A stored submission that no longer matches the model.
    #[error("Corrupt submission{}: {message}", format_context(.context))]
    Corrupt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl From<ContactError> for folio_kernel::server::ApiError {
    fn from(err: ContactError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}
