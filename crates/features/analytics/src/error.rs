use std::borrow::Cow;

/// A specialized [`AnalyticsError`] enum of this crate.
#[folio_derive::folio_error]
pub enum AnalyticsError {
    /// Query or transport failures from `SurrealDB`.
    #[cfg(feature = "server")]
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal analytics error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl From<AnalyticsError> for folio_kernel::server::ApiError {
    fn from(err: AnalyticsError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}
