use std::borrow::Cow;

/// A specialized [`PortfolioError`] enum of this crate.
#[folio_derive::folio_error]
pub enum PortfolioError {
    /// Query or transport failures from `SurrealDB`.
    #[cfg(feature = "server")]
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Section content that cannot be encoded or decoded.
    #[error("Content encoding error{}: {source}", format_context(.context))]
    Json {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// A stored record that no longer matches the section model.
    #[error("Corrupt section{}: {message}", format_context(.context))]
    Corrupt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal portfolio error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl From<PortfolioError> for folio_kernel::server::ApiError {
    fn from(err: PortfolioError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}
