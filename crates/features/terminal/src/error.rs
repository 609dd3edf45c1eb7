use std::borrow::Cow;

/// A specialized [`TerminalError`] enum of this crate.
#[folio_derive::folio_error]
pub enum TerminalError {
    /// Transport failures, timeouts and non-2xx statuses.
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Bodies that are not the expected JSON.
    #[error("Decoding error{}: {source}", format_context(.context))]
    Json {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// A well-formed failure envelope from the backend.
    #[error("API error{}: {message}", format_context(.context))]
    Api { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal terminal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
