#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace: error enums,
//! API data models, documented HTTP handlers and feature slices.
//!
//! Examples are `ignore`d because they only compile inside consuming crates
//! (they reference `thiserror`, `serde`, `utoipa` and `folio_kernel`).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, Item, ItemFn, ItemStruct, parse_macro_input};

/// Defines a data transfer object for the HTTP API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` behind the consuming crate's `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` unless overridden.
/// * Applies `#[serde(deny_unknown_fields)]` to structs unless disabled.
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - overrides the rename policy.
/// * `deny_unknown_fields = false` - accepts unknown fields.
///
/// ```rust,ignore
/// #[folio_derive::api_model(deny_unknown_fields = false)]
/// pub struct TrackCommandRequest {
///     pub command: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as Item);
    macros::api::expand_model(attr.into(), input).into()
}

/// Documents an async Axum handler with `utoipa::path`.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`,
/// `params(...)`, `request_body = ...`, `responses(...)`, `tag = ...`).
/// The documentation attribute is only emitted with the `server` feature.
///
/// ```rust,ignore
/// #[folio_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG,
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_handler(args.into(), input).into()
}

/// Turns an enum into the workspace error type.
///
/// Every variant must use named fields. A variant may carry a
/// `context: Option<Cow<'static, str>>` field and a source field (named
/// `source` or marked `#[source]`/`#[from]`); a source requires a context.
///
/// Generated items:
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * `<Name>Ext` with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every source-bearing variant.
/// * `From<Source>` for every source-bearing variant.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-level `format_context` helper for the `#[error]` strings, so one
///   error enum per module.
///
/// ```rust,ignore
/// #[folio_derive::folio_error]
/// pub enum ContactError {
///     #[error("SurrealDB error{}: {source}", format_context(.context))]
///     Surreal { source: surrealdb::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal contact error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a feature slice registered in the kernel `ApiState`.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is an `Arc` handle that
/// derefs to it and implements `FeatureSlice`. The slice name defaults to the
/// lower-cased struct name and can be set with `name = "..."`.
///
/// ```rust,ignore
/// #[folio_derive::folio_slice(name = "contact")]
/// pub struct Contact {
///     store: SubmissionStore,
/// }
///
/// let slice = Contact::new(ContactInner { store });
/// ```
#[proc_macro_attribute]
pub fn folio_slice(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(attr.into(), input).into()
}
