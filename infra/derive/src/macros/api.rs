use super::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Item, ItemFn, LitBool, LitStr};

/// Arguments accepted by `#[api_model(...)]`.
#[derive(Default)]
pub struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

impl ModelArgs {
    pub fn parse(args: TokenStream) -> syn::Result<Self> {
        let mut parsed = Self::default();
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("rename_all") {
                if parsed.rename_all.is_some() {
                    return Err(meta.error("duplicate `rename_all`"));
                }
                parsed.rename_all = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("deny_unknown_fields") {
                if parsed.deny_unknown_fields.is_some() {
                    return Err(meta.error("duplicate `deny_unknown_fields`"));
                }
                parsed.deny_unknown_fields = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported argument; expected `rename_all` or `deny_unknown_fields`"))
            }
        });
        syn::parse::Parser::parse2(parser, args)?;
        Ok(parsed)
    }
}

/// Serde container options already present on the item.
#[derive(Default)]
struct SerdeState {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn serde_state(attrs: &[Attribute]) -> syn::Result<SerdeState> {
    let mut state = SerdeState::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                state.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                state.deny_unknown_fields = true;
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(state)
}

pub fn expand_model(args: TokenStream, item: Item) -> TokenStream {
    let args = match ModelArgs::parse(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let (attrs, ident, is_struct) = match &item {
        Item::Struct(s) => (&s.attrs, &s.ident, true),
        Item::Enum(e) => (&e.attrs, &e.ident, false),
        other => {
            return syn::Error::new_spanned(other, "api_model supports structs and enums only")
                .to_compile_error();
        }
    };

    let state = match serde_state(attrs) {
        Ok(state) => state,
        Err(err) => return err.to_compile_error(),
    };

    let present = derived_traits(attrs);
    let mut derives = Vec::new();
    for (name, path) in [
        ("Debug", quote!(Debug)),
        ("Serialize", quote!(::serde::Serialize)),
        ("Deserialize", quote!(::serde::Deserialize)),
    ] {
        if !present.contains(name) {
            derives.push(path);
        }
    }
    let derive_attr = if derives.is_empty() { quote!() } else { quote!(#[derive(#(#derives),*)]) };
    let schema_attr = if present.contains("ToSchema") {
        quote!()
    } else {
        quote!(#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))])
    };

    let wanted_case =
        args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &state.rename_all {
        None => quote!(#[serde(rename_all = #wanted_case)]),
        Some(existing) if existing.value() == wanted_case.value() => quote!(),
        Some(existing) => {
            return syn::Error::new_spanned(
                existing,
                "serde rename_all conflicts with api_model; pass it through api_model(rename_all = ...)",
            )
            .to_compile_error();
        }
    };

    let deny = args.deny_unknown_fields.as_ref().is_none_or(LitBool::value);
    let deny_attr = match (is_struct, deny, state.deny_unknown_fields) {
        (true, true, false) => quote!(#[serde(deny_unknown_fields)]),
        (_, false, true) => {
            return syn::Error::new_spanned(
                ident,
                "remove serde(deny_unknown_fields) before disabling it through api_model",
            )
            .to_compile_error();
        }
        _ => quote!(),
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #item
    }
}

pub fn expand_handler(args: TokenStream, handler: ItemFn) -> TokenStream {
    if handler.sig.asyncness.is_none() {
        return syn::Error::new_spanned(&handler.sig.fn_token, "api_handler expects an async fn")
            .to_compile_error();
    }

    let ItemFn { attrs, vis, sig, block } = handler;
    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}
