use super::derived_traits;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

/// Shape of one enum variant as seen by `#[folio_error]`.
struct VariantSpec<'a> {
    ident: &'a Ident,
    cfgs: Vec<&'a Attribute>,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

impl VariantSpec<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(body) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "folio_error can only be applied to enums")
            .to_compile_error();
    };

    let mut specs = Vec::with_capacity(body.variants.len());
    for variant in &body.variants {
        match inspect_variant(variant) {
            Ok(spec) => specs.push(spec),
            Err(err) => return err.to_compile_error(),
        }
    }

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(&input.attrs);
    let ext_trait = context_trait(name, &ext, &specs);
    let source_impls = specs.iter().filter(|s| !s.is_internal()).filter_map(|s| source_impl(name, &ext, s));
    let internal_impls = specs.iter().find(|s| s.is_internal()).map(|s| internal_impl(name, s));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #ext_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<VariantSpec<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "folio_error variants must use named fields (`Variant { .. }`)",
        ));
    };

    let mut has_context = false;
    let mut source = None;
    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else { continue };
        if ident == "context" {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            }
            has_context = true;
        } else if source.is_none() && is_source_field(ident, field) {
            source = Some((ident, &field.ty));
        }
    }

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "folio_error variants wrapping a source need `context: Option<Cow<'static, str>>`",
        ));
    }

    Ok(VariantSpec {
        ident: &variant.ident,
        cfgs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
        source,
        has_context,
    })
}

fn is_source_field(ident: &Ident, field: &Field) -> bool {
    ident == "source"
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

/// Accepts `Option<Cow<'static, str>>` with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = rendered.strip_suffix("Cow<'static,str>>") else {
        return false;
    };
    let inner = inner.trim_end_matches("::").trim_end_matches("std::borrow");
    let inner = inner.trim_end_matches("::").trim_end_matches("alloc::borrow");
    let inner = inner.trim_end_matches("::");
    matches!(inner, "Option<" | "std::option::Option<" | "::std::option::Option<" | "core::option::Option<")
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let present = derived_traits(attrs);
    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote!(Debug));
    }
    if !present.contains("Error") {
        wanted.push(quote!(::thiserror::Error));
    }
    if wanted.is_empty() { TokenStream::new() } else { quote!(#[derive(#(#wanted),*)]) }
}

fn context_trait(name: &Ident, ext: &Ident, specs: &[VariantSpec<'_>]) -> TokenStream {
    let arms = specs.iter().filter(|s| s.has_context).map(|s| {
        let ident = s.ident;
        let cfgs = &s.cfgs;
        quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        /// Attaches a human-readable context to a failed result.
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext: &Ident, spec: &VariantSpec<'_>) -> Option<TokenStream> {
    let (field, ty) = spec.source?;
    let variant = spec.ident;
    let cfgs = &spec.cfgs;

    Some(quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#variant { #field, context: None }
            }
        }

        #(#cfgs)*
        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name> {
                self.map_err(|#field| #name::#variant { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impl(name: &Ident, spec: &VariantSpec<'_>) -> TokenStream {
    let cfgs = &spec.cfgs;
    quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfgs)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}
