//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! This macro generates an implementation of the `Filterable` trait (a
//! static table of field accessors) and field name constants.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result};

use super::attrs::{parse_filter_attrs, FilterKind};

/// Main implementation of the Filterable derive macro.
pub fn filterable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Filterable cannot be derived for generic structs",
        ));
    }

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Filterable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Filterable can only be derived for structs",
            ))
        }
    };

    let mut field_entries: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_filter_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let inferred = FilterKind::infer(&field.ty);
        let kind = match (attrs.kind, inferred) {
            // An explicit Text on Option<String> still needs the optional accessor
            (Some(FilterKind::Text), Some(FilterKind::OptionalText)) => FilterKind::OptionalText,
            (Some(kind), _) => kind,
            (None, Some(kind)) => kind,
            (None, None) => continue,
        };

        let renamed = attrs.rename.is_some();
        let query_name = attrs
            .rename
            .unwrap_or_else(|| field_name.unraw().to_string());
        let const_name = syn::parse_str::<Ident>(&to_screaming_snake_case(&query_name))
            .map_err(|_| {
                let msg = if renamed {
                    "rename must produce a valid identifier"
                } else {
                    "field name must produce a valid identifier"
                };
                Error::new(field.span(), msg)
            })?;

        field_constants.push(quote! {
            /// Field name constant for lookups.
            pub const #const_name: &'static str = #query_name;
        });

        let (kind_tokens, value_expr) = match kind {
            FilterKind::Text => (
                quote! { ::sift::FieldKind::Text },
                quote! {
                    ::sift::Value::Text(::core::convert::AsRef::<str>::as_ref(&record.#field_name))
                },
            ),
            FilterKind::OptionalText => (
                quote! { ::sift::FieldKind::Text },
                quote! { ::sift::Value::from(record.#field_name.as_deref()) },
            ),
            FilterKind::Number => (
                quote! { ::sift::FieldKind::Number },
                quote! { ::sift::Value::Number(::sift::Number::from(record.#field_name)) },
            ),
            FilterKind::Bool => (
                quote! { ::sift::FieldKind::Bool },
                quote! { ::sift::Value::Bool(record.#field_name) },
            ),
        };

        field_entries.push(quote! {
            ::sift::Field::new(#query_name, #kind_tokens, |record| #value_expr),
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::sift::Filterable for #struct_name {
            fn fields() -> &'static [::sift::Field<Self>] {
                const FIELDS: &[::sift::Field<#struct_name>] = &[
                    #(#field_entries)*
                ];
                FIELDS
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
