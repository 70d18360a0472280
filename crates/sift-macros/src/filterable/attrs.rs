//! Attribute parsing for the Filterable derive macro.
//!
//! This module provides parsers for the `#[filter(...)]` field attributes
//! used by the `Filterable` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, GenericArgument, Ident, Lit, Meta, PathArguments, Result, Token, Type,
};

/// The declared kind of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Text field: `#[filter(Text)]`
    Text,
    /// Optional text field, inferred from `Option<String>`.
    OptionalText,
    /// Number field: `#[filter(Number)]`
    Number,
    /// Boolean field: `#[filter(Bool)]`
    Bool,
}

impl FilterKind {
    /// Parse a filter kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_name(&ident.to_string(), ident.span())
    }

    /// Parse a filter kind from a string.
    pub fn from_name(s: &str, span: Span) -> Result<Self> {
        match s {
            "Text" | "text" | "String" | "string" => Ok(FilterKind::Text),
            "Number" | "number" => Ok(FilterKind::Number),
            "Bool" | "bool" | "boolean" => Ok(FilterKind::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown filter kind: '{}'. Expected one of: Text, Number, Bool",
                    other
                ),
            )),
        }
    }

    /// Infers the kind of an unannotated field from its type.
    ///
    /// `String`, `&str`, `Box<str>` and `Cow<str>` are text, `Option<String>`
    /// is optional text. Anything else is not filterable without an
    /// explicit attribute.
    pub fn infer(ty: &Type) -> Option<Self> {
        match ty {
            Type::Reference(r) => match &*r.elem {
                Type::Path(p) if p.path.is_ident("str") => Some(FilterKind::Text),
                _ => None,
            },
            Type::Path(p) => {
                let last = p.path.segments.last()?;
                match last.ident.to_string().as_str() {
                    "String" => Some(FilterKind::Text),
                    "Box" | "Cow" if single_arg_is(&last.arguments, "str") => {
                        Some(FilterKind::Text)
                    }
                    "Option" if single_arg_is(&last.arguments, "String") => {
                        Some(FilterKind::OptionalText)
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Returns `true` if the last generic type argument is a path ending in `name`.
fn single_arg_is(args: &PathArguments, name: &str) -> bool {
    let PathArguments::AngleBracketed(args) = args else {
        return false;
    };
    let ty = args.args.iter().rev().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    matches!(
        ty,
        Some(Type::Path(p)) if p.path.segments.last().is_some_and(|s| s.ident == name)
    )
}

/// Field-level attributes from `#[filter(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FilterAttr {
    /// The declared kind of this field.
    pub kind: Option<FilterKind>,
    /// Skip this field.
    pub skip: bool,
    /// Custom field name (default: field name).
    pub rename: Option<String>,
}

impl Parse for FilterAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FilterAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Kind identifier: filter(Text), filter(Number), etc.
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FilterKind::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected filter kind: Text, Number, Bool, or skip",
                        ));
                    }
                }

                // rename = "custom_name"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) = &nv.value
                        {
                            attr.rename = Some(s.value());
                        } else {
                            return Err(Error::new(
                                nv.value.span(),
                                "rename must be a string literal",
                            ));
                        }
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown filter attribute. Expected: Text, Number, Bool, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[filter(...)]` attributes from a field's attributes.
pub fn parse_filter_attrs(attrs: &[Attribute]) -> Result<FilterAttr> {
    for attr in attrs {
        if attr.path().is_ident("filter") {
            return attr.parse_args::<FilterAttr>();
        }
    }
    Ok(FilterAttr::default())
}
