//! Proc macros for sift.
//!
//! - [`Filterable`] - Generate the static field table used by `sift::Search`
//!
//! For working examples, see `sift-macros/tests/filterable_derive.rs`.

mod filterable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Filterable` trait for record structs.
///
/// This macro generates an implementation of `sift::Filterable`: a static
/// table with one typed accessor per filterable field, in declaration order.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `Text` | Text field (any type implementing `AsRef<str>`) |
/// | `Number` | Numeric field (any `Copy` type convertible into `sift::Number`) |
/// | `Bool` | Boolean field |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom field name |
///
/// Fields without an attribute are included as text when their type is
/// `String`, `&str`, `Box<str>`, `Cow<str>` or `Option<String>`, and left
/// out otherwise.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `User::FIRST_NAME`)
/// 2. Implementation of `Filterable::fields()`
///
/// # Example
///
/// ```ignore
/// use sift::{Filterable, Search};
/// use sift_macros::Filterable;
///
/// #[derive(Filterable)]
/// struct User {
///     first_name: String,
///     last_name: String,
///
///     #[filter(Number)]
///     age: u8,
///
///     #[filter(skip)]
///     password_hash: String,
/// }
///
/// let users = vec![User {
///     first_name: "Joash".into(),
///     last_name: "Joe".into(),
///     age: 30,
///     password_hash: "joe".into(),
/// }];
///
/// let found = Search::for_keyword("joe").filter(&users).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[proc_macro_derive(Filterable, attributes(filter))]
pub fn filterable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    filterable::filterable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
