//! Sift - composable predicates for filtering in-memory record collections.
//!
//! Sift builds one boolean predicate out of many small ones. It provides:
//!
//! - A boxed, thread-safe [`Predicate`] type with `or`, `and` and `not`
//! - Fold identities ([`always_false`], [`always_true`]) and the folds
//!   [`any_of`] / [`all_of`]
//! - Static field tables ([`Filterable`]) in place of runtime reflection
//! - Elementary predicates built per field from a keyword ([`Matcher`])
//! - Keyword search over every text field of any record type ([`Search`])
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{Field, Filterable, Search, Value};
//!
//! struct Product {
//!     name: String,
//! }
//!
//! impl Filterable for Product {
//!     fn fields() -> &'static [Field<Self>] {
//!         const FIELDS: &[Field<Product>] = &[Field::text("name", |p| Value::Text(&p.name))];
//!         FIELDS
//!     }
//! }
//!
//! let products = vec![
//!     Product { name: "Joe's".into() },
//!     Product { name: "Johnsons".into() },
//! ];
//!
//! let predicate = Search::for_keyword("joe").any_field::<Product>().unwrap();
//! let names: Vec<_> = predicate.filter(&products).map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Joe's"]);
//! ```
//!
//! # Fold Semantics
//!
//! `(Predicate, or, always_false)` and `(Predicate, and, always_true)` are
//! monoids, so predicates can be folded in any order and in any number:
//!
//! ```text
//! any_of([])       = always_false    (matches nothing)
//! all_of([])       = always_true     (matches everything)
//! any_of([a, b])   = a | b
//! all_of([a, b])   = a & b
//! ```
//!
//! Combining predicates never fails. Errors ([`SiftError`]) only come from
//! building an elementary predicate, for example asking for `Contains` on a
//! number field.
//!
//! # Field Kinds and Operators
//!
//! | Kind | Operators |
//! |------|-----------|
//! | Text | `Contains`, `Eq`, `StartsWith`, `EndsWith`, `Regex` |
//! | Number | `Eq` |
//! | Bool | `Eq` |

mod error;
mod field;
mod matcher;
mod op;
mod predicate;
mod search;
mod value;

// Re-export public API
pub use error::{Result, SiftError};
pub use field::{Field, Filterable, Getter};
pub use matcher::Matcher;
pub use op::{Case, Op};
pub use predicate::{
    all_of, always_false, always_true, and, any_of, filter, not, or, Matches, Predicate,
};
pub use search::Search;
pub use value::{FieldKind, Number, Value};
