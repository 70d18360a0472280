//! Static field descriptions for filterable record types.
//!
//! Instead of discovering fields at runtime, each record type lists its
//! filterable fields once through the [`Filterable`] trait. The table is
//! usually generated by `#[derive(Filterable)]` from the `sift-macros`
//! crate, but can also be written by hand.

use std::fmt;

use crate::value::{FieldKind, Value};

/// Accessor function returning a field's value from a record.
pub type Getter<T> = fn(&T) -> Value<'_>;

/// A named, typed accessor for one field of `T`.
pub struct Field<T> {
    /// Field name used for lookups.
    pub name: &'static str,
    /// Declared kind of the field.
    pub kind: FieldKind,
    /// Reads the field from a record.
    pub get: Getter<T>,
}

impl<T> Field<T> {
    /// Creates a field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind, get: Getter<T>) -> Self {
        Field { name, kind, get }
    }

    /// Shorthand for a [`FieldKind::Text`] field.
    pub const fn text(name: &'static str, get: Getter<T>) -> Self {
        Field::new(name, FieldKind::Text, get)
    }

    /// Shorthand for a [`FieldKind::Number`] field.
    pub const fn number(name: &'static str, get: Getter<T>) -> Self {
        Field::new(name, FieldKind::Number, get)
    }

    /// Shorthand for a [`FieldKind::Bool`] field.
    pub const fn boolean(name: &'static str, get: Getter<T>) -> Self {
        Field::new(name, FieldKind::Bool, get)
    }

    /// Reads this field's value from `record`.
    pub fn value<'r>(&self, record: &'r T) -> Value<'r> {
        (self.get)(record)
    }
}

// Manual impls: derives would require `T: Clone` / `T: Debug`.
impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Trait for record types whose fields can be searched.
///
/// This trait is typically derived using `#[derive(Filterable)]` from the
/// `sift-macros` crate, but can also be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use sift_macros::Filterable;
///
/// #[derive(Filterable)]
/// struct User {
///     first_name: String,
///     last_name: String,
///     #[filter(Number)]
///     age: u8,
/// }
///
/// assert_eq!(User::FIRST_NAME, "first_name");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sift::{Field, Filterable, Value};
///
/// struct Product {
///     name: String,
/// }
///
/// impl Filterable for Product {
///     fn fields() -> &'static [Field<Self>] {
///         const FIELDS: &[Field<Product>] = &[Field::text("name", |p| Value::Text(&p.name))];
///         FIELDS
///     }
/// }
///
/// let p = Product { name: "Johnsons".into() };
/// assert_eq!(p.field_value("name"), Value::Text("Johnsons"));
/// assert_eq!(Product::text_fields().count(), 1);
/// ```
pub trait Filterable: Sized + 'static {
    /// Returns the statically declared filterable fields of this type.
    fn fields() -> &'static [Field<Self>];

    /// Looks up a field by name.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Returns the text-typed fields, in declaration order.
    fn text_fields() -> impl Iterator<Item = &'static Field<Self>> {
        Self::fields()
            .iter()
            .filter(|f| f.kind == FieldKind::Text)
    }

    /// Returns the value of a field by name, or [`Value::None`] if the field
    /// is not declared.
    fn field_value(&self, name: &str) -> Value<'_> {
        Self::field(name).map_or(Value::None, |f| f.value(self))
    }
}
