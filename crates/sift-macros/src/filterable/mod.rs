//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! This module generates the static field table and field name constants
//! from struct annotations.

mod attrs;
mod derive;

pub use derive::filterable_derive_impl;
