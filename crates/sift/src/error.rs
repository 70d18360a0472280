//! Error types for the sift crate.

use thiserror::Error;

use crate::op::Op;
use crate::value::FieldKind;

/// Errors that can occur while building elementary predicates.
///
/// Combining predicates never fails; every error surfaces when a predicate
/// is first built from a field and a keyword.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The field kind has no comparable operation for the requested operator.
    #[error("operator '{op}' is not supported on {kind} field '{field}'")]
    UnsupportedField {
        op: Op,
        field: &'static str,
        kind: FieldKind,
    },

    /// No field with this name is declared on the record type.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The keyword cannot be read as a value of the field's kind.
    #[error("keyword '{keyword}' is not a valid {kind} value")]
    InvalidKeyword { keyword: String, kind: FieldKind },
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
