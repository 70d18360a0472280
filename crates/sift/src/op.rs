//! Match operators and case handling for elementary predicates.

use crate::value::FieldKind;

/// Comparison operator used to build an elementary predicate.
///
/// - **Universal**: `Eq` works on every field kind
/// - **Text only**: `Contains`, `StartsWith`, `EndsWith`, `Regex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    /// Text contains the keyword.
    #[default]
    Contains,
    /// Exact match.
    Eq,
    /// Text starts with the keyword.
    StartsWith,
    /// Text ends with the keyword.
    EndsWith,
    /// Text matches the keyword as a regular expression.
    Regex,
}

impl Op {
    /// Returns `true` if this operator can be applied to fields of `kind`.
    pub fn supports(self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Text => true,
            FieldKind::Number | FieldKind::Bool => self == Op::Eq,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Contains => "contains",
            Op::Eq => "eq",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Regex => "regex",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case handling for text comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Compare after lowercasing both sides.
    #[default]
    Insensitive,
    /// Compare the text as-is.
    Sensitive,
}

impl Case {
    /// Normalizes `s` for comparison under this case mode.
    pub(crate) fn fold(self, s: &str) -> std::borrow::Cow<'_, str> {
        match self {
            Case::Insensitive => std::borrow::Cow::Owned(s.to_lowercase()),
            Case::Sensitive => std::borrow::Cow::Borrowed(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_kind_support() {
        assert!(Op::Contains.supports(FieldKind::Text));
        assert!(Op::Regex.supports(FieldKind::Text));
        assert!(Op::Eq.supports(FieldKind::Number));
        assert!(Op::Eq.supports(FieldKind::Bool));
        assert!(!Op::Contains.supports(FieldKind::Number));
        assert!(!Op::StartsWith.supports(FieldKind::Bool));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Contains.to_string(), "contains");
        assert_eq!(Op::StartsWith.to_string(), "startswith");
        assert_eq!(Op::default(), Op::Contains);
    }

    #[test]
    fn case_fold() {
        assert_eq!(Case::Insensitive.fold("MacKenzie"), "mackenzie");
        assert_eq!(Case::Sensitive.fold("MacKenzie"), "MacKenzie");
    }
}
