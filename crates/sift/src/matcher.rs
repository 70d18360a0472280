//! Elementary predicates built from a field and a keyword.
//!
//! A [`Matcher`] holds an operator, a keyword and a case mode. Given a
//! [`Field`] it produces a [`Predicate`] that tests that one field. All
//! validation happens here, at construction time: the resulting predicate
//! never fails.

use std::cmp::Ordering;

use log::trace;
use regex::{Regex, RegexBuilder};

use crate::error::{Result, SiftError};
use crate::field::{Field, Getter};
use crate::op::{Case, Op};
use crate::predicate::Predicate;
use crate::value::{FieldKind, Number, Value};

/// Builds elementary predicates for a keyword.
///
/// # Example
///
/// ```
/// use sift::{Field, Matcher, Value};
///
/// struct User {
///     first_name: String,
/// }
///
/// let first = Field::<User>::text("first_name", |u| Value::Text(&u.first_name));
/// let pred = Matcher::contains("jo").predicate_for(&first).unwrap();
///
/// assert!(pred.test(&User { first_name: "Joah".into() }));
/// assert!(!pred.test(&User { first_name: "Michael".into() }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    op: Op,
    keyword: String,
    case: Case,
}

impl Matcher {
    /// Creates a matcher with the default (case-insensitive) case mode.
    pub fn new(op: Op, keyword: impl Into<String>) -> Self {
        Matcher {
            op,
            keyword: keyword.into(),
            case: Case::default(),
        }
    }

    /// Field contains `keyword`.
    pub fn contains(keyword: impl Into<String>) -> Self {
        Matcher::new(Op::Contains, keyword)
    }

    /// Field equals `keyword`.
    pub fn equals(keyword: impl Into<String>) -> Self {
        Matcher::new(Op::Eq, keyword)
    }

    /// Field starts with `keyword`.
    pub fn starts_with(keyword: impl Into<String>) -> Self {
        Matcher::new(Op::StartsWith, keyword)
    }

    /// Field ends with `keyword`.
    pub fn ends_with(keyword: impl Into<String>) -> Self {
        Matcher::new(Op::EndsWith, keyword)
    }

    /// Field matches the regular expression `pattern`.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Matcher::new(Op::Regex, pattern)
    }

    /// Sets the case mode for text comparisons.
    pub fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Returns the operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns the keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Builds the elementary predicate testing `field` against the keyword.
    ///
    /// # Errors
    ///
    /// - [`SiftError::UnsupportedField`] if the operator has no meaning for
    ///   the field's kind (for example `Contains` on a number field)
    /// - [`SiftError::InvalidKeyword`] if the keyword cannot be read as a
    ///   number or boolean for an `Eq` on such a field
    /// - [`SiftError::InvalidRegex`] if the regex pattern does not compile
    pub fn predicate_for<'a, T: 'a>(&self, field: &Field<T>) -> Result<Predicate<'a, T>> {
        if !self.op.supports(field.kind) {
            return Err(SiftError::UnsupportedField {
                op: self.op,
                field: field.name,
                kind: field.kind,
            });
        }

        trace!(
            "building {} predicate for {} field '{}' with keyword {:?}",
            self.op,
            field.kind,
            field.name,
            self.keyword
        );

        match field.kind {
            FieldKind::Text => self.text_predicate(field.get),
            FieldKind::Number => self.number_predicate(field.get),
            FieldKind::Bool => self.bool_predicate(field.get),
        }
    }

    fn text_predicate<'a, T: 'a>(&self, get: Getter<T>) -> Result<Predicate<'a, T>> {
        let test = TextTest::new(self.op, &self.keyword, self.case)?;
        let case = self.case;
        Ok(Predicate::new(move |record| {
            get(record).as_str().is_some_and(|s| test.is_match(s, case))
        }))
    }

    fn number_predicate<'a, T: 'a>(&self, get: Getter<T>) -> Result<Predicate<'a, T>> {
        let expected = Number::parse(&self.keyword).ok_or_else(|| SiftError::InvalidKeyword {
            keyword: self.keyword.clone(),
            kind: FieldKind::Number,
        })?;
        Ok(Predicate::new(move |record| match get(record) {
            Value::Number(n) => n.compare(expected) == Some(Ordering::Equal),
            _ => false,
        }))
    }

    fn bool_predicate<'a, T: 'a>(&self, get: Getter<T>) -> Result<Predicate<'a, T>> {
        let expected = self
            .keyword
            .trim()
            .to_ascii_lowercase()
            .parse::<bool>()
            .map_err(|_| SiftError::InvalidKeyword {
                keyword: self.keyword.clone(),
                kind: FieldKind::Bool,
            })?;
        Ok(Predicate::new(move |record| {
            get(record).as_bool() == Some(expected)
        }))
    }
}

/// A text operator with its keyword prepared once, at construction.
enum TextTest {
    Contains(String),
    Equals(String),
    StartsWith(String),
    EndsWith(String),
    Pattern(Regex),
}

impl TextTest {
    fn new(op: Op, keyword: &str, case: Case) -> Result<Self> {
        let needle = || case.fold(keyword).into_owned();
        Ok(match op {
            Op::Contains => TextTest::Contains(needle()),
            Op::Eq => TextTest::Equals(needle()),
            Op::StartsWith => TextTest::StartsWith(needle()),
            Op::EndsWith => TextTest::EndsWith(needle()),
            Op::Regex => TextTest::Pattern(
                RegexBuilder::new(keyword)
                    .case_insensitive(case == Case::Insensitive)
                    .build()?,
            ),
        })
    }

    fn is_match(&self, field: &str, case: Case) -> bool {
        match self {
            TextTest::Contains(needle) => case.fold(field).contains(needle.as_str()),
            TextTest::Equals(needle) => case.fold(field) == needle.as_str(),
            TextTest::StartsWith(needle) => case.fold(field).starts_with(needle.as_str()),
            TextTest::EndsWith(needle) => case.fold(field).ends_with(needle.as_str()),
            // The regex carries its own case flag.
            TextTest::Pattern(regex) => regex.is_match(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        nick: Option<String>,
        score: u32,
        id: u64,
        active: bool,
    }

    fn name() -> Field<Row> {
        Field::text("name", |r| Value::Text(&r.name))
    }

    fn nick() -> Field<Row> {
        Field::text("nick", |r| Value::from(r.nick.as_ref()))
    }

    fn score() -> Field<Row> {
        Field::number("score", |r| Value::Number(Number::from(r.score)))
    }

    fn id() -> Field<Row> {
        Field::number("id", |r| Value::Number(Number::from(r.id)))
    }

    fn active() -> Field<Row> {
        Field::boolean("active", |r| Value::Bool(r.active))
    }

    fn row(name: &str) -> Row {
        Row {
            name: name.to_string(),
            nick: None,
            score: 10,
            id: 9_007_199_254_740_993,
            active: true,
        }
    }

    #[test]
    fn text_ops_case_insensitive_by_default() {
        let r = row("MacKenzie");
        let t = |m: Matcher| m.predicate_for(&name()).unwrap().test(&r);

        assert!(t(Matcher::contains("kenz")));
        assert!(t(Matcher::equals("mackenzie")));
        assert!(t(Matcher::starts_with("MAC")));
        assert!(t(Matcher::ends_with("ZIE")));
        assert!(!t(Matcher::contains("Doe")));
    }

    #[test]
    fn text_ops_case_sensitive() {
        let r = row("MacKenzie");
        let t = |m: Matcher| {
            m.case(Case::Sensitive)
                .predicate_for(&name())
                .unwrap()
                .test(&r)
        };

        assert!(t(Matcher::contains("Kenz")));
        assert!(!t(Matcher::contains("kenz")));
        assert!(!t(Matcher::equals("mackenzie")));
    }

    #[test]
    fn regex_honours_case() {
        let r = row("Joash");
        let insensitive = Matcher::regex("^jo[a-z]+h$");
        assert!(insensitive.predicate_for(&name()).unwrap().test(&r));

        let sensitive = Matcher::regex("^jo[a-z]+h$").case(Case::Sensitive);
        assert!(!sensitive.predicate_for(&name()).unwrap().test(&r));
    }

    #[test]
    fn invalid_regex_fails_at_construction() {
        let err = Matcher::regex("[unclosed").predicate_for(&name()).unwrap_err();
        assert!(matches!(err, SiftError::InvalidRegex(_)));
    }

    #[test]
    fn missing_value_never_matches() {
        let r = row("Joel");
        let pred = Matcher::contains("").predicate_for(&nick()).unwrap();
        assert!(!pred.test(&r));
    }

    #[test]
    fn contains_on_number_field_is_unsupported() {
        let err = Matcher::contains("1").predicate_for(&score()).unwrap_err();
        match err {
            SiftError::UnsupportedField { op, field, kind } => {
                assert_eq!(op, Op::Contains);
                assert_eq!(field, "score");
                assert_eq!(kind, FieldKind::Number);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn eq_on_number_and_bool_fields() {
        let r = row("Bob");
        assert!(Matcher::equals("10").predicate_for(&score()).unwrap().test(&r));
        assert!(Matcher::equals("10.0").predicate_for(&score()).unwrap().test(&r));
        assert!(!Matcher::equals("11").predicate_for(&score()).unwrap().test(&r));
        assert!(Matcher::equals("TRUE").predicate_for(&active()).unwrap().test(&r));
        assert!(!Matcher::equals("false").predicate_for(&active()).unwrap().test(&r));
    }

    #[test]
    fn eq_on_large_unsigned_ids_is_exact() {
        let r = row("Bob");
        let t = |k: &str| Matcher::equals(k).predicate_for(&id()).unwrap().test(&r);

        assert!(t("9007199254740993"));
        assert!(!t("9007199254740992"));
        assert!(!t("9007199254740994"));
    }

    #[test]
    fn non_finite_keyword_for_number_field() {
        for keyword in ["NaN", "inf", "-inf"] {
            let err = Matcher::equals(keyword).predicate_for(&score()).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("keyword '{keyword}' is not a valid number value")
            );
        }
    }

    #[test]
    fn regex_on_missing_value_never_matches() {
        let r = row("Joel");
        assert!(!Matcher::regex(".*").predicate_for(&nick()).unwrap().test(&r));
        assert!(Matcher::regex(".*").predicate_for(&name()).unwrap().test(&r));
    }

    #[test]
    fn unparsable_keyword_for_typed_field() {
        let err = Matcher::equals("Joe").predicate_for(&score()).unwrap_err();
        assert!(matches!(
            err,
            SiftError::InvalidKeyword {
                kind: FieldKind::Number,
                ..
            }
        ));
        let err = Matcher::equals("maybe").predicate_for(&active()).unwrap_err();
        assert_eq!(err.to_string(), "keyword 'maybe' is not a valid bool value");
    }
}
