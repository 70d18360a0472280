//! Keyword search across the declared fields of a record type.
//!
//! The [`Search`] struct collects keywords and match settings, then folds
//! one elementary predicate per (keyword, field) pair into a single
//! composite [`Predicate`]:
//!
//! ```text
//! any_field     = OR over keywords ( OR over text fields ( field ~ keyword ) )
//! every_keyword = AND over keywords ( OR over text fields ( field ~ keyword ) )
//! ```
//!
//! Because both folds start from their identity, a search without keywords
//! or a type without text fields still yields a well-defined predicate.

use log::{debug, warn};

use crate::error::{Result, SiftError};
use crate::field::{Field, Filterable};
use crate::matcher::Matcher;
use crate::op::{Case, Op};
use crate::predicate::{all_of, any_of, Predicate};

/// A keyword search that can be applied to any [`Filterable`] type.
///
/// # Example
///
/// ```
/// use sift::{Field, Filterable, Search, Value};
///
/// struct User {
///     first_name: String,
///     last_name: String,
/// }
///
/// impl Filterable for User {
///     fn fields() -> &'static [Field<Self>] {
///         const FIELDS: &[Field<User>] = &[
///             Field::text("first_name", |u| Value::Text(&u.first_name)),
///             Field::text("last_name", |u| Value::Text(&u.last_name)),
///         ];
///         FIELDS
///     }
/// }
///
/// let users = vec![
///     User { first_name: "Joah".into(), last_name: "MacKenzie".into() },
///     User { first_name: "John".into(), last_name: "Doe".into() },
/// ];
///
/// let matched = Search::for_keyword("Doe").filter(&users).unwrap();
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].first_name, "John");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Search {
    keywords: Vec<String>,
    op: Op,
    case: Case,
}

impl Search {
    /// Creates a search with no keywords, `Contains` and case-insensitive
    /// matching.
    pub fn new() -> Self {
        Search::default()
    }

    /// Creates a search for a single keyword.
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Search::new().keyword(keyword)
    }

    /// Adds a keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Adds several keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Sets the match operator.
    pub fn op(mut self, op: Op) -> Self {
        self.op = op;
        self
    }

    /// Sets the case mode.
    pub fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Returns the keywords in insertion order.
    pub fn keyword_list(&self) -> &[String] {
        &self.keywords
    }

    /// Returns `true` if no keyword has been added.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    // ========================================================================
    // Predicate construction
    // ========================================================================

    /// Predicate matching records where any keyword is found in any text
    /// field.
    ///
    /// With no keywords, or on a type without text fields, the result
    /// matches nothing.
    pub fn any_field<T: Filterable>(&self) -> Result<Predicate<'static, T>> {
        let fields = text_fields::<T>();
        Ok(any_of(self.per_keyword(&fields)?))
    }

    /// Predicate matching records where every keyword is found in at least
    /// one text field.
    ///
    /// With no keywords the result matches everything.
    pub fn every_keyword<T: Filterable>(&self) -> Result<Predicate<'static, T>> {
        let fields = text_fields::<T>();
        Ok(all_of(self.per_keyword(&fields)?))
    }

    /// Predicate matching records where any keyword is found in one of the
    /// named fields.
    ///
    /// # Errors
    ///
    /// [`SiftError::UnknownField`] if a name is not declared on `T`, plus
    /// any error from [`Matcher::predicate_for`].
    pub fn in_fields<T: Filterable>(&self, names: &[&str]) -> Result<Predicate<'static, T>> {
        let fields = names
            .iter()
            .map(|name| T::field(name).ok_or_else(|| SiftError::UnknownField(name.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Ok(any_of(self.per_keyword(&fields)?))
    }

    fn matcher(&self, keyword: &str) -> Matcher {
        Matcher::new(self.op, keyword).case(self.case)
    }

    /// One composite per keyword: the OR over `fields` of the elementary
    /// predicates for that keyword.
    fn per_keyword<T: Filterable>(
        &self,
        fields: &[&'static Field<T>],
    ) -> Result<Vec<Predicate<'static, T>>> {
        debug!(
            "assembling {} search: {} keyword(s) over {} field(s) of {}",
            self.op,
            self.keywords.len(),
            fields.len(),
            std::any::type_name::<T>()
        );

        self.keywords
            .iter()
            .map(|keyword| {
                let matcher = self.matcher(keyword);
                fields
                    .iter()
                    .map(|field| matcher.predicate_for(field))
                    .collect::<Result<Vec<_>>>()
                    .map(any_of)
            })
            .collect()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Returns the records matching [`any_field`](Self::any_field), in order.
    pub fn filter<'s, T: Filterable>(&self, items: &'s [T]) -> Result<Vec<&'s T>> {
        let predicate = self.any_field::<T>()?;
        Ok(predicate.filter(items).collect())
    }

    /// Counts the records matching [`any_field`](Self::any_field).
    pub fn count<T: Filterable>(&self, items: &[T]) -> Result<usize> {
        Ok(self.any_field::<T>()?.count(items))
    }
}

fn text_fields<T: Filterable>() -> Vec<&'static Field<T>> {
    let fields: Vec<_> = T::text_fields().collect();
    if fields.is_empty() {
        warn!(
            "{} declares no text fields; search matches nothing",
            std::any::type_name::<T>()
        );
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Value};

    struct User {
        first_name: String,
        last_name: String,
        age: u8,
    }

    impl Filterable for User {
        fn fields() -> &'static [Field<Self>] {
            const FIELDS: &[Field<User>] = &[
                Field::text("first_name", |u| Value::Text(&u.first_name)),
                Field::text("last_name", |u| Value::Text(&u.last_name)),
                Field::number("age", |u| Value::Number(Number::from(u.age))),
            ];
            FIELDS
        }
    }

    struct Counter {
        hits: u64,
    }

    impl Filterable for Counter {
        fn fields() -> &'static [Field<Self>] {
            const FIELDS: &[Field<Counter>] =
                &[Field::number("hits", |c| Value::Number(Number::from(c.hits)))];
            FIELDS
        }
    }

    fn user(first: &str, last: &str) -> User {
        User {
            first_name: first.to_string(),
            last_name: last.to_string(),
            age: 30,
        }
    }

    fn names(found: &[&User]) -> Vec<String> {
        found
            .iter()
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .collect()
    }

    #[test]
    fn any_field_matches_first_or_last_name() {
        let users = vec![user("Joah", "MacKenzie"), user("John", "Doe")];

        let found = Search::for_keyword("Jo").filter(&users).unwrap();
        assert_eq!(names(&found), ["Joah MacKenzie", "John Doe"]);

        let found = Search::for_keyword("Doe").filter(&users).unwrap();
        assert_eq!(names(&found), ["John Doe"]);
    }

    #[test]
    fn any_field_skips_non_text_fields() {
        let users = vec![user("Joel", "Bob")];
        // "30" is the age, which is not searched by any_field.
        assert_eq!(Search::for_keyword("30").count(&users).unwrap(), 0);
    }

    #[test]
    fn multiple_keywords_or_and_and() {
        let users = vec![
            user("Joash", "Joe"),
            user("Joah", "MacKenzie"),
            user("Michael", "Joey"),
        ];
        let search = Search::new().keywords(["Joe", "Joa"]);

        let any = search.any_field::<User>().unwrap();
        assert_eq!(any.count(&users), 3);

        let every = search.every_keyword::<User>().unwrap();
        let found: Vec<_> = every.filter(&users).collect();
        assert_eq!(names(&found), ["Joash Joe"]);
    }

    #[test]
    fn empty_search_uses_fold_identities() {
        let users = vec![user("Joah", "MacKenzie")];
        let search = Search::new();
        assert!(search.is_empty());
        assert_eq!(search.any_field::<User>().unwrap().count(&users), 0);
        assert_eq!(search.every_keyword::<User>().unwrap().count(&users), 1);
    }

    #[test]
    fn type_without_text_fields_matches_nothing() {
        let counters = vec![Counter { hits: 1 }];
        assert_eq!(Search::for_keyword("1").count(&counters).unwrap(), 0);
    }

    #[test]
    fn in_fields_restricts_search() {
        let users = vec![user("Joash", "Joe"), user("Michael", "Joey")];
        let pred = Search::for_keyword("Joe")
            .in_fields::<User>(&["first_name"])
            .unwrap();
        assert_eq!(pred.count(&users), 0);

        let pred = Search::for_keyword("Joe")
            .in_fields::<User>(&["last_name"])
            .unwrap();
        assert_eq!(pred.count(&users), 2);
    }

    #[test]
    fn in_fields_reports_construction_errors() {
        let err = Search::for_keyword("Jo")
            .in_fields::<User>(&["nickname"])
            .unwrap_err();
        assert!(matches!(err, SiftError::UnknownField(ref name) if name == "nickname"));

        let err = Search::for_keyword("3")
            .in_fields::<User>(&["age"])
            .unwrap_err();
        assert!(matches!(err, SiftError::UnsupportedField { field: "age", .. }));

        let pred = Search::for_keyword("30")
            .op(Op::Eq)
            .in_fields::<User>(&["age"])
            .unwrap();
        assert_eq!(pred.count(&[user("Joel", "Bob")]), 1);
    }

    #[test]
    fn case_and_op_are_applied() {
        let users = vec![user("Joah", "MacKenzie"), user("John", "Doe")];
        let search = Search::for_keyword("jo").case(Case::Sensitive);
        assert_eq!(search.count(&users).unwrap(), 0);

        let search = Search::for_keyword("zie").op(Op::EndsWith);
        assert_eq!(search.count(&users).unwrap(), 1);
        assert_eq!(search.keyword_list(), ["zie"]);
    }
}
