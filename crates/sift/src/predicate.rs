//! Boolean predicates and the combinators that fold them together.
//!
//! A [`Predicate`] wraps a pure `Fn(&T) -> bool`. Predicates combine with
//! [`or`] and [`and`] (also available as methods and as the `|`, `&` and `!`
//! operators). [`always_false`] and [`always_true`] are the identity elements
//! for those two operations, so a list of predicates of any length can be
//! folded into one:
//!
//! ```text
//! any_of([p1, p2, p3]) = always_false | p1 | p2 | p3
//! all_of([p1, p2, p3]) = always_true  & p1 & p2 & p3
//! ```
//!
//! Folding an empty list gives back the identity: `any_of([])` matches
//! nothing, `all_of([])` matches everything.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A pure boolean test over a subject of type `T`.
///
/// # Example
///
/// ```
/// use sift::{any_of, Predicate};
///
/// let short = Predicate::new(|s: &str| s.len() < 4);
/// let has_jo = Predicate::new(|s: &str| s.contains("Jo"));
///
/// let either = any_of([short, has_jo]);
/// assert!(either.test("Bob"));
/// assert!(either.test("Joash"));
/// assert!(!either.test("Michael"));
/// ```
pub struct Predicate<'a, T: ?Sized> {
    test: Box<dyn Fn(&T) -> bool + Send + Sync + 'a>,
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    /// Wraps a closure as a predicate.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        Predicate { test: Box::new(f) }
    }

    /// A predicate that holds for every subject.
    pub fn always() -> Self {
        Predicate::new(|_| true)
    }

    /// A predicate that holds for no subject.
    pub fn never() -> Self {
        Predicate::new(|_| false)
    }

    /// Evaluates the predicate against `subject`.
    pub fn test(&self, subject: &T) -> bool {
        (self.test)(subject)
    }

    /// Logical OR of `self` and `other`.
    pub fn or(self, other: Self) -> Self {
        Predicate::new(move |x| self.test(x) || other.test(x))
    }

    /// Logical AND of `self` and `other`.
    pub fn and(self, other: Self) -> Self {
        Predicate::new(move |x| self.test(x) && other.test(x))
    }

    /// Logical negation of `self`.
    pub fn negate(self) -> Self {
        Predicate::new(move |x| !self.test(x))
    }

    /// Lazily yields the subjects that satisfy this predicate, in order.
    pub fn filter<'s, I>(&self, subjects: I) -> Matches<'_, 'a, I::IntoIter, T>
    where
        I: IntoIterator<Item = &'s T>,
        T: 's,
    {
        filter(subjects, self)
    }

    /// Counts the subjects that satisfy this predicate.
    pub fn count<'s, I>(&self, subjects: I) -> usize
    where
        I: IntoIterator<Item = &'s T>,
        T: 's,
    {
        self.filter(subjects).count()
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<'a, T: ?Sized + 'a> BitOr for Predicate<'a, T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<'a, T: ?Sized + 'a> BitAnd for Predicate<'a, T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<'a, T: ?Sized + 'a> Not for Predicate<'a, T> {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

/// Identity for [`or`]: false for every input.
pub fn always_false<'a, T: ?Sized + 'a>() -> Predicate<'a, T> {
    Predicate::never()
}

/// Identity for [`and`]: true for every input.
pub fn always_true<'a, T: ?Sized + 'a>() -> Predicate<'a, T> {
    Predicate::always()
}

/// Returns a predicate evaluating `a(x) || b(x)`.
pub fn or<'a, T: ?Sized + 'a>(a: Predicate<'a, T>, b: Predicate<'a, T>) -> Predicate<'a, T> {
    a.or(b)
}

/// Returns a predicate evaluating `a(x) && b(x)`.
pub fn and<'a, T: ?Sized + 'a>(a: Predicate<'a, T>, b: Predicate<'a, T>) -> Predicate<'a, T> {
    a.and(b)
}

/// Returns a predicate evaluating `!a(x)`.
pub fn not<'a, T: ?Sized + 'a>(a: Predicate<'a, T>) -> Predicate<'a, T> {
    a.negate()
}

/// OR-folds `predicates`, starting from [`always_false`].
pub fn any_of<'a, T, I>(predicates: I) -> Predicate<'a, T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = Predicate<'a, T>>,
{
    predicates.into_iter().fold(always_false(), |acc, p| acc.or(p))
}

/// AND-folds `predicates`, starting from [`always_true`].
pub fn all_of<'a, T, I>(predicates: I) -> Predicate<'a, T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = Predicate<'a, T>>,
{
    predicates.into_iter().fold(always_true(), |acc, p| acc.and(p))
}

/// Lazily yields, in original order, the subjects for which `predicate` holds.
///
/// ```
/// use sift::{filter, Predicate};
///
/// let names = ["Joah", "Michael", "John"];
/// let jo = Predicate::new(|s: &&str| s.starts_with("Jo"));
/// let found: Vec<_> = filter(&names, &jo).collect();
/// assert_eq!(found, [&"Joah", &"John"]);
/// ```
pub fn filter<'s, 'p, 'a, I, T>(
    subjects: I,
    predicate: &'p Predicate<'a, T>,
) -> Matches<'p, 'a, I::IntoIter, T>
where
    I: IntoIterator<Item = &'s T>,
    T: ?Sized + 's,
{
    Matches {
        iter: subjects.into_iter(),
        predicate,
    }
}

/// Iterator returned by [`filter`] and [`Predicate::filter`].
pub struct Matches<'p, 'a, I, T: ?Sized> {
    iter: I,
    predicate: &'p Predicate<'a, T>,
}

impl<'s, 'p, 'a, I, T> Iterator for Matches<'p, 'a, I, T>
where
    I: Iterator<Item = &'s T>,
    T: ?Sized + 's,
{
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        let predicate = self.predicate;
        self.iter.find(|subject| predicate.test(subject))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
