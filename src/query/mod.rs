//! Queries - composable predicates evaluated by `EntityStore::find_by`.
//!
//! A predicate is anything implementing [`Predicate`]. Plain closures work,
//! and the field helpers in this module cover the usual derived queries
//! (substring search, list membership, numeric thresholds, exact matches).
//!
//! ## Example
//!
//! ```ignore
//! use entity_store::{at_least, contains_ignore_case, EntityStore, Predicate};
//!
//! let recent_clean = contains_ignore_case(|b: &Book| b.title.as_str(), "clean")
//!     .and(at_least(|b: &Book| b.published_year, 2010));
//! let books = store.find_by(&recent_clean);
//! ```

mod field;

pub use field::{
    any_contains_ignore_case, at_least, at_most, contains_ignore_case, equals, equals_ignore_case,
    equals_str, AnyContainsIgnoreCase, AtLeast, AtMost, ContainsIgnoreCase, Equals,
    EqualsIgnoreCase, EqualsStr,
};

/// A filter over entities of type `E`.
///
/// The store never interprets a predicate; it only calls [`Predicate::test`]
/// on each entity of a snapshot.
pub trait Predicate<E>: Send + Sync {
    /// Returns true if the entity matches.
    fn test(&self, entity: &E) -> bool;

    /// Matches when both predicates match.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<E>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// Matches when either predicate matches.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<E>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// Matches when this predicate does not.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// Erase the concrete type, e.g. to collect predicates for [`all_of`].
    fn boxed(self) -> Box<dyn Predicate<E>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<E, F> Predicate<E> for F
where
    F: Fn(&E) -> bool + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        self(entity)
    }
}

pub struct And<L, R> {
    left: L,
    right: R,
}

impl<E, L, R> Predicate<E> for And<L, R>
where
    L: Predicate<E>,
    R: Predicate<E>,
{
    fn test(&self, entity: &E) -> bool {
        self.left.test(entity) && self.right.test(entity)
    }
}

pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<E, L, R> Predicate<E> for Or<L, R>
where
    L: Predicate<E>,
    R: Predicate<E>,
{
    fn test(&self, entity: &E) -> bool {
        self.left.test(entity) || self.right.test(entity)
    }
}

pub struct Not<P> {
    inner: P,
}

impl<E, P> Predicate<E> for Not<P>
where
    P: Predicate<E>,
{
    fn test(&self, entity: &E) -> bool {
        !self.inner.test(entity)
    }
}

/// Matches when every predicate matches. An empty list matches everything.
pub struct AllOf<E> {
    predicates: Vec<Box<dyn Predicate<E>>>,
}

pub fn all_of<E>(predicates: Vec<Box<dyn Predicate<E>>>) -> AllOf<E> {
    AllOf { predicates }
}

impl<E> Predicate<E> for AllOf<E> {
    fn test(&self, entity: &E) -> bool {
        self.predicates.iter().all(|p| p.test(entity))
    }
}

/// Matches when any predicate matches. An empty list matches nothing.
pub struct AnyOf<E> {
    predicates: Vec<Box<dyn Predicate<E>>>,
}

pub fn any_of<E>(predicates: Vec<Box<dyn Predicate<E>>>) -> AnyOf<E> {
    AnyOf { predicates }
}

impl<E> Predicate<E> for AnyOf<E> {
    fn test(&self, entity: &E) -> bool {
        self.predicates.iter().any(|p| p.test(entity))
    }
}
