//! Field-level predicate building blocks.
//!
//! Each helper takes an accessor closure that projects the field to test, so
//! the store stays agnostic of entity layout.

use super::Predicate;

/// String field contains a substring, ignoring case.
pub struct ContainsIgnoreCase<F> {
    field: F,
    needle: String,
}

pub fn contains_ignore_case<E, F>(field: F, needle: &str) -> ContainsIgnoreCase<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    ContainsIgnoreCase {
        field,
        needle: needle.to_lowercase(),
    }
}

impl<E, F> Predicate<E> for ContainsIgnoreCase<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity).to_lowercase().contains(&self.needle)
    }
}

/// Some element of a list field contains a substring, ignoring case.
pub struct AnyContainsIgnoreCase<F> {
    field: F,
    needle: String,
}

pub fn any_contains_ignore_case<E, F>(field: F, needle: &str) -> AnyContainsIgnoreCase<F>
where
    F: Fn(&E) -> &[String] + Send + Sync,
{
    AnyContainsIgnoreCase {
        field,
        needle: needle.to_lowercase(),
    }
}

impl<E, F> Predicate<E> for AnyContainsIgnoreCase<F>
where
    F: Fn(&E) -> &[String] + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity)
            .iter()
            .any(|item| item.to_lowercase().contains(&self.needle))
    }
}

/// Optional field is present and `>= threshold`.
pub struct AtLeast<F, V> {
    field: F,
    threshold: V,
}

pub fn at_least<E, F, V>(field: F, threshold: V) -> AtLeast<F, V>
where
    F: Fn(&E) -> Option<V> + Send + Sync,
    V: PartialOrd + Send + Sync,
{
    AtLeast { field, threshold }
}

impl<E, F, V> Predicate<E> for AtLeast<F, V>
where
    F: Fn(&E) -> Option<V> + Send + Sync,
    V: PartialOrd + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity).is_some_and(|value| value >= self.threshold)
    }
}

/// Optional field is present and `<= threshold`.
pub struct AtMost<F, V> {
    field: F,
    threshold: V,
}

pub fn at_most<E, F, V>(field: F, threshold: V) -> AtMost<F, V>
where
    F: Fn(&E) -> Option<V> + Send + Sync,
    V: PartialOrd + Send + Sync,
{
    AtMost { field, threshold }
}

impl<E, F, V> Predicate<E> for AtMost<F, V>
where
    F: Fn(&E) -> Option<V> + Send + Sync,
    V: PartialOrd + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity).is_some_and(|value| value <= self.threshold)
    }
}

/// By-value field equals `value`.
pub struct Equals<F, V> {
    field: F,
    value: V,
}

pub fn equals<E, F, V>(field: F, value: V) -> Equals<F, V>
where
    F: Fn(&E) -> V + Send + Sync,
    V: PartialEq + Send + Sync,
{
    Equals { field, value }
}

impl<E, F, V> Predicate<E> for Equals<F, V>
where
    F: Fn(&E) -> V + Send + Sync,
    V: PartialEq + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity) == self.value
    }
}

/// String field equals `value` exactly.
pub struct EqualsStr<F> {
    field: F,
    value: String,
}

pub fn equals_str<E, F>(field: F, value: &str) -> EqualsStr<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    EqualsStr {
        field,
        value: value.to_string(),
    }
}

impl<E, F> Predicate<E> for EqualsStr<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity) == self.value
    }
}

/// String field equals `value`, ignoring case.
pub struct EqualsIgnoreCase<F> {
    field: F,
    value: String,
}

pub fn equals_ignore_case<E, F>(field: F, value: &str) -> EqualsIgnoreCase<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    EqualsIgnoreCase {
        field,
        value: value.to_lowercase(),
    }
}

impl<E, F> Predicate<E> for EqualsIgnoreCase<F>
where
    F: Fn(&E) -> &str + Send + Sync,
{
    fn test(&self, entity: &E) -> bool {
        (self.field)(entity).to_lowercase() == self.value
    }
}
