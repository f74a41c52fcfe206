//! Concurrent in-memory keyed entity store.
//!
//! Entities are held in an [`InMemoryEntityStore`], keyed by a store-assigned
//! [`EntityId`]. Ids come from an atomic counter and are never reused. Reads
//! return copies, and derived queries are expressed as composable
//! [`Predicate`]s.

mod config;
mod entity;
mod error;
mod query;
mod store;

pub use config::{IdPolicy, StoreConfig};
pub use entity::{Entity, EntityId};
pub use error::StoreError;
pub use query::{
    all_of, any_contains_ignore_case, any_of, at_least, at_most, contains_ignore_case, equals,
    equals_ignore_case, equals_str, AllOf, And, AnyContainsIgnoreCase, AnyOf, AtLeast, AtMost,
    ContainsIgnoreCase, Equals, EqualsIgnoreCase, EqualsStr, Not, Or, Predicate,
};
pub use store::{EntityStore, InMemoryEntityStore};

// Derive macro for the `Entity` trait.
pub use entity_store_macros::Entity;
