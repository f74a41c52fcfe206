//! Entities - records owned by an entity store and keyed by a store-assigned id.
//!
//! ## Example
//!
//! ```ignore
//! use entity_store::{Entity, EntityId};
//!
//! #[derive(Clone, Serialize, Deserialize, Entity)]
//! #[entity(collection = "books")]
//! struct Book {
//!     pub id: Option<EntityId>,
//!     pub title: String,
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by an entity store.
///
/// Backed by a counter, but callers should only rely on equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(value: u64) -> Self {
        EntityId(value)
    }

    /// Raw counter value, e.g. for rendering in a URL path.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        EntityId(value)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for types that can be held by an entity store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The collection name for this entity type (e.g., "books", "orders").
    /// Used to label log output.
    const COLLECTION: &'static str;

    /// Returns the identifier, or `None` if the entity has not been stored yet.
    fn id(&self) -> Option<EntityId>;

    /// Assigns the identifier. Called by the store when allocating a new id.
    fn set_id(&mut self, id: EntityId);
}
