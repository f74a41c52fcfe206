//! EntityStore - Abstract CRUD storage for entities.

use crate::{Entity, EntityId, Predicate};

/// Abstract CRUD storage for entities of one type.
///
/// Every operation is total: absence is reported through `Option` or an
/// empty `Vec`, never through an error.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Snapshot of every stored entity, in no particular order.
    fn find_all(&self) -> Vec<E>;

    /// Get an entity by ID. Returns None if not found.
    fn find_by_id(&self, id: EntityId) -> Option<E>;

    /// Upsert an entity.
    ///
    /// An entity without an id is assigned the next id from the store's
    /// counter. An entity with an id is stored under it as-is, replacing any
    /// previous entity with that id. Returns the stored entity.
    ///
    /// Allocated ids never wrap around. If the id space is exhausted the
    /// entity is not stored and comes back with its id still unset.
    fn save(&self, entity: E) -> E;

    fn exists_by_id(&self, id: EntityId) -> bool;

    /// Delete an entity by ID. Deleting a missing id is a no-op.
    fn delete_by_id(&self, id: EntityId);

    /// Find entities matching a predicate, evaluated over a snapshot.
    fn find_by(&self, predicate: &dyn Predicate<E>) -> Vec<E>;

    /// Find the first entity matching a predicate.
    fn find_one_by(&self, predicate: &dyn Predicate<E>) -> Option<E> {
        self.find_by(predicate).into_iter().next()
    }

    /// Get the entities for the given ids, skipping ids that are not stored.
    fn find_all_by_id(&self, ids: &[EntityId]) -> Vec<E> {
        ids.iter().filter_map(|id| self.find_by_id(*id)).collect()
    }

    /// Save each entity in order. Returns the stored entities.
    fn save_all<I>(&self, entities: I) -> Vec<E>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
    {
        entities.into_iter().map(|entity| self.save(entity)).collect()
    }

    fn count(&self) -> usize {
        self.find_all().len()
    }

    fn count_by(&self, predicate: &dyn Predicate<E>) -> usize {
        self.find_by(predicate).len()
    }

    /// Delete every entity. Allocated ids are still never reused.
    fn delete_all(&self);
}
