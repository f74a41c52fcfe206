//! InMemoryEntityStore - HashMap-backed concurrent entity store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace};

use super::EntityStore;
use crate::{Entity, EntityId, IdPolicy, Predicate, StoreConfig, StoreError};

type Storage<E> = HashMap<EntityId, Arc<E>>;

/// In-memory entity store backed by a HashMap and an atomic id counter.
///
/// Clone-friendly via Arc: clones share the same entities and counter, so a
/// store handle can be passed to every request-handling thread.
///
/// Entities are held behind `Arc` so reads only copy pointers while the lock
/// is held. Predicates and entity clones run after the lock is released, which
/// means a predicate may call back into the store.
pub struct InMemoryEntityStore<E> {
    storage: Arc<RwLock<Storage<E>>>,
    next_id: Arc<AtomicU64>,
    id_policy: IdPolicy,
}

impl<E> Clone for InMemoryEntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            next_id: Arc::clone(&self.next_id),
            id_policy: self.id_policy,
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryEntityStore<E> {
    /// Create a new empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(config.first_id)),
            id_policy: config.id_policy,
        }
    }

    // A panic while holding the lock cannot leave the map half-written
    // (every write is a single insert or remove), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Storage<E>> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Storage<E>> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Point-in-time copy of the stored entity handles.
    fn snapshot(&self) -> Vec<Arc<E>> {
        self.read().values().cloned().collect()
    }

    /// Take the next free id. Must be called with the write lock held.
    ///
    /// Ids already in use are skipped. The counter never wraps: once it
    /// reaches `u64::MAX` the id space is exhausted and `None` is returned.
    fn allocate_id(&self, storage: &Storage<E>) -> Option<EntityId> {
        loop {
            let id = self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                    next.checked_add(1)
                })
                .ok()
                .map(EntityId::new)?;

            if !storage.contains_key(&id) {
                return Some(id);
            }
            debug!(collection = E::COLLECTION, %id, "skipped occupied id");
        }
    }
}

impl<E: Entity + DeserializeOwned> InMemoryEntityStore<E> {
    /// Save every entity from a JSON array, in array order.
    ///
    /// Nothing is saved if the JSON does not parse.
    pub fn seed_json(&self, json: &str) -> Result<Vec<E>, StoreError> {
        let entities: Vec<E> =
            serde_json::from_str(json).map_err(|e| StoreError::Seed(e.to_string()))?;
        let saved = self.save_all(entities);
        info!(collection = E::COLLECTION, count = saved.len(), "seeded store");
        Ok(saved)
    }
}

impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    fn find_all(&self) -> Vec<E> {
        let snapshot = self.snapshot();
        trace!(collection = E::COLLECTION, count = snapshot.len(), "find_all");
        snapshot.iter().map(|entity| E::clone(entity)).collect()
    }

    fn find_by_id(&self, id: EntityId) -> Option<E> {
        let found = self.read().get(&id).cloned();
        trace!(collection = E::COLLECTION, %id, found = found.is_some(), "find_by_id");
        found.map(|entity| E::clone(&entity))
    }

    fn save(&self, mut entity: E) -> E {
        // Allocation happens under the write lock so a reconciled manual id
        // and a freshly allocated id can never meet.
        let mut storage = self.write();

        match entity.id() {
            Some(id) => {
                if self.id_policy == IdPolicy::Reconcile {
                    self.next_id
                        .fetch_max(id.value().saturating_add(1), Ordering::SeqCst);
                }
                let replaced = storage.insert(id, Arc::new(entity.clone())).is_some();
                debug!(collection = E::COLLECTION, %id, replaced, "saved entity");
            }
            None => match self.allocate_id(&storage) {
                Some(id) => {
                    entity.set_id(id);
                    storage.insert(id, Arc::new(entity.clone()));
                    debug!(collection = E::COLLECTION, %id, "allocated id for new entity");
                }
                None => {
                    // Returned without an id and not stored.
                    error!(
                        collection = E::COLLECTION,
                        "id space exhausted, entity was not saved"
                    );
                }
            },
        }

        entity
    }

    fn exists_by_id(&self, id: EntityId) -> bool {
        self.read().contains_key(&id)
    }

    fn delete_by_id(&self, id: EntityId) {
        let removed = self.write().remove(&id).is_some();
        debug!(collection = E::COLLECTION, %id, removed, "delete_by_id");
    }

    fn find_by(&self, predicate: &dyn Predicate<E>) -> Vec<E> {
        let results: Vec<E> = self
            .snapshot()
            .iter()
            .filter(|entity| predicate.test(entity))
            .map(|entity| E::clone(entity))
            .collect();
        trace!(collection = E::COLLECTION, matched = results.len(), "find_by");
        results
    }

    fn find_one_by(&self, predicate: &dyn Predicate<E>) -> Option<E> {
        self.snapshot()
            .iter()
            .find(|entity| predicate.test(entity))
            .map(|entity| E::clone(entity))
    }

    fn find_all_by_id(&self, ids: &[EntityId]) -> Vec<E> {
        let found: Vec<Arc<E>> = {
            let storage = self.read();
            ids.iter().filter_map(|id| storage.get(id).cloned()).collect()
        };
        found.iter().map(|entity| E::clone(entity)).collect()
    }

    fn count(&self) -> usize {
        self.read().len()
    }

    fn count_by(&self, predicate: &dyn Predicate<E>) -> usize {
        self.snapshot()
            .iter()
            .filter(|entity| predicate.test(entity))
            .count()
    }

    fn delete_all(&self) {
        let mut storage = self.write();
        let removed = storage.len();
        storage.clear();
        debug!(collection = E::COLLECTION, removed, "delete_all");
    }
}
