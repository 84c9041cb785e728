//! In-memory implementation of [`EntityStore`]
//!
//! Backs each entity type with an insertion-ordered `IndexMap` behind an
//! `RwLock`, so list snapshots come back newest first and reads don't block
//! each other. This is the reference store for development and tests; a
//! durable backend plugs in behind the same trait.

use crate::core::entity::Entity;
use crate::core::error::{AdminError, AdminResult};
use crate::storage::EntityStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// In-memory entity store
#[derive(Clone)]
pub struct InMemoryStore<T: Entity> {
    entries: Arc<RwLock<IndexMap<T::Id, T>>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryStore {
            entries: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-populated in the given order (first item in front)
    pub fn with_entities(entities: Vec<T>) -> Self {
        let map = entities.into_iter().map(|e| (e.id(), e)).collect();
        InMemoryStore {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    fn read(&self) -> AdminResult<RwLockReadGuard<'_, IndexMap<T::Id, T>>> {
        self.entries
            .read()
            .map_err(|e| AdminError::Transient(format!("store lock poisoned: {e}")))
    }

    fn write(&self) -> AdminResult<RwLockWriteGuard<'_, IndexMap<T::Id, T>>> {
        self.entries
            .write()
            .map_err(|e| AdminError::Transient(format!("store lock poisoned: {e}")))
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn insert(&self, entity: T) -> AdminResult<T> {
        let mut entries = self.write()?;
        debug!(resource = T::resource_name(), id = %entity.id(), "inserting entity");
        entries.shift_insert(0, entity.id(), entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: &T::Id) -> AdminResult<Option<T>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> AdminResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update(&self, id: &T::Id, entity: T) -> AdminResult<T> {
        let mut entries = self.write()?;
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| AdminError::not_found(T::entity_name(), id))?;
        // Existing key keeps its position, so updates don't reorder the list.
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &T::Id) -> AdminResult<()> {
        let mut entries = self.write()?;
        debug!(resource = T::resource_name(), id = %id, "deleting entity");
        entries
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| AdminError::not_found(T::entity_name(), id))
    }

    async fn count(&self) -> AdminResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Offer, OfferDraft};

    fn offer(id: u64, title: &str) -> Offer {
        OfferDraft {
            title: title.to_string(),
            description: String::new(),
            promo_code: "CODE".to_string(),
        }
        .into_offer(id)
    }

    #[tokio::test]
    async fn test_insert_puts_newest_first() {
        let store = InMemoryStore::new();
        store.insert(offer(1, "first")).await.unwrap();
        store.insert(offer(2, "second")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[tokio::test]
    async fn test_update_preserves_position() {
        let store = InMemoryStore::with_entities(vec![offer(1, "a"), offer(2, "b"), offer(3, "c")]);
        store.update(&2, offer(2, "b2")).await.unwrap();

        let all = store.list().await.unwrap();
        let ids: Vec<u64> = all.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[1].title, "b2");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store: InMemoryStore<Offer> = InMemoryStore::new();
        let err = store.update(&9, offer(9, "ghost")).await.unwrap_err();
        assert!(matches!(err, AdminError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_permanent() {
        let store = InMemoryStore::with_entities(vec![offer(1, "a")]);
        store.delete(&1).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(matches!(
            store.delete(&1).await.unwrap_err(),
            AdminError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_mutation_visible_to_next_list() {
        let store = InMemoryStore::with_entities(vec![offer(1, "a")]);
        store.insert(offer(2, "b")).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
