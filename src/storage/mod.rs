//! Storage seam and implementations
//!
//! Services take an [`EntityStore`] rather than touching collections
//! directly, so a durable backend can replace the in-memory one without
//! changing query or mutation semantics.

pub mod in_memory;
pub mod seed;

use crate::core::entity::Entity;
use crate::core::error::AdminResult;
use async_trait::async_trait;

/// Ordered, id-keyed collection of one entity type
///
/// Implementations keep a stable iteration order: `insert` places new
/// entities at the front (newest first), `update` keeps the entity's
/// position. A query started after a mutation completes observes it.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert a new entity at the front of the collection
    async fn insert(&self, entity: T) -> AdminResult<T>;

    /// Fetch one entity by id
    async fn get(&self, id: &T::Id) -> AdminResult<Option<T>>;

    /// Snapshot the whole collection in store order
    async fn list(&self) -> AdminResult<Vec<T>>;

    /// Replace an existing entity in place; NotFound when absent
    async fn update(&self, id: &T::Id, entity: T) -> AdminResult<T>;

    /// Remove an entity; NotFound when absent
    async fn delete(&self, id: &T::Id) -> AdminResult<()>;

    /// Number of entities currently held
    async fn count(&self) -> AdminResult<usize>;
}
