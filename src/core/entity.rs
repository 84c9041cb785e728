//! Entity traits and id generation

use crate::core::field::FieldValue;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Base trait for all records held in the store.
///
/// An entity's id is assigned once at creation time and never changes. The id
/// type is per-entity: catalog entities use numeric ids, orders use their
/// human-facing `ORD-…` strings, website content is keyed by its content key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Unique identifier type for this entity
    type Id: Clone + Eq + Hash + Display + Send + Sync;

    /// The plural resource name used in routes and log fields (e.g. "products")
    fn resource_name() -> &'static str;

    /// The singular name used in error messages (e.g. "Product")
    fn entity_name() -> &'static str;

    /// Get the unique identifier of this instance
    fn id(&self) -> Self::Id;
}

/// Trait for entities that appear in searchable, sortable list views.
///
/// `indexed_fields` names the fields matched by free-text search;
/// `field_value` gives the query engine dynamic access to any sortable field.
/// Field keys use the serialized (camelCase) names, matching the column keys
/// list views send.
pub trait Listable: Entity {
    /// Fields matched by free-text search
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a field by its serialized name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// Monotonic id generator.
///
/// Hands out strictly increasing `u64` ids, unique for the lifetime of the
/// store even under rapid successive calls. Seed data reserves the low range;
/// the sequence starts above it.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence that starts at `first`
    pub fn starting_at(first: u64) -> Self {
        IdSequence {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next id
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
