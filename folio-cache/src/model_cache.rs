use crate::error::CacheResult;
use folio_model::Entity;
use folio_types::EntityId;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Identifies one cached artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub entity_type: String,
    pub id: EntityId,
}

impl CacheKey {
    pub fn new(entity_type: impl Into<String>, id: EntityId) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn of<E: Entity>(id: EntityId) -> Self {
        Self::new(E::ENTITY_TYPE, id)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// The cache surface visible to the lifecycle layer.
///
/// Implementations must tolerate `remove` racing with `lookup` from
/// unrelated readers.
pub trait CacheGateway: Send + Sync {
    /// Returns the cached artifact for the key, if any.
    fn lookup(&self, entity_type: &str, id: EntityId) -> Option<Arc<Value>>;

    /// Evicts the artifact for the key. Removing an absent key succeeds.
    fn remove(&self, entity_type: &str, id: EntityId) -> CacheResult<()>;
}

/// In-process cache of materialized entities.
///
/// Every eviction bumps a generation counter. A reader that takes
/// [`ModelCache::generation`] before reading storage can fill the cache
/// with [`ModelCache::insert_since`], which drops the artifact if anything
/// was evicted in between.
pub struct ModelCache {
    entries: RwLock<Entries>,
}

struct Entries {
    map: HashMap<CacheKey, Arc<Value>>,
    generation: u64,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries {
                map: HashMap::with_capacity(capacity),
                generation: 0,
            }),
        }
    }

    /// Stores a materialized artifact unconditionally.
    pub fn insert(&self, entity_type: &str, id: EntityId, artifact: Value) -> Arc<Value> {
        let artifact = Arc::new(artifact);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .insert(CacheKey::new(entity_type, id), Arc::clone(&artifact));
        artifact
    }

    /// Current eviction generation.
    pub fn generation(&self) -> u64 {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Stores `artifact` only if no eviction happened since `generation`
    /// was observed. Returns `None` when the artifact was dropped.
    pub fn insert_since(
        &self,
        entity_type: &str,
        id: EntityId,
        artifact: Value,
        generation: u64,
    ) -> Option<Arc<Value>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.generation != generation {
            trace!(entity_type, %id, "Stale cache fill dropped");
            return None;
        }
        let artifact = Arc::new(artifact);
        entries
            .map
            .insert(CacheKey::new(entity_type, id), Arc::clone(&artifact));
        Some(artifact)
    }

    pub fn lookup_model<E: Entity>(&self, id: EntityId) -> Option<Arc<Value>> {
        self.lookup(E::ENTITY_TYPE, id)
    }

    pub fn remove_model<E: Entity>(&self, id: EntityId) -> CacheResult<()> {
        self.remove(E::ENTITY_TYPE, id)
    }

    pub fn contains(&self, entity_type: &str, id: EntityId) -> bool {
        self.lookup(entity_type, id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.map.clear();
        entries.generation += 1;
    }
}

impl CacheGateway for ModelCache {
    fn lookup(&self, entity_type: &str, id: EntityId) -> Option<Arc<Value>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .get(&CacheKey::new(entity_type, id))
            .cloned()
    }

    fn remove(&self, entity_type: &str, id: EntityId) -> CacheResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.map.remove(&CacheKey::new(entity_type, id)).is_some();
        entries.generation += 1;
        drop(entries);
        trace!(entity_type, %id, removed, "Cache entry invalidated");
        Ok(())
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCache")
            .field("entries", &self.len())
            .finish()
    }
}
