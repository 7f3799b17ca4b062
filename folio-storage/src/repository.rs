use crate::error::{StorageError, StorageResult};
use crate::memory::MemoryStore;
use folio_cache::{CacheGateway, ModelCache};
use folio_lifecycle::{LifecycleConfig, LifecycleContext};
use folio_model::{Entity, FieldQuery, GatewayError, PersistenceGateway};
use folio_types::EntityId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::trace;

/// Read/write access to entities with the lifecycle applied.
#[derive(Debug, Clone)]
pub struct Repository {
    store: Arc<MemoryStore>,
    cache: Arc<ModelCache>,
    lifecycle: LifecycleContext,
}

impl Repository {
    /// Creates an empty repository. The store doubles as the lifecycle's
    /// persistence gateway and the cache is sized from `config`.
    pub fn new(config: LifecycleConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(config.cache.build());
        let lifecycle = LifecycleContext::new(store.clone(), cache.clone()).with_config(config);
        Self {
            store,
            cache,
            lifecycle,
        }
    }

    /// Replaces the lifecycle context, e.g. to inject a test clock. The
    /// context should have been built over [`Repository::store`] and
    /// [`Repository::cache`].
    pub fn with_lifecycle(mut self, lifecycle: LifecycleContext) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn lifecycle(&self) -> &LifecycleContext {
        &self.lifecycle
    }

    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<ModelCache> {
        &self.cache
    }

    /// Inserts or updates `entity`. On success its timestamps reflect the
    /// write.
    pub fn save<E: Entity + Serialize>(&self, entity: &mut E) -> StorageResult<()> {
        let store = &self.store;
        self.lifecycle.save_with(entity, |e| {
            let document =
                serde_json::to_value(e).map_err(|err| GatewayError::Query(err.to_string()))?;
            store.put(E::ENTITY_TYPE, e.id(), document)
        })?;
        Ok(())
    }

    /// Deletes a persisted entity. Only the caller whose removal actually
    /// took the document out of the store runs the `OnDelete` hooks.
    pub fn delete<E: Entity>(&self, entity: &E) -> StorageResult<()> {
        let store = &self.store;
        let removed = self
            .lifecycle
            .delete_with(entity, |e| store.remove(E::ENTITY_TYPE, e.id()))?;
        if !removed {
            return Err(StorageError::NotFound {
                entity_type: E::ENTITY_TYPE,
                id: entity.id(),
            });
        }
        Ok(())
    }

    /// Reads an entity by id.
    ///
    /// A cached artifact is returned as is. Otherwise the document is
    /// materialized from the store, `on_load` runs, and the cache is
    /// populated unless a write evicted in the meantime.
    pub fn get<E: Entity + DeserializeOwned>(&self, id: EntityId) -> StorageResult<Option<E>> {
        if let Some(artifact) = self.cache.lookup(E::ENTITY_TYPE, id) {
            trace!(entity_type = E::ENTITY_TYPE, %id, "Cache hit");
            return Ok(Some(E::deserialize(&*artifact)?));
        }

        // Taken before the store read so a save that lands after it cannot
        // have its eviction undone by this fill.
        let generation = self.cache.generation();
        let Some(document) = self.store.get(E::ENTITY_TYPE, id)? else {
            return Ok(None);
        };
        let entity = E::deserialize(&document)?;
        self.lifecycle.on_load(&entity)?;
        self.cache.insert_since(E::ENTITY_TYPE, id, document, generation);
        Ok(Some(entity))
    }

    /// Reads an entity by id, failing if it does not exist.
    pub fn require<E: Entity + DeserializeOwned>(&self, id: EntityId) -> StorageResult<E> {
        self.get(id)?.ok_or(StorageError::NotFound {
            entity_type: E::ENTITY_TYPE,
            id,
        })
    }

    /// Reads the entity whose `field` equals `value`, if any.
    pub fn find_by<E: Entity + DeserializeOwned>(
        &self,
        field: &str,
        value: &str,
    ) -> StorageResult<Option<E>> {
        let query = FieldQuery::new(field, value);
        match self.store.find_one(E::ENTITY_TYPE, &query)? {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }

    pub fn count<E: Entity>(&self) -> usize {
        self.store.count(E::ENTITY_TYPE)
    }
}
