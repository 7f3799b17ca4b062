use crate::config::LifecycleConfig;
use crate::error::LifecycleResult;
use folio_cache::CacheGateway;
use folio_hooks::HookRegistry;
use folio_model::{Entity, GatewayError, LifecycleEvent, PersistenceGateway, ValidationResult};
use folio_types::{Clock, SystemClock};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Shared collaborators of the lifecycle transitions.
///
/// Built once at startup and cloned into whatever handles requests; every
/// field is reference counted, so clones share the same hook registry and
/// cache.
#[derive(Clone)]
pub struct LifecycleContext {
    hooks: Arc<HookRegistry>,
    cache: Arc<dyn CacheGateway>,
    gateway: Arc<dyn PersistenceGateway>,
    clock: Arc<dyn Clock>,
    config: LifecycleConfig,
}

impl LifecycleContext {
    /// Creates a context with an empty hook registry, the system clock, and
    /// default configuration.
    pub fn new(gateway: Arc<dyn PersistenceGateway>, cache: Arc<dyn CacheGateway>) -> Self {
        Self {
            hooks: Arc::new(HookRegistry::new()),
            cache,
            gateway,
            clock: Arc::new(SystemClock),
            config: LifecycleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares an existing registry instead of the context's own.
    pub fn with_hooks(mut self, hooks: Arc<HookRegistry>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The registry subscribers register against.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn cache(&self) -> &dyn CacheGateway {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Runs `E`'s rule set against `entity` without any other effect.
    pub fn validate<E: Entity>(&self, entity: &E) -> LifecycleResult<ValidationResult> {
        let result = E::rules().validate(
            entity,
            self.gateway.as_ref(),
            self.config.validation.on_gateway_error,
        )?;
        Ok(result)
    }

    /// Materialize transition. Call once per entity read from storage,
    /// before handing it to the caller.
    pub fn on_load<E: Entity>(&self, entity: &E) -> LifecycleResult<()> {
        debug!(entity_type = E::ENTITY_TYPE, id = %entity.id(), "Entity loaded");
        self.hooks.dispatch(LifecycleEvent::OnLoad, entity)?;
        Ok(())
    }

    /// Persist transition for callers that perform the storage write
    /// themselves after this returns.
    pub fn on_save<E: Entity>(&self, entity: &mut E) -> LifecycleResult<()> {
        self.save_with(entity, |_| Ok(()))
    }

    /// Persist transition with the storage write in the middle.
    ///
    /// Order: validate, stamp timestamps, `write`, `OnSave` hooks, cache
    /// eviction. Each step runs only if the previous one succeeded. If
    /// validation fails nothing else happens. If `write` fails the
    /// timestamps are restored. Hooks run after the write, so a hook
    /// failure leaves the write in place and skips the eviction.
    pub fn save_with<E, F>(&self, entity: &mut E, write: F) -> LifecycleResult<()>
    where
        E: Entity,
        F: FnOnce(&E) -> Result<(), GatewayError>,
    {
        self.validate(&*entity)?.into_result()?;

        let previous = *entity.timestamps();
        entity.timestamps_mut().touch(self.clock.now());
        if let Err(e) = write(&*entity) {
            *entity.timestamps_mut() = previous;
            return Err(e.into());
        }

        let id = entity.id();
        debug!(
            entity_type = E::ENTITY_TYPE,
            %id,
            created = previous.is_new(),
            "Entity saved"
        );
        self.hooks.dispatch(LifecycleEvent::OnSave, &*entity)?;
        self.cache.remove(E::ENTITY_TYPE, id)?;
        Ok(())
    }

    /// Remove transition for callers that perform the storage delete
    /// themselves.
    pub fn on_delete<E: Entity>(&self, entity: &E) -> LifecycleResult<()> {
        self.delete_with(entity, |_| Ok(true))?;
        Ok(())
    }

    /// Remove transition with the storage delete first. No validation.
    ///
    /// `delete` reports whether it removed anything. When it did not, no
    /// hook runs, nothing is evicted, and `Ok(false)` is returned.
    pub fn delete_with<E, F>(&self, entity: &E, delete: F) -> LifecycleResult<bool>
    where
        E: Entity,
        F: FnOnce(&E) -> Result<bool, GatewayError>,
    {
        let id = entity.id();
        if !delete(entity)? {
            trace!(entity_type = E::ENTITY_TYPE, %id, "Nothing to delete");
            return Ok(false);
        }

        debug!(entity_type = E::ENTITY_TYPE, %id, "Entity deleted");
        self.hooks.dispatch(LifecycleEvent::OnDelete, entity)?;
        self.cache.remove(E::ENTITY_TYPE, id)?;
        Ok(true)
    }
}

impl fmt::Debug for LifecycleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleContext")
            .field("hooks", &self.hooks)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
