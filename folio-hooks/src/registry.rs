use crate::error::HookDispatchError;
use folio_model::{Entity, LifecycleEvent};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

type Callback = Arc<dyn Fn(&dyn Any) -> anyhow::Result<()> + Send + Sync>;

type HookKey = (TypeId, LifecycleEvent);

struct Subscriber {
    seq: u64,
    callback: Callback,
}

/// Handle to one registered callback, used to unregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookSubscription {
    type_id: TypeId,
    entity_type: &'static str,
    event: LifecycleEvent,
    seq: u64,
}

impl HookSubscription {
    pub fn entity_type(&self) -> &'static str {
        self.entity_type
    }

    pub fn event(&self) -> LifecycleEvent {
        self.event
    }
}

/// Ordered, multi-subscriber callbacks per (entity type, event).
///
/// Registration is expected at startup; dispatch is safe from any number of
/// threads. Callbacks run without the registry lock held, so a callback may
/// itself register or unregister.
pub struct HookRegistry {
    subscribers: RwLock<HashMap<HookKey, Vec<Subscriber>>>,
    next_seq: AtomicU64,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Appends `callback` to the subscribers of `event` for `E`.
    pub fn register<E, F>(&self, event: LifecycleEvent, callback: F) -> HookSubscription
    where
        E: Entity,
        F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let callback: Callback = Arc::new(move |entity: &dyn Any| {
            // Keyed by TypeId, so the downcast cannot miss.
            match entity.downcast_ref::<E>() {
                Some(entity) => callback(entity),
                None => Ok(()),
            }
        });

        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((TypeId::of::<E>(), event))
            .or_default()
            .push(Subscriber { seq, callback });

        debug!(entity_type = E::ENTITY_TYPE, %event, seq, "Hook registered");
        HookSubscription {
            type_id: TypeId::of::<E>(),
            entity_type: E::ENTITY_TYPE,
            event,
            seq,
        }
    }

    /// Removes a previously registered callback. Returns false if it was
    /// already gone.
    pub fn unregister(&self, subscription: HookSubscription) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let key = (subscription.type_id, subscription.event);
        let Some(list) = subscribers.get_mut(&key) else {
            return false;
        };
        let before = list.len();
        list.retain(|s| s.seq != subscription.seq);
        let removed = list.len() != before;
        if list.is_empty() {
            subscribers.remove(&key);
        }
        removed
    }

    /// Invokes every callback for (`E`, `event`) in registration order.
    ///
    /// Stops at the first failing callback and returns its error; the
    /// remaining callbacks are not invoked. No subscribers is a no-op.
    pub fn dispatch<E: Entity>(
        &self,
        event: LifecycleEvent,
        entity: &E,
    ) -> Result<(), HookDispatchError> {
        let callbacks: Vec<Callback> = {
            let subscribers = self
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            match subscribers.get(&(TypeId::of::<E>(), event)) {
                Some(list) => list.iter().map(|s| Arc::clone(&s.callback)).collect(),
                None => return Ok(()),
            }
        };

        trace!(
            entity_type = E::ENTITY_TYPE,
            %event,
            subscribers = callbacks.len(),
            "Dispatching hooks"
        );
        for (index, callback) in callbacks.iter().enumerate() {
            callback(entity as &dyn Any).map_err(|source| HookDispatchError {
                entity_type: E::ENTITY_TYPE,
                event,
                index,
                source,
            })?;
        }
        Ok(())
    }

    /// Number of callbacks registered for (`E`, `event`).
    pub fn subscriber_count<E: Entity>(&self, event: LifecycleEvent) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(TypeId::of::<E>(), event))
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Drops every subscription.
    pub fn clear(&self) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("HookRegistry")
            .field("keys", &subscribers.len())
            .field(
                "subscribers",
                &subscribers.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}
