//! Error types for hook dispatch.

use folio_model::LifecycleEvent;
use thiserror::Error;

/// A subscriber failed during dispatch. Later subscribers were not run.
#[derive(Debug, Error)]
#[error("{event} hook #{index} for '{entity_type}' failed: {source}")]
pub struct HookDispatchError {
    pub entity_type: &'static str,
    pub event: LifecycleEvent,
    /// Position of the failing subscriber in registration order.
    pub index: usize,
    #[source]
    pub source: anyhow::Error,
}
