//! Lifecycle hook registry.
//!
//! Subscribers register callbacks per (entity type, [`LifecycleEvent`]).
//! The lifecycle layer dispatches to them synchronously, in registration
//! order, stopping at the first callback that fails.
//!
//! [`LifecycleEvent`]: folio_model::LifecycleEvent

mod error;
mod registry;

pub use error::HookDispatchError;
pub use registry::{HookRegistry, HookSubscription};
