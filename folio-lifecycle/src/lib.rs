//! Entity lifecycle orchestration for Folio.
//!
//! [`LifecycleContext`] runs the three transitions every persisted entity
//! goes through:
//!
//! - **load**: dispatch `OnLoad` hooks.
//! - **save**: validate, stamp timestamps, write, dispatch `OnSave` hooks,
//!   evict the cache entry. A validation failure stops everything before
//!   the first side effect.
//! - **delete**: delete, dispatch `OnDelete` hooks, evict the cache entry.
//!
//! The context owns no storage. Callers either invoke the transitions
//! around their own writes or pass the write in via
//! [`LifecycleContext::save_with`] / [`LifecycleContext::delete_with`].

mod config;
mod context;
mod error;

pub use config::{CacheConfig, ConfigError, LifecycleConfig, ValidationConfig};
pub use context::LifecycleContext;
pub use error::{LifecycleError, LifecycleResult};
