//! Model cache for Folio.
//!
//! Holds previously materialized entities keyed by (entity type, id). The
//! read path populates it; the lifecycle layer only ever removes from it,
//! through the [`CacheGateway`] trait.

mod error;
mod model_cache;

pub use error::{CacheError, CacheResult};
pub use model_cache::{CacheGateway, CacheKey, ModelCache};
