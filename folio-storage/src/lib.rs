//! In-memory storage for Folio entities.
//!
//! Reference implementation of the collaborators the lifecycle core
//! expects around it:
//!
//! - [`MemoryStore`] keeps entities as JSON documents per entity type and
//!   answers uniqueness queries as a [`PersistenceGateway`].
//! - [`Repository`] is the read/write path: it runs the lifecycle
//!   transitions around every write and delete, calls `on_load` after
//!   materializing a document, and populates the model cache on reads.
//!
//! [`PersistenceGateway`]: folio_model::PersistenceGateway

mod error;
mod memory;
mod repository;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use repository::Repository;
