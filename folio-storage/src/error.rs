//! Error types for the storage layer.

use folio_lifecycle::LifecycleError;
use folio_model::{GatewayError, ValidationFailure};
use folio_types::EntityId;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: EntityId,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store could not be read.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A lifecycle transition failed (validation, hooks, or a collaborator).
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl StorageError {
    /// The ordered rule failures, if the write was rejected by validation.
    pub fn validation_failures(&self) -> Option<&[ValidationFailure]> {
        match self {
            Self::Lifecycle(e) => e.validation_failures(),
            _ => None,
        }
    }
}
