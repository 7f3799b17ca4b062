//! Error types for lifecycle transitions.

use folio_cache::CacheError;
use folio_hooks::HookDispatchError;
use folio_model::{GatewayError, ValidationErrors, ValidationFailure};
use thiserror::Error;

/// Result type for lifecycle transitions.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Why a lifecycle transition did not complete.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The entity failed one or more rules. Nothing was written, no hook
    /// ran, and the cache was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A hook subscriber failed. Steps after dispatch (cache eviction) were
    /// skipped; a storage write that already happened is not rolled back.
    #[error(transparent)]
    Hook(#[from] HookDispatchError),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The cache collaborator failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl LifecycleError {
    /// The ordered rule failures, if this is a validation error.
    pub fn validation_failures(&self) -> Option<&[ValidationFailure]> {
        match self {
            Self::Validation(errors) => Some(errors.failures()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
