//! Error types for cache collaborators.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors a cache backend can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The cache backend could not be reached.
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}
