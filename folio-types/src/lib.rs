//! Core type definitions for Folio.
//!
//! This crate defines the entity-agnostic types shared by every layer of
//! the content core:
//! - Entity identifiers (UUID v7)
//! - Creation/update timestamps carried by persisted entities
//! - A [`Clock`] abstraction so lifecycle timestamps can be driven in tests
//!
//! Concrete content types (blocks, pages, etc.) live in `folio-model`.

mod clock;
mod ids;
mod timestamps;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::EntityId;
pub use timestamps::Timestamps;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
