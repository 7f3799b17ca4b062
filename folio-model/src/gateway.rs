//! Read-only storage access consumed by validation.

use folio_types::EntityId;
use thiserror::Error;

/// Errors reported by a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backing store could not be reached.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but rejected or failed the query.
    #[error("gateway query failed: {0}")]
    Query(String),
}

/// An equality predicate on one field of one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldQuery<'a> {
    pub field: &'a str,
    pub value: &'a str,
    /// Entity to leave out of the match, typically the one being validated.
    pub exclude: Option<EntityId>,
}

impl<'a> FieldQuery<'a> {
    pub fn new(field: &'a str, value: &'a str) -> Self {
        Self {
            field,
            value,
            exclude: None,
        }
    }

    pub fn excluding(mut self, id: EntityId) -> Self {
        self.exclude = Some(id);
        self
    }
}

/// Query access to persisted entities.
///
/// Implementations must be read-only: validation calls `find_one` while a
/// save is in flight and must not trigger another save.
pub trait PersistenceGateway: Send + Sync {
    /// Returns the id of any persisted entity of `entity_type` matching
    /// `query`, or `None` if there is none.
    fn find_one(
        &self,
        entity_type: &str,
        query: &FieldQuery<'_>,
    ) -> Result<Option<EntityId>, GatewayError>;
}

/// A gateway over an empty store. Every query matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGateway;

impl PersistenceGateway for NullGateway {
    fn find_one(
        &self,
        _entity_type: &str,
        _query: &FieldQuery<'_>,
    ) -> Result<Option<EntityId>, GatewayError> {
        Ok(None)
    }
}
