use crate::validation::RuleSet;
use folio_types::{EntityId, Timestamps};

/// A persisted content object subject to the load/save/delete lifecycle.
///
/// Implementors expose their identity and timestamps and declare a fixed
/// rule set. The rule set is per type, not per instance, so it is returned
/// from an associated function and usually held in a `OnceLock`.
pub trait Entity: Send + Sync + Sized + 'static {
    /// Name of the entity type. Scopes uniqueness queries, hook
    /// subscriptions, and cache keys.
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> EntityId;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Field rules checked before every save, in declaration order.
    fn rules() -> &'static RuleSet<Self>;
}
