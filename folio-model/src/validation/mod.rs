//! Declarative field validation.
//!
//! A [`RuleSet`] is built once per entity type and evaluated against an
//! instance plus a read-only [`PersistenceGateway`](crate::PersistenceGateway).
//! Every rule runs on every call, so a single [`ValidationResult`] reports
//! all violations in declaration order.

mod result;
mod rule;

pub use result::{ValidationErrors, ValidationFailure, ValidationResult};
pub use rule::{FieldRules, Rule, RuleKind, RuleSet, RuleSetBuilder, ValueAccessor};

use crate::{Entity, GatewayError, PersistenceGateway};
use serde::{Deserialize, Serialize};

/// What a uniqueness rule does when the gateway cannot answer.
///
/// Neither policy lets the entity pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorPolicy {
    /// Record the rule as failed, as if a duplicate existed.
    #[default]
    FailClosed,
    /// Abort validation and return the gateway error to the caller.
    Surface,
}

/// Validates `entity` against its type's rule set.
pub fn validate<E: Entity>(
    entity: &E,
    gateway: &dyn PersistenceGateway,
    policy: GatewayErrorPolicy,
) -> Result<ValidationResult, GatewayError> {
    E::rules().validate(entity, gateway, policy)
}
