use super::{GatewayErrorPolicy, ValidationFailure, ValidationResult};
use crate::{Entity, FieldQuery, GatewayError, PersistenceGateway};

/// Reads the string value of one field. `None` means the field is absent.
pub type ValueAccessor<E> = fn(&E) -> Option<&str>;

type Predicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// The check a [`Rule`] performs.
pub enum RuleKind<E> {
    /// Present and not blank.
    NotEmpty,
    /// Character count within `min..=max`. Absent values pass.
    Length { min: usize, max: usize },
    /// No other persisted entity of the same type has an equal value.
    Unique,
    /// Arbitrary predicate over the whole entity.
    Must(Predicate<E>),
}

/// A single predicate bound to a single field.
pub struct Rule<E> {
    field: &'static str,
    value: ValueAccessor<E>,
    kind: RuleKind<E>,
    message: Option<String>,
}

impl<E> Rule<E> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> &RuleKind<E> {
        &self.kind
    }

    fn failure(&self, default: impl FnOnce() -> String) -> ValidationFailure {
        let message = self.message.clone().unwrap_or_else(default);
        ValidationFailure::new(self.field, message)
    }
}

impl<E: Entity> Rule<E> {
    /// Evaluates this rule. `Ok(None)` means the rule passed.
    fn check(
        &self,
        entity: &E,
        gateway: &dyn PersistenceGateway,
        policy: GatewayErrorPolicy,
    ) -> Result<Option<ValidationFailure>, GatewayError> {
        let value = (self.value)(entity);
        let field = self.field;

        let failure = match &self.kind {
            RuleKind::NotEmpty => match value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(self.failure(|| format!("'{field}' must not be empty."))),
            },
            RuleKind::Length { min, max } => {
                let count = value.map_or(0, |v| v.chars().count());
                match value {
                    Some(_) if count < *min || count > *max => Some(self.failure(|| {
                        format!(
                            "'{field}' must be between {min} and {max} characters. \
                             You entered {count} characters."
                        )
                    })),
                    _ => None,
                }
            }
            RuleKind::Unique => {
                let value = value.unwrap_or_default();
                let query = FieldQuery::new(field, value).excluding(entity.id());
                match gateway.find_one(E::ENTITY_TYPE, &query) {
                    Ok(None) => None,
                    Ok(Some(_)) => Some(self.failure(|| format!("{field} should be unique"))),
                    Err(e) => match policy {
                        GatewayErrorPolicy::FailClosed => {
                            Some(self.failure(|| format!("{field} should be unique")))
                        }
                        GatewayErrorPolicy::Surface => return Err(e),
                    },
                }
            }
            RuleKind::Must(predicate) => {
                if predicate(entity) {
                    None
                } else {
                    Some(self.failure(|| {
                        format!("The specified condition was not met for '{field}'.")
                    }))
                }
            }
        };
        Ok(failure)
    }
}

/// The ordered rules declared for one entity type.
pub struct RuleSet<E> {
    rules: Vec<Rule<E>>,
}

impl<E> RuleSet<E> {
    pub fn builder() -> RuleSetBuilder<E> {
        RuleSetBuilder { rules: Vec::new() }
    }

    /// A rule set that accepts everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[Rule<E>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<E: Entity> RuleSet<E> {
    /// Runs every rule in declaration order and collects all failures.
    ///
    /// Returns `Err` only when a uniqueness rule hits a gateway error under
    /// [`GatewayErrorPolicy::Surface`].
    pub fn validate(
        &self,
        entity: &E,
        gateway: &dyn PersistenceGateway,
        policy: GatewayErrorPolicy,
    ) -> Result<ValidationResult, GatewayError> {
        let mut result = ValidationResult::new();
        for rule in &self.rules {
            if let Some(failure) = rule.check(entity, gateway, policy)? {
                result.push(failure);
            }
        }
        Ok(result)
    }
}

/// Accumulates rules field by field.
pub struct RuleSetBuilder<E> {
    rules: Vec<Rule<E>>,
}

impl<E> RuleSetBuilder<E> {
    /// Starts declaring rules for `field`, read through `value`.
    pub fn rule_for(self, field: &'static str, value: ValueAccessor<E>) -> FieldRules<E> {
        FieldRules {
            builder: self,
            field,
            value,
        }
    }

    pub fn build(self) -> RuleSet<E> {
        RuleSet { rules: self.rules }
    }
}

/// Rules being declared for one field.
pub struct FieldRules<E> {
    builder: RuleSetBuilder<E>,
    field: &'static str,
    value: ValueAccessor<E>,
}

impl<E> FieldRules<E> {
    fn push(mut self, kind: RuleKind<E>) -> Self {
        self.builder.rules.push(Rule {
            field: self.field,
            value: self.value,
            kind,
            message: None,
        });
        self
    }

    pub fn not_empty(self) -> Self {
        self.push(RuleKind::NotEmpty)
    }

    /// Inclusive character-count bounds. A `min` of 0 allows the empty
    /// string unless `not_empty` is also declared.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.push(RuleKind::Length { min, max })
    }

    pub fn max_length(self, max: usize) -> Self {
        self.length(0, max)
    }

    pub fn unique(self) -> Self {
        self.push(RuleKind::Unique)
    }

    pub fn must(self, predicate: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        self.push(RuleKind::Must(Box::new(predicate)))
    }

    /// Replaces the message of the most recently declared rule.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(rule) = self.builder.rules.last_mut() {
            rule.message = Some(message.into());
        }
        self
    }

    pub fn rule_for(self, field: &'static str, value: ValueAccessor<E>) -> FieldRules<E> {
        self.builder.rule_for(field, value)
    }

    pub fn build(self) -> RuleSet<E> {
        self.builder.build()
    }
}
