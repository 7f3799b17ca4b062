use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of running a rule set. Valid iff there are no failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures in rule declaration order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Failures recorded against `field`.
    pub fn failures_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ValidationFailure> + 'a {
        self.failures.iter().filter(move |f| f.field == field)
    }

    pub fn has_failure_for(&self, field: &str) -> bool {
        self.failures_for(field).next().is_some()
    }

    /// Converts into `Err` carrying every failure when invalid.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationErrors(self.failures))
        }
    }
}

/// A failed validation, carrying the full ordered failure list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join(.0))]
pub struct ValidationErrors(pub Vec<ValidationFailure>);

impl ValidationErrors {
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.0
    }
}

fn join(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
