//! Creation and last-update instants carried by every persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When an entity was first persisted and when it was last persisted.
///
/// Both are `None` for an entity that has never been saved. `created` is
/// written once; `updated` moves forward on every save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Timestamps of an entity that has not been persisted yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            created: None,
            updated: None,
        }
    }

    /// True until the first successful save stamps `created`.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.created.is_none()
    }

    /// Records a persist at `now`.
    ///
    /// The first call sets `created` and `updated` to the same instant;
    /// later calls only move `updated`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created.is_none() {
            self.created = Some(now);
        }
        self.updated = Some(now);
    }
}
