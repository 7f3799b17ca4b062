use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle notification point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The entity was materialized from storage.
    OnLoad,
    /// The entity passed validation and was persisted (insert or update).
    OnSave,
    /// The entity is being removed from storage.
    OnDelete,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 3] = [Self::OnLoad, Self::OnSave, Self::OnDelete];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnLoad => "on_load",
            Self::OnSave => "on_save",
            Self::OnDelete => "on_delete",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
