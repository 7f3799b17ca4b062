use crate::validation::RuleSet;
use crate::Entity;
use folio_types::{EntityId, Timestamps};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A site-global reusable content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Unique, URL-safe short name.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Main body. Opaque to the core.
    #[serde(default)]
    pub body: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Block {
    pub const NAME_MAX_LENGTH: usize = 128;
    pub const SLUG_MAX_LENGTH: usize = 128;
    pub const DESCRIPTION_MAX_LENGTH: usize = 255;

    /// Creates an unsaved block with a fresh id.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            body: String::new(),
            timestamps: Timestamps::new(),
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl Entity for Block {
    const ENTITY_TYPE: &'static str = "block";

    fn id(&self) -> EntityId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    fn rules() -> &'static RuleSet<Self> {
        static RULES: OnceLock<RuleSet<Block>> = OnceLock::new();
        RULES.get_or_init(|| {
            RuleSet::builder()
                .rule_for("Name", |b: &Block| Some(b.name.as_str()))
                .not_empty()
                .max_length(Block::NAME_MAX_LENGTH)
                .rule_for("Description", |b: &Block| b.description.as_deref())
                .max_length(Block::DESCRIPTION_MAX_LENGTH)
                .rule_for("Slug", |b: &Block| Some(b.slug.as_str()))
                .not_empty()
                .max_length(Block::SLUG_MAX_LENGTH)
                .unique()
                .with_message("Slug should be unique")
                .build()
        })
    }
}
