use super::ContentBlock;
use serde::{Deserialize, Serialize};

/// Unformatted string content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub body: String,
}

impl Text {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl ContentBlock for Text {
    const NAME: &'static str = "Text";
}

impl From<String> for Text {
    fn from(body: String) -> Self {
        Self { body }
    }
}

impl From<&str> for Text {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}
