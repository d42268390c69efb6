use std::fmt;

use serde::{Deserialize, Serialize};

/// Which namespace a category's runtime data lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    /// One global namespace shared by every character.
    Shared,
    /// One namespace per character.
    #[default]
    Character,
}

impl CategoryScope {
    /// The stored spelling: `shared` or `character`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Character => "character",
        }
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered grouping of item definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Unique key. Items reference it by value, so it is never renamed.
    pub key: String,
    pub name: String,
    /// Opaque icon identifier, resolved by the renderer.
    #[serde(default)]
    pub icon: String,
    /// Ascending sort weight. Ties keep registry order.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub scope: CategoryScope,
}

impl CategoryDefinition {
    /// Creates a category with no icon and order `0`.
    pub fn new(key: impl Into<String>, name: impl Into<String>, scope: CategoryScope) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: String::new(),
            order: 0,
            scope,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Whether a registry will accept this definition: key and name must be non-empty.
    pub fn is_saveable(&self) -> bool {
        !self.key.is_empty() && !self.name.is_empty()
    }
}
